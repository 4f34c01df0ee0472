use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod bits;
pub mod dataset;
pub mod diagnostics;
pub mod layout;
pub mod numeric;
pub mod patch;
pub mod record;
pub mod rom;
pub mod roster;
pub mod text;
pub mod validate;

#[cfg(test)]
mod testing;

pub use dataset::RosterDataset;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use layout::{Anchor, BinaryLayout, TeamOrder, STOCK_TEAM_ORDER};
pub use patch::{patch_image, PatchReport, TeamSummary};
pub use record::{compose, PlayerData, PlayerRecord, Role};
pub use rom::Rom;
pub use roster::RosterProvider;
pub use validate::{validate_dataset, ShapeIssue};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchSettings {
    pub rom_path: PathBuf,
    pub dataset_path: PathBuf,
    /// Where to write the patched ROM. `None` overwrites `rom_path`.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    /// Season the dataset must describe.
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub report: bool,
}

impl PatchSettings {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PatcherError::Config(format!(
                "Settings file does not exist: {}",
                path.display()
            )));
        }
        let raw = fs::read(path)?;
        Ok(serde_json::from_slice(&raw)?)
    }

    pub fn output_path(&self) -> &Path {
        self.output_path.as_deref().unwrap_or(&self.rom_path)
    }

    pub fn report_path(&self) -> PathBuf {
        let mut name = OsString::from(self.output_path().as_os_str());
        name.push(".report.txt");
        PathBuf::from(name)
    }
}

#[derive(Debug, Error)]
pub enum PatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("{} marker not found in ROM image", .anchor.label())]
    AnchorNotFound { anchor: Anchor },
    #[error("{region} ends at 0x{end:X}, past the end of the {len}-byte image")]
    LayoutOutOfBounds {
        region: String,
        end: usize,
        len: usize,
    },
    #[error("roster dataset failed validation with {} issue(s)", .0.len())]
    DatasetShape(Vec<ShapeIssue>),
    #[error("home run derby needs exactly {expected} batters, dataset has {found}")]
    SpecialRosterSize { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, PatcherError>;

#[derive(Debug)]
pub struct RunSummary {
    pub year: u16,
    pub output_path: PathBuf,
    pub report: PatchReport,
}

pub fn run(settings: PatchSettings) -> Result<RunSummary> {
    let dataset = RosterDataset::load(&settings.dataset_path)?;
    if let Some(year) = settings.year {
        if year != dataset.year {
            return Err(PatcherError::Config(format!(
                "Requested year {year} but {} holds the {} season",
                settings.dataset_path.display(),
                dataset.year
            )));
        }
    }

    let mut rom = Rom::load(&settings.rom_path)?;
    let report = patch_image(&mut rom, &dataset, &STOCK_TEAM_ORDER)?;

    let output_path = settings.output_path().to_path_buf();
    rom.save(&output_path)?;

    if settings.report {
        let mut text = format!(
            "rom: {}\ndataset: {} ({} season)\noutput: {}\n",
            settings.rom_path.display(),
            settings.dataset_path.display(),
            dataset.year,
            output_path.display()
        );
        text.push_str(&report.render());
        let report_path = settings.report_path();
        fs::write(&report_path, text)?;
        log::info!("patch report written to {}", report_path.display());
    }

    log::info!("ROM successfully updated for year {}", dataset.year);
    Ok(RunSummary {
        year: dataset.year,
        output_path,
        report,
    })
}
