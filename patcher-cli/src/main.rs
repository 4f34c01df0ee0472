use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};

use patcher_core::{run, PatchSettings, PatcherError, RunSummary};

#[derive(Debug, Parser)]
#[command(
    name = "griffey-patch",
    version,
    about = "Updates Ken Griffey Jr. Presents MLB rosters and statistics to a chosen season"
)]
struct Args {
    /// ROM image to patch.
    #[arg(required_unless_present = "settings")]
    rom: Option<PathBuf>,

    /// Roster dataset for the season (JSON, optionally gzip-compressed).
    #[arg(long, required_unless_present = "settings")]
    dataset: Option<PathBuf>,

    /// Season the dataset must describe.
    #[arg(long)]
    year: Option<u16>,

    /// Write the patched ROM here instead of overwriting the input.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Also write `<output>.report.txt`.
    #[arg(long, default_value_t = false)]
    report: bool,

    /// JSON settings file; other flags override its values.
    #[arg(long, value_name = "JSON")]
    settings: Option<PathBuf>,

    /// Increase log detail (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Mirror log output to a file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn level_from_args(args: &Args) -> LevelFilter {
    if args.quiet {
        return LevelFilter::Warn;
    }
    match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), fern::InitError> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());
    if let Some(path) = log_file {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    dispatch.apply()?;
    Ok(())
}

fn build_settings(args: &Args) -> patcher_core::Result<PatchSettings> {
    let mut settings = match &args.settings {
        Some(path) => PatchSettings::from_json_file(path)?,
        None => {
            // clap enforces rom and dataset when there is no settings file.
            let (Some(rom), Some(dataset)) = (&args.rom, &args.dataset) else {
                return Err(PatcherError::Config(
                    "a ROM and --dataset are required without --settings".to_string(),
                ));
            };
            PatchSettings {
                rom_path: rom.clone(),
                dataset_path: dataset.clone(),
                output_path: None,
                year: None,
                report: false,
            }
        }
    };

    if let Some(rom) = &args.rom {
        settings.rom_path = rom.clone();
    }
    if let Some(dataset) = &args.dataset {
        settings.dataset_path = dataset.clone();
    }
    if args.output.is_some() {
        settings.output_path = args.output.clone();
    }
    if args.year.is_some() {
        settings.year = args.year;
    }
    settings.report |= args.report;
    Ok(settings)
}

fn print_summary(summary: &RunSummary) {
    let report = &summary.report;
    println!(
        "Patched {} for the {} season: {} records written, {} skipped.",
        summary.output_path.display(),
        summary.year,
        report.records_written(),
        report.records_skipped()
    );
    if !report.diagnostics.is_empty() {
        println!(
            "{} warning(s), {} error(s) while composing records.",
            report.diagnostics.warnings(),
            report.diagnostics.errors()
        );
    }
}

fn main() {
    let args = Args::parse();

    if let Err(err) = init_logging(level_from_args(&args), args.log_file.as_deref()) {
        eprintln!("Error: failed to initialise logging: {err}");
        std::process::exit(1);
    }

    let result = build_settings(&args).and_then(run);
    match result {
        Ok(summary) => print_summary(&summary),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
