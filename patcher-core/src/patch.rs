use crate::diagnostics::Diagnostics;
use crate::layout::{BinaryLayout, TeamOrder, HR_DERBY_BATTER_COUNT, TEAM_SLOTS};
use crate::record::{compose, PlayerData, PlayerRecord, Role};
use crate::rom::Rom;
use crate::roster::{League, RosterProvider, SpecialRosterEntry};
use crate::validate::validate_dataset;
use crate::{PatcherError, Result};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TeamSummary {
    pub team: String,
    pub offset: usize,
    pub written: usize,
    pub skipped: usize,
}

/// Outcome of a successful patch pass.
#[derive(Clone, Debug, Default)]
pub struct PatchReport {
    pub teams: Vec<TeamSummary>,
    pub special_written: usize,
    pub special_skipped: usize,
    pub diagnostics: Diagnostics,
}

impl PatchReport {
    pub fn records_written(&self) -> usize {
        self.teams.iter().map(|t| t.written).sum::<usize>() + self.special_written
    }

    pub fn records_skipped(&self) -> usize {
        self.teams.iter().map(|t| t.skipped).sum::<usize>() + self.special_skipped
    }

    /// Plain-text report written next to the patched image.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("teams:\n");
        for team in &self.teams {
            out.push_str(&format!(
                "  {:<4} @ 0x{:06X}: {} written, {} skipped\n",
                team.team, team.offset, team.written, team.skipped
            ));
        }
        out.push_str(&format!(
            "home run derby: {} written, {} skipped\n",
            self.special_written, self.special_skipped
        ));
        out.push_str(&format!(
            "diagnostics: {} warning(s), {} error(s)\n",
            self.diagnostics.warnings(),
            self.diagnostics.errors()
        ));
        for diag in self.diagnostics.entries() {
            out.push_str(&format!("  {diag}\n"));
        }
        out
    }
}

/// Derby entrants, National League first, each league by roster position.
pub fn ordered_special_roster<P>(provider: &P) -> Vec<&SpecialRosterEntry>
where
    P: RosterProvider + ?Sized,
{
    let mut entrants = provider.special_roster();
    entrants.sort_by_key(|e| {
        let league_rank = match e.league {
            League::National => 0,
            League::American => 1,
        };
        (league_rank, e.roster_position)
    });
    entrants
}

fn patch_teams<P>(
    rom: &mut Rom,
    provider: &P,
    order: &TeamOrder,
    layout: &BinaryLayout,
    diags: &mut Diagnostics,
) -> Result<Vec<TeamSummary>>
where
    P: RosterProvider + ?Sized,
{
    let mut teams = Vec::with_capacity(order.len());
    for (index, &team) in order.codes().iter().enumerate() {
        let mut lineup = provider.team_lineup(team);
        lineup.sort_by_key(|entry| entry.roster_position);

        let mut summary = TeamSummary {
            team: team.to_string(),
            offset: layout.team_offset(index),
            written: 0,
            skipped: 0,
        };
        for (slot, entry) in lineup.iter().take(TEAM_SLOTS).enumerate() {
            let offset = layout.slot_offset(index, slot);
            let data = PlayerData::gather(provider, &entry.player_id, entry.position.as_deref());
            let existing = rom.record(offset)?;
            match compose(existing, &data, entry.roster_position, Role::for_slot(slot), diags) {
                Some(record) => {
                    rom.write_record(offset, &record)?;
                    summary.written += 1;
                }
                None => summary.skipped += 1,
            }
        }
        log::debug!(
            "{team}: {} written, {} skipped at 0x{:06X}",
            summary.written,
            summary.skipped,
            summary.offset
        );
        teams.push(summary);
    }
    Ok(teams)
}

fn patch_special_roster<P>(
    rom: &mut Rom,
    provider: &P,
    layout: &BinaryLayout,
    diags: &mut Diagnostics,
) -> Result<(usize, usize)>
where
    P: RosterProvider + ?Sized,
{
    let entrants = ordered_special_roster(provider);
    if entrants.len() != HR_DERBY_BATTER_COUNT {
        return Err(PatcherError::SpecialRosterSize {
            expected: HR_DERBY_BATTER_COUNT,
            found: entrants.len(),
        });
    }

    let (mut written, mut skipped) = (0, 0);
    for (index, entrant) in entrants.iter().enumerate() {
        let position = provider
            .lineup_entry(&entrant.player_id)
            .and_then(|l| l.position.as_deref());
        let data = PlayerData::gather(provider, &entrant.player_id, position);
        let offset = layout.special_offset(index);
        match compose(
            PlayerRecord::zeroed(),
            &data,
            entrant.roster_position,
            Role::Batter,
            diags,
        ) {
            Some(record) => {
                rom.write_record(offset, &record)?;
                written += 1;
            }
            None => skipped += 1,
        }
    }
    Ok((written, skipped))
}

/// Validate, resolve the layout, then patch every team table followed by
/// the home run derby table.
///
/// Dataset and anchor failures return before the image is modified. A
/// derby table of the wrong size fails after the team tables have been
/// written into `rom`; callers must discard the image in that case.
pub fn patch_image<P>(rom: &mut Rom, provider: &P, order: &TeamOrder) -> Result<PatchReport>
where
    P: RosterProvider + ?Sized,
{
    validate_dataset(provider, order)?;
    let layout = BinaryLayout::resolve(rom.bytes(), order)?;

    let mut diagnostics = Diagnostics::new();
    let teams = patch_teams(rom, provider, order, &layout, &mut diagnostics)?;
    let (special_written, special_skipped) =
        patch_special_roster(rom, provider, &layout, &mut diagnostics)?;

    let report = PatchReport {
        teams,
        special_written,
        special_skipped,
        diagnostics,
    };
    log::info!(
        "patched {} records ({} skipped) with {} warning(s) and {} error(s)",
        report.records_written(),
        report.records_skipped(),
        report.diagnostics.warnings(),
        report.diagnostics.errors()
    );
    Ok(report)
}
