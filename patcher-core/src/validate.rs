use std::fmt;

use crate::layout::{TeamOrder, TEAM_SLOTS};
use crate::roster::{FieldPosition, League, LineupEntry, RosterProvider};
use crate::{PatcherError, Result};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShapeIssue {
    TotalRows {
        expected: usize,
        found: usize,
    },
    TeamRows {
        team: String,
        found: usize,
    },
    MixedLeague {
        team: String,
    },
    Lineup {
        team: String,
        /// Real club for the season, when the data names one.
        club: Option<String>,
        league: League,
        missing: Vec<FieldPosition>,
        duplicates: Vec<String>,
        found: Vec<String>,
    },
}

impl fmt::Display for ShapeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeIssue::TotalRows { expected, found } => write!(
                f,
                "lineup table has {found} rows, expected exactly {expected}"
            ),
            ShapeIssue::TeamRows { team, found } => write!(
                f,
                "team {team} has {found} players, expected {TEAM_SLOTS}"
            ),
            ShapeIssue::MixedLeague { team } => {
                write!(f, "team {team} has rows in more than one league")
            }
            ShapeIssue::Lineup {
                team,
                club,
                league,
                missing,
                duplicates,
                found,
            } => {
                write!(f, "lineup error for team {team}")?;
                if let Some(club) = club {
                    write!(f, " [{club}]")?;
                }
                write!(f, " ({}):", league.code())?;
                if !missing.is_empty() {
                    let labels: Vec<_> = missing.iter().map(|p| p.label()).collect();
                    write!(f, " missing {};", labels.join(", "))?;
                }
                if !duplicates.is_empty() {
                    write!(f, " duplicate(s) {};", duplicates.join(", "))?;
                }
                write!(f, " positions found [{}]", found.join(", "))
            }
        }
    }
}

fn lineup_issue(team: &str, league: League, rows: &[&LineupEntry]) -> Option<ShapeIssue> {
    let n = league.lineup_size();
    let mut top: Vec<&LineupEntry> = rows
        .iter()
        .copied()
        .filter(|r| (1..=n as i64).contains(&r.roster_position))
        .collect();
    top.sort_by_key(|r| r.roster_position);

    let found: Vec<String> = top
        .iter()
        .map(|r| r.position.clone().unwrap_or_else(|| "<none>".to_string()))
        .collect();

    let missing: Vec<FieldPosition> = league
        .mandatory_positions()
        .iter()
        .copied()
        .filter(|m| !found.iter().any(|f| FieldPosition::parse(f) == Some(*m)))
        .collect();

    let mut duplicates: Vec<String> = Vec::new();
    for (i, pos) in found.iter().enumerate() {
        if found[..i].contains(pos) && !duplicates.contains(pos) {
            duplicates.push(pos.clone());
        }
    }

    if missing.is_empty() && duplicates.is_empty() && found.len() == n {
        return None;
    }
    Some(ShapeIssue::Lineup {
        team: team.to_string(),
        club: rows.iter().find_map(|r| r.team_name.clone()),
        league,
        missing,
        duplicates,
        found,
    })
}

/// Every shape problem in the dataset, in traversal order.
pub fn dataset_issues<P>(provider: &P, order: &TeamOrder) -> Vec<ShapeIssue>
where
    P: RosterProvider + ?Sized,
{
    let mut issues = Vec::new();

    let expected = order.expected_rows();
    let found = provider.lineup_count();
    if found != expected {
        issues.push(ShapeIssue::TotalRows { expected, found });
    }

    for &team in order.codes() {
        let rows = provider.team_lineup(team);
        if rows.len() != TEAM_SLOTS {
            issues.push(ShapeIssue::TeamRows {
                team: team.to_string(),
                found: rows.len(),
            });
        }
        let Some(first) = rows.first() else {
            continue;
        };

        let league = first.league;
        if rows.iter().any(|r| r.league != league) {
            issues.push(ShapeIssue::MixedLeague {
                team: team.to_string(),
            });
            continue;
        }
        if let Some(issue) = lineup_issue(team, league, &rows) {
            issues.push(issue);
        }
    }

    issues
}

/// All-or-nothing gate run before patching.
pub fn validate_dataset<P>(provider: &P, order: &TeamOrder) -> Result<()>
where
    P: RosterProvider + ?Sized,
{
    let issues = dataset_issues(provider, order);
    if issues.is_empty() {
        log::info!("roster dataset passed validation");
        return Ok(());
    }
    for issue in &issues {
        log::error!("{issue}");
    }
    Err(PatcherError::DatasetShape(issues))
}
