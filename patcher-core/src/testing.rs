use crate::dataset::RosterDataset;
use crate::layout::{FIRST_TEAM_MARKER, HR_DERBY_MARKER, STOCK_TEAM_ORDER, TEAM_SLOTS};
use crate::roster::{
    BattingAppearance, BattingRatings, League, LineupEntry, PitchingAppearance, PitchingRatings,
    PlayerProfile, Ratings, SeasonStats, SpecialRosterEntry,
};

pub const TEAM_DATA_START: usize = 0x100;
pub const DERBY_DATA_START: usize = 0x8000;
const IMAGE_LEN: usize = 0x9000;

const AL_LINEUP: [&str; 9] = ["C", "1B", "2B", "3B", "SS", "LF", "CF", "RF", "DH"];

/// 0xEE everywhere except the two anchors.
pub fn sample_image() -> Vec<u8> {
    let mut image = vec![0xEE; IMAGE_LEN];
    let team_marker = TEAM_DATA_START - FIRST_TEAM_MARKER.len();
    image[team_marker..TEAM_DATA_START].copy_from_slice(FIRST_TEAM_MARKER);
    let derby_marker = DERBY_DATA_START - HR_DERBY_MARKER.len();
    image[derby_marker..DERBY_DATA_START].copy_from_slice(HR_DERBY_MARKER);
    image
}

fn position_for(league: League, slot: usize) -> &'static str {
    let lineup = league.lineup_size();
    if slot <= lineup {
        AL_LINEUP[slot - 1]
    } else if slot <= 15 {
        if slot % 2 == 0 {
            "IF"
        } else {
            "OF"
        }
    } else {
        "P"
    }
}

/// Every stock team filled with 25 identical "Ken Griffey"s, told apart by
/// id (`{team}{slot:02}`) and jersey number (the slot).
pub fn sample_dataset() -> RosterDataset {
    let mut dataset = RosterDataset::default();
    dataset.year = 1995;

    for (index, &team) in STOCK_TEAM_ORDER.codes().iter().enumerate() {
        let league = if index < STOCK_TEAM_ORDER.boundary() {
            League::American
        } else {
            League::National
        };
        for slot in 1..=TEAM_SLOTS {
            let id = format!("{team}{slot:02}");
            dataset.players.push(PlayerProfile {
                player_id: id.clone(),
                first_name: Some("Ken".to_string()),
                last_name: Some("Griffey".to_string()),
                jersey_number: Some(slot as i64),
                handedness_batting: Some("L".to_string()),
                handedness_throwing: Some("L".to_string()),
                batting_appearance: BattingAppearance {
                    skin: Some(1),
                    head: Some(2),
                    hair_color: Some(3),
                    body: Some(4),
                    legs_size: Some(5),
                    legs_stance: Some(6),
                    arms_stance: Some(7),
                },
                pitching_appearance: PitchingAppearance {
                    skin: Some(8),
                    head: Some(9),
                    hair_color: Some(10),
                    body: Some(11),
                    throwing_style: Some(3),
                },
            });
            dataset.ratings.push(Ratings {
                player_id: id.clone(),
                batting: BattingRatings {
                    contact: Some(8),
                    power: Some(7),
                    speed: Some(6),
                    fielding: Some(5),
                },
                pitching: PitchingRatings {
                    speed: Some(4),
                    control: Some(3),
                    fatigue: Some(2),
                },
            });
            dataset.stats.push(SeasonStats {
                player_id: id.clone(),
                avg: Some(0.297),
                hr: Some(40),
                rbi: Some(109),
                wins: Some(15),
                losses: Some(7),
                saves: Some(2),
                era: Some(3.45),
            });
            dataset.lineups.push(LineupEntry {
                player_id: id,
                team: team.to_string(),
                team_name: None,
                league,
                roster_position: slot as i64,
                position: Some(position_for(league, slot).to_string()),
            });
        }
    }

    // Deliberately out of order.
    for (id, league, roster_position) in [
        ("SEA07", League::American, 2),
        ("ATL04", League::National, 1),
        ("NYY08", League::American, 3),
        ("SF08", League::National, 3),
        ("CLE05", League::American, 1),
        ("LAD07", League::National, 2),
    ] {
        dataset.special_roster.push(SpecialRosterEntry {
            player_id: id.to_string(),
            league,
            roster_position,
        });
    }

    dataset.indexed()
}
