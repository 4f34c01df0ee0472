use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum League {
    #[serde(rename = "AL")]
    American,
    #[serde(rename = "NL")]
    National,
}

impl League {
    /// Positions the top of a lineup must cover exactly once.
    pub fn mandatory_positions(self) -> &'static [FieldPosition] {
        const AL: &[FieldPosition] = &[
            FieldPosition::Catcher,
            FieldPosition::FirstBase,
            FieldPosition::SecondBase,
            FieldPosition::ThirdBase,
            FieldPosition::Shortstop,
            FieldPosition::LeftField,
            FieldPosition::CenterField,
            FieldPosition::RightField,
            FieldPosition::DesignatedHitter,
        ];
        match self {
            League::American => AL,
            League::National => &AL[..8],
        }
    }

    pub fn lineup_size(self) -> usize {
        self.mandatory_positions().len()
    }

    pub fn code(self) -> &'static str {
        match self {
            League::American => "AL",
            League::National => "NL",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FieldPosition {
    Pitcher,
    Catcher,
    LeftField,
    CenterField,
    RightField,
    ThirdBase,
    Shortstop,
    SecondBase,
    FirstBase,
    DesignatedHitter,
    Infield,
    Outfield,
}

impl FieldPosition {
    pub fn parse(code: &str) -> Option<Self> {
        Some(match code {
            "P" => FieldPosition::Pitcher,
            "C" => FieldPosition::Catcher,
            "LF" => FieldPosition::LeftField,
            "CF" => FieldPosition::CenterField,
            "RF" => FieldPosition::RightField,
            "3B" => FieldPosition::ThirdBase,
            "SS" => FieldPosition::Shortstop,
            "2B" => FieldPosition::SecondBase,
            "1B" => FieldPosition::FirstBase,
            "DH" => FieldPosition::DesignatedHitter,
            "IF" => FieldPosition::Infield,
            "OF" => FieldPosition::Outfield,
            _ => return None,
        })
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldPosition::Pitcher => "P",
            FieldPosition::Catcher => "C",
            FieldPosition::LeftField => "LF",
            FieldPosition::CenterField => "CF",
            FieldPosition::RightField => "RF",
            FieldPosition::ThirdBase => "3B",
            FieldPosition::Shortstop => "SS",
            FieldPosition::SecondBase => "2B",
            FieldPosition::FirstBase => "1B",
            FieldPosition::DesignatedHitter => "DH",
            FieldPosition::Infield => "IF",
            FieldPosition::Outfield => "OF",
        }
    }

    /// Byte stored at record offset 0x09.
    pub fn code(self) -> u8 {
        match self {
            FieldPosition::Pitcher => 0x00,
            FieldPosition::Catcher => 0x02,
            FieldPosition::LeftField => 0x04,
            FieldPosition::CenterField => 0x06,
            FieldPosition::RightField => 0x08,
            FieldPosition::ThirdBase => 0x0A,
            FieldPosition::Shortstop => 0x0C,
            FieldPosition::SecondBase => 0x0E,
            FieldPosition::FirstBase => 0x10,
            FieldPosition::DesignatedHitter => 0x12,
            FieldPosition::Infield => 0x14,
            FieldPosition::Outfield => 0x16,
        }
    }
}

/// Byte stored at record offset 0x0D.
pub fn batting_hand_code(hand: &str) -> Option<u8> {
    match hand {
        "R" => Some(0x00),
        "L" => Some(0x11),
        "B" => Some(0x20),
        _ => None,
    }
}

/// One-bit code stored in the high nibble of offset 0x15.
pub fn throwing_hand_code(hand: &str) -> Option<u8> {
    match hand {
        "R" => Some(0),
        "L" => Some(1),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingAppearance {
    pub skin: Option<i64>,
    pub head: Option<i64>,
    pub hair_color: Option<i64>,
    pub body: Option<i64>,
    pub legs_size: Option<i64>,
    pub legs_stance: Option<i64>,
    pub arms_stance: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchingAppearance {
    pub skin: Option<i64>,
    pub head: Option<i64>,
    pub hair_color: Option<i64>,
    pub body: Option<i64>,
    pub throwing_style: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub jersey_number: Option<i64>,
    pub handedness_batting: Option<String>,
    pub handedness_throwing: Option<String>,
    #[serde(default)]
    pub batting_appearance: BattingAppearance,
    #[serde(default)]
    pub pitching_appearance: PitchingAppearance,
}

/// 1-based ratings as published; the record stores them 0-based.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingRatings {
    pub contact: Option<i64>,
    pub power: Option<i64>,
    pub speed: Option<i64>,
    pub fielding: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PitchingRatings {
    pub speed: Option<i64>,
    pub control: Option<i64>,
    pub fatigue: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ratings {
    pub player_id: String,
    #[serde(default)]
    pub batting: BattingRatings,
    #[serde(default)]
    pub pitching: PitchingRatings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub player_id: String,
    pub avg: Option<f64>,
    pub hr: Option<i64>,
    pub rbi: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub saves: Option<i64>,
    pub era: Option<f64>,
}

/// One row of a team lineup. `team` is the stock team code whose table the
/// player lands in; `team_name` is the real club for the season, if known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupEntry {
    pub player_id: String,
    pub team: String,
    #[serde(default)]
    pub team_name: Option<String>,
    pub league: League,
    pub roster_position: i64,
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialRosterEntry {
    pub player_id: String,
    pub league: League,
    pub roster_position: i64,
}

/// Read-only access to roster and statistics data.
pub trait RosterProvider {
    /// Total number of lineup rows across every team.
    fn lineup_count(&self) -> usize;

    /// Lineup rows for a stock team code, in no particular order.
    fn team_lineup(&self, team: &str) -> Vec<&LineupEntry>;

    /// First lineup row for a player, wherever it is.
    fn lineup_entry(&self, player_id: &str) -> Option<&LineupEntry>;

    fn player(&self, player_id: &str) -> Option<&PlayerProfile>;

    fn ratings(&self, player_id: &str) -> Option<&Ratings>;

    fn stats(&self, player_id: &str) -> Option<&SeasonStats>;

    /// Home run derby entrants, in no particular order.
    fn special_roster(&self) -> Vec<&SpecialRosterEntry>;
}
