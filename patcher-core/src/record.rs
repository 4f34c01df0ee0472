use crate::bits::{merge_pair, set_full_byte, set_high_nibble, set_low_nibble};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::layout::PLAYER_LENGTH;
use crate::numeric::{scale_decimal, split_hex_digits, AVERAGE_SCALE, ERA_SCALE, MAX_THREE_DIGITS};
use crate::roster::{
    batting_hand_code, throwing_hand_code, FieldPosition, PlayerProfile, Ratings, RosterProvider,
    SeasonStats,
};
use crate::text::{encode_name, NAME_LEN};

const NAME: usize = 0x00;
const POSITION: usize = 0x09;
const JERSEY: usize = 0x0A;
const RATINGS_A: usize = 0x0B;
const RATINGS_B: usize = 0x0C;
const BAT_HAND: usize = 0x0D;
const BAT_SKIN_HEAD: usize = 0x0E;
const BAT_HAIR_BODY: usize = 0x0F;
const BAT_LEGS: usize = 0x10;
const BAT_ARMS: usize = 0x11;
const PIT_HAND_SKIN: usize = 0x15;
const PIT_HEAD_HAIR: usize = 0x16;
const PIT_BODY_STYLE: usize = 0x17;
/// AVG low byte for batters, wins for pitchers.
const STAT_A: usize = 0x18;
/// Role marker A (high) / AVG hundreds (low).
const ROLE_A: usize = 0x19;
/// Home runs for batters, losses for pitchers.
const STAT_B: usize = 0x1A;
const RESERVED: usize = 0x1B;
/// RBI for batters, ERA low byte for pitchers.
const STAT_C: usize = 0x1C;
/// Role marker B (high) / ERA hundreds (low).
const ROLE_B: usize = 0x1D;
const SAVES: usize = 0x1E;

/// Batters fill the first 15 slots of a team table.
pub const BATTER_SLOTS: usize = 15;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PlayerRecord([u8; PLAYER_LENGTH]);

impl PlayerRecord {
    pub fn zeroed() -> Self {
        PlayerRecord([0; PLAYER_LENGTH])
    }

    pub fn from_bytes(bytes: [u8; PLAYER_LENGTH]) -> Self {
        PlayerRecord(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PLAYER_LENGTH] {
        &self.0
    }

    fn set_byte(&mut self, offset: usize, value: i64) {
        self.0[offset] = set_full_byte(self.0[offset], value);
    }

    fn set_high(&mut self, offset: usize, value: i64) {
        self.0[offset] = set_high_nibble(self.0[offset], value);
    }

    fn set_low(&mut self, offset: usize, value: i64) {
        self.0[offset] = set_low_nibble(self.0[offset], value);
    }

    fn merge(&mut self, offset: usize, high: Option<i64>, low: Option<i64>) {
        self.0[offset] = merge_pair(self.0[offset], high, low);
    }

    fn set_name(&mut self, name: [u8; NAME_LEN]) {
        self.0[NAME..NAME + NAME_LEN].copy_from_slice(&name);
    }
}

/// Which field rules apply to a record.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Batter,
    Pitcher,
}

impl Role {
    /// Role of the `slot_index`th (0-based) slot of a team table.
    pub fn for_slot(slot_index: usize) -> Self {
        if slot_index < BATTER_SLOTS {
            Role::Batter
        } else {
            Role::Pitcher
        }
    }
}

/// Roster-position band; selects the role marker nibbles.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RosterBand {
    Batter,
    StartingPitcher,
    ReliefPitcher,
}

impl RosterBand {
    pub fn from_roster_position(position: i64) -> Option<Self> {
        match position {
            1..=15 => Some(RosterBand::Batter),
            16..=20 => Some(RosterBand::StartingPitcher),
            21..=25 => Some(RosterBand::ReliefPitcher),
            _ => None,
        }
    }

    fn marker_a(self) -> i64 {
        match self {
            RosterBand::Batter => 0x3,
            RosterBand::StartingPitcher => 0x1,
            RosterBand::ReliefPitcher => 0x0,
        }
    }

    fn marker_b(self) -> i64 {
        match self {
            RosterBand::Batter => 0x1,
            RosterBand::StartingPitcher | RosterBand::ReliefPitcher => 0x2,
        }
    }
}

/// Provider rows for one player, looked up once per slot.
#[derive(Clone, Copy, Debug)]
pub struct PlayerData<'a> {
    pub player_id: &'a str,
    pub position: Option<&'a str>,
    pub profile: Option<&'a PlayerProfile>,
    pub ratings: Option<&'a Ratings>,
    pub stats: Option<&'a SeasonStats>,
}

impl<'a> PlayerData<'a> {
    pub fn gather<P>(provider: &'a P, player_id: &'a str, position: Option<&'a str>) -> Self
    where
        P: RosterProvider + ?Sized,
    {
        PlayerData {
            player_id,
            position,
            profile: provider.player(player_id),
            ratings: provider.ratings(player_id),
            stats: provider.stats(player_id),
        }
    }
}

struct FieldWriter<'a, 'd> {
    record: PlayerRecord,
    player_id: &'a str,
    diags: &'d mut Diagnostics,
}

impl FieldWriter<'_, '_> {
    /// Pass a value through, warning when it is missing.
    fn optional<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.diags.warn(
                DiagnosticKind::MissingOptionalField,
                self.player_id,
                field,
                "is missing, skipping",
            );
        }
        value
    }

    /// Unwrap a value, warning and substituting `default` when missing.
    fn or_default<T: Copy + std::fmt::Display>(
        &mut self,
        field: &'static str,
        value: Option<T>,
        default: T,
    ) -> T {
        match value {
            Some(v) => v,
            None => {
                self.diags.warn(
                    DiagnosticKind::MissingOptionalField,
                    self.player_id,
                    field,
                    format!("is missing, setting to {default}"),
                );
                default
            }
        }
    }

    fn rating_pair(&mut self, offset: usize, high: (&'static str, Option<i64>), low: (&'static str, Option<i64>)) {
        let h = self.or_default(high.0, high.1, 1);
        let l = self.or_default(low.0, low.1, 1);
        self.record.set_high(offset, h.wrapping_sub(1));
        self.record.set_low(offset, l.wrapping_sub(1));
    }

    /// Scaled decimal into a low byte and the low nibble of `nibble_offset`.
    fn scaled_decimal(&mut self, field: &'static str, value: f64, scale: u32, byte_offset: usize, nibble_offset: usize) {
        let scaled = scale_decimal(value, scale);
        if scaled > MAX_THREE_DIGITS {
            self.diags.warn(
                DiagnosticKind::ValueOverflow,
                self.player_id,
                field,
                format!("{value} does not fit in three hex digits, hundreds digit dropped"),
            );
        }
        let (low_byte, high_nibble) = split_hex_digits(scaled);
        self.record.set_byte(byte_offset, i64::from(low_byte));
        self.record.set_low(nibble_offset, i64::from(high_nibble));
    }

    fn name(&mut self, profile: &PlayerProfile) {
        let first = self.blank_if_missing("first_name", profile.first_name.as_deref());
        let last = self.blank_if_missing("last_name", profile.last_name.as_deref());
        self.record.set_name(encode_name(first, last));
    }

    fn blank_if_missing<'s>(&mut self, field: &'static str, value: Option<&'s str>) -> &'s str {
        if value.is_none() {
            self.diags.warn(
                DiagnosticKind::MissingOptionalField,
                self.player_id,
                field,
                "is missing, encoding as blank",
            );
        }
        value.unwrap_or("")
    }

    fn common(&mut self, profile: &PlayerProfile, position: Option<&str>, roster_position: i64) {
        if let Some(code) = self.optional("position", position) {
            match FieldPosition::parse(code) {
                Some(pos) => self.record.set_byte(POSITION, i64::from(pos.code())),
                None => self.diags.warn(
                    DiagnosticKind::UnrecognizedEnumValue,
                    self.player_id,
                    "position",
                    format!("unknown position '{code}', skipping"),
                ),
            }
        }

        let jersey = self.or_default("jersey_number", profile.jersey_number, 0);
        self.record.set_byte(JERSEY, jersey);

        let hand = self.or_default("handedness_batting", profile.handedness_batting.as_deref(), "R");
        match batting_hand_code(hand) {
            Some(code) => self.record.set_byte(BAT_HAND, i64::from(code)),
            None => self.diags.warn(
                DiagnosticKind::UnrecognizedEnumValue,
                self.player_id,
                "handedness_batting",
                format!("unknown batting handedness '{hand}', skipping"),
            ),
        }

        let look = &profile.batting_appearance;
        let skin = self.optional("appearance_bat_skin", look.skin);
        let head = self.optional("appearance_bat_head", look.head);
        self.record.merge(BAT_SKIN_HEAD, skin, head);
        let hair = self.optional("appearance_bat_hair_color", look.hair_color);
        let body = self.optional("appearance_bat_body", look.body);
        self.record.merge(BAT_HAIR_BODY, hair, body);
        let legs_size = self.optional("appearance_bat_legs_size", look.legs_size);
        let legs_stance = self.optional("appearance_bat_legs_stance", look.legs_stance);
        self.record.merge(BAT_LEGS, legs_size, legs_stance);
        let arms = self.or_default("appearance_bat_arms_stance", look.arms_stance, 0);
        self.record.set_low(BAT_ARMS, arms);

        match RosterBand::from_roster_position(roster_position) {
            Some(band) => {
                self.record.set_high(ROLE_A, band.marker_a());
                self.record.set_high(ROLE_B, band.marker_b());
            }
            None => self.diags.error(
                DiagnosticKind::RosterPositionOutOfRange,
                self.player_id,
                "roster_position",
                format!("roster position {roster_position} is not between 1 and 25, role markers left unchanged"),
            ),
        }

        self.record.set_byte(RESERVED, 0x00);
    }

    fn batter(&mut self, ratings: Option<&Ratings>, stats: &SeasonStats) {
        let r = ratings.map(|r| r.batting.clone()).unwrap_or_default();
        self.rating_pair(RATINGS_A, ("rating_bat_bat", r.contact), ("rating_bat_pow", r.power));
        self.rating_pair(RATINGS_B, ("rating_bat_spd", r.speed), ("rating_bat_def", r.fielding));

        // Batters have no pitching appearance.
        self.record.set_byte(PIT_HAND_SKIN, 0x00);
        self.record.set_byte(PIT_HEAD_HAIR, 0x00);
        self.record.set_byte(PIT_BODY_STYLE, 0x00);

        let avg = self.or_default("avg", stats.avg, 0.0);
        self.scaled_decimal("avg", avg, AVERAGE_SCALE, STAT_A, ROLE_A);

        let hr = self.or_default("hr", stats.hr, 0);
        self.record.set_byte(STAT_B, hr);
        let rbi = self.or_default("rbi", stats.rbi, 0);
        self.record.set_byte(STAT_C, rbi);

        self.record.set_byte(ROLE_B, 0x10);
    }

    fn pitcher(&mut self, profile: &PlayerProfile, ratings: Option<&Ratings>, stats: &SeasonStats) {
        let r = ratings.map(|r| r.pitching.clone()).unwrap_or_default();
        self.rating_pair(RATINGS_A, ("rating_pit_spd", r.speed), ("rating_pit_con", r.control));
        let fatigue = self.or_default("rating_pit_fat", r.fatigue, 1);
        self.record.set_byte(RATINGS_B, fatigue.wrapping_sub(1) & 0x0F);

        if let Some(hand) = self.optional("handedness_throwing", profile.handedness_throwing.as_deref()) {
            match throwing_hand_code(hand) {
                Some(code) => self.record.set_high(PIT_HAND_SKIN, i64::from(code)),
                None => self.diags.warn(
                    DiagnosticKind::UnrecognizedEnumValue,
                    self.player_id,
                    "handedness_throwing",
                    format!("unknown throwing handedness '{hand}', skipping"),
                ),
            }
        }

        let look = &profile.pitching_appearance;
        let skin = self.optional("appearance_pit_skin", look.skin);
        self.record.merge(PIT_HAND_SKIN, None, skin);
        let head = self.optional("appearance_pit_head", look.head);
        let hair = self.optional("appearance_pit_hair_color", look.hair_color);
        self.record.merge(PIT_HEAD_HAIR, head, hair);
        let body = self.optional("appearance_pit_body", look.body);
        self.record.merge(PIT_BODY_STYLE, body, None);
        let style = self.or_default("throwing_style", look.throwing_style, 0);
        self.record.set_low(PIT_BODY_STYLE, style);

        let wins = self.or_default("wins", stats.wins, 0);
        self.record.set_byte(STAT_A, wins);
        self.record.set_low(ROLE_A, 0x0);
        let losses = self.or_default("losses", stats.losses, 0);
        self.record.set_byte(STAT_B, losses);
        self.record.set_high(ROLE_B, 0x2);
        let saves = self.or_default("sv", stats.saves, 0);
        self.record.set_byte(SAVES, saves);

        let era = self.or_default("era", stats.era, 0.0);
        self.scaled_decimal("era", era, ERA_SCALE, STAT_C, ROLE_B);
    }
}

/// Build a record for one roster slot on top of `existing`.
///
/// Returns `None` when the player has no player or statistics row; the
/// caller must then leave the slot's bytes alone. Every other gap is
/// defaulted or skipped and reported through `diags`.
pub fn compose(
    existing: PlayerRecord,
    data: &PlayerData<'_>,
    roster_position: i64,
    role: Role,
    diags: &mut Diagnostics,
) -> Option<PlayerRecord> {
    let (profile, stats) = match (data.profile, data.stats) {
        (Some(profile), Some(stats)) => (profile, stats),
        _ => {
            let what = match role {
                Role::Batter => "batter",
                Role::Pitcher => "pitcher",
            };
            diags.warn(
                DiagnosticKind::MissingLinkedStats,
                data.player_id,
                "stats",
                format!("no {what} data, slot left unchanged"),
            );
            return None;
        }
    };

    let mut writer = FieldWriter {
        record: existing,
        player_id: data.player_id,
        diags,
    };
    writer.name(profile);
    writer.common(profile, data.position, roster_position);
    match role {
        Role::Batter => writer.batter(data.ratings, stats),
        Role::Pitcher => writer.pitcher(profile, data.ratings, stats),
    }
    Some(writer.record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{BattingAppearance, BattingRatings, PitchingAppearance, PitchingRatings};

    fn profile() -> PlayerProfile {
        PlayerProfile {
            player_id: "p1".to_string(),
            first_name: Some("Ken".to_string()),
            last_name: Some("Griffey".to_string()),
            jersey_number: Some(24),
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
        }
    }

    fn ratings() -> Ratings {
        Ratings {
            player_id: "p1".to_string(),
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
        }
    }

    fn stats() -> SeasonStats {
        SeasonStats {
            player_id: "p1".to_string(),
            avg: Some(0.297),
            hr: Some(40),
            rbi: Some(109),
            wins: Some(15),
            losses: Some(7),
            saves: Some(2),
            era: Some(3.45),
        }
    }

    fn filled() -> PlayerRecord {
        PlayerRecord::from_bytes([0xEE; PLAYER_LENGTH])
    }

    fn data<'a>(
        profile: &'a PlayerProfile,
        ratings: &'a Ratings,
        stats: &'a SeasonStats,
        position: &'a str,
    ) -> PlayerData<'a> {
        PlayerData {
            player_id: "p1",
            position: Some(position),
            profile: Some(profile),
            ratings: Some(ratings),
            stats: Some(stats),
        }
    }

    #[test]
    fn composes_batter_over_existing_bytes() {
        let (p, r, s) = (profile(), ratings(), stats());
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "CF"), 3, Role::Batter, &mut diags).unwrap();
        let b = rec.as_bytes();

        assert_eq!(&b[0x00..0x09], &[0x15, 0x11, 0x1C, 0x13, 0x10, 0x10, 0x0F, 0x23, 0x00]);
        assert_eq!(b[0x09], 0x06);
        assert_eq!(b[0x0A], 24);
        assert_eq!(b[0x0B], 0x76);
        assert_eq!(b[0x0C], 0x54);
        assert_eq!(b[0x0D], 0x11);
        assert_eq!(b[0x0E], 0x12);
        assert_eq!(b[0x0F], 0x34);
        assert_eq!(b[0x10], 0x56);
        assert_eq!(b[0x11], 0xE7);
        assert_eq!(&b[0x12..0x15], &[0xEE; 3]);
        assert_eq!(&b[0x15..0x18], &[0x00; 3]);
        assert_eq!(b[0x18], 0x29);
        assert_eq!(b[0x19], 0x31);
        assert_eq!(b[0x1A], 40);
        assert_eq!(b[0x1B], 0x00);
        assert_eq!(b[0x1C], 109);
        assert_eq!(b[0x1D], 0x10);
        assert_eq!(&b[0x1E..], &[0xEE; 2]);
        assert!(diags.is_empty());
    }

    #[test]
    fn composes_pitcher_over_existing_bytes() {
        let (p, r, s) = (profile(), ratings(), stats());
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "P"), 17, Role::Pitcher, &mut diags).unwrap();
        let b = rec.as_bytes();

        assert_eq!(b[0x09], 0x00);
        assert_eq!(b[0x0B], 0x32);
        assert_eq!(b[0x0C], 0x01);
        assert_eq!(b[0x15], 0x18);
        assert_eq!(b[0x16], 0x9A);
        assert_eq!(b[0x17], 0xB3);
        assert_eq!(b[0x18], 15);
        assert_eq!(b[0x19], 0x10);
        assert_eq!(b[0x1A], 7);
        assert_eq!(b[0x1B], 0x00);
        assert_eq!(b[0x1C], 0x59);
        assert_eq!(b[0x1D], 0x21);
        assert_eq!(b[0x1E], 2);
        assert_eq!(b[0x1F], 0xEE);
        assert!(diags.is_empty());
    }

    #[test]
    fn reliever_role_marker() {
        let (p, r, s) = (profile(), ratings(), stats());
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "P"), 23, Role::Pitcher, &mut diags).unwrap();
        assert_eq!(rec.as_bytes()[0x19], 0x00);
        assert_eq!(rec.as_bytes()[0x1D] >> 4, 0x2);
    }

    #[test]
    fn missing_batting_stats_default_to_zero_with_warnings() {
        let (p, r) = (profile(), ratings());
        let s = SeasonStats {
            player_id: "p1".to_string(),
            ..SeasonStats::default()
        };
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "1B"), 5, Role::Batter, &mut diags).unwrap();
        let b = rec.as_bytes();

        assert_eq!(b[0x18], 0x00);
        assert_eq!(b[0x19] & 0x0F, 0x00);
        assert_eq!(b[0x1A], 0);
        assert_eq!(b[0x1C], 0);
        let fields: Vec<_> = diags.entries().iter().map(|d| d.field).collect();
        assert_eq!(fields, vec!["avg", "hr", "rbi"]);
        assert_eq!(diags.count(DiagnosticKind::MissingOptionalField), 3);
    }

    #[test]
    fn missing_linked_stats_skips_slot() {
        let (p, r, s) = (profile(), ratings(), stats());
        let mut d = data(&p, &r, &s, "C");
        d.stats = None;
        let mut diags = Diagnostics::new();
        assert!(compose(filled(), &d, 1, Role::Batter, &mut diags).is_none());
        assert_eq!(diags.count(DiagnosticKind::MissingLinkedStats), 1);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn missing_appearance_keeps_individual_nibbles() {
        let (mut p, r, s) = (profile(), ratings(), stats());
        p.batting_appearance.skin = None;
        p.batting_appearance.body = None;
        p.batting_appearance.arms_stance = None;
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "C"), 1, Role::Batter, &mut diags).unwrap();
        let b = rec.as_bytes();

        assert_eq!(b[0x0E], 0xE2);
        assert_eq!(b[0x0F], 0x3E);
        assert_eq!(b[0x11], 0xE0);
        assert_eq!(diags.count(DiagnosticKind::MissingOptionalField), 3);
    }

    #[test]
    fn unknown_codes_are_skipped() {
        let (mut p, r, s) = (profile(), ratings(), stats());
        p.handedness_batting = Some("S".to_string());
        p.handedness_throwing = Some("X".to_string());
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "UT"), 18, Role::Pitcher, &mut diags).unwrap();
        let b = rec.as_bytes();

        assert_eq!(b[0x09], 0xEE);
        assert_eq!(b[0x0D], 0xEE);
        assert_eq!(b[0x15], 0xE8);
        assert_eq!(diags.count(DiagnosticKind::UnrecognizedEnumValue), 3);
    }

    #[test]
    fn missing_throwing_hand_keeps_high_nibble() {
        let (mut p, r, s) = (profile(), ratings(), stats());
        p.handedness_throwing = None;
        p.pitching_appearance.skin = None;
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "P"), 16, Role::Pitcher, &mut diags).unwrap();
        assert_eq!(rec.as_bytes()[0x15], 0xEE);
        assert_eq!(diags.count(DiagnosticKind::MissingOptionalField), 2);
    }

    #[test]
    fn missing_batting_hand_defaults_to_right() {
        let (mut p, r, s) = (profile(), ratings(), stats());
        p.handedness_batting = None;
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "C"), 1, Role::Batter, &mut diags).unwrap();
        assert_eq!(rec.as_bytes()[0x0D], 0x00);
        assert_eq!(diags.entries()[0].field, "handedness_batting");
    }

    #[test]
    fn missing_ratings_row_defaults_to_lowest_rating() {
        let (p, s) = (profile(), stats());
        let d = PlayerData {
            player_id: "p1",
            position: Some("C"),
            profile: Some(&p),
            ratings: None,
            stats: Some(&s),
        };
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &d, 1, Role::Batter, &mut diags).unwrap();
        assert_eq!(rec.as_bytes()[0x0B], 0x00);
        assert_eq!(rec.as_bytes()[0x0C], 0x00);
        assert_eq!(diags.count(DiagnosticKind::MissingOptionalField), 4);
    }

    #[test]
    fn extreme_ratings_are_truncated_not_fatal() {
        let (p, mut r, s) = (profile(), ratings(), stats());
        r.batting.contact = Some(i64::MIN);
        r.batting.power = Some(0);
        r.pitching.fatigue = Some(i64::MIN);
        let mut diags = Diagnostics::new();

        let rec = compose(PlayerRecord::zeroed(), &data(&p, &r, &s, "C"), 1, Role::Batter, &mut diags)
            .unwrap();
        // MIN - 1 wraps to MAX (low nibble 0xF); 0 - 1 is -1 (0xF).
        assert_eq!(rec.as_bytes()[0x0B], 0xFF);

        let rec = compose(PlayerRecord::zeroed(), &data(&p, &r, &s, "P"), 16, Role::Pitcher, &mut diags)
            .unwrap();
        assert_eq!(rec.as_bytes()[0x0C], 0x0F);
        assert!(diags.is_empty());
    }

    #[test]
    fn out_of_range_roster_position_keeps_markers() {
        let (p, r, s) = (profile(), ratings(), stats());
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "P"), 30, Role::Pitcher, &mut diags).unwrap();
        let b = rec.as_bytes();

        // Marker A untouched; pitcher rules still force marker B and clear the low nibble.
        assert_eq!(b[0x19], 0xE0);
        assert_eq!(b[0x1D], 0x21);
        assert_eq!(diags.errors(), 1);
        assert_eq!(diags.count(DiagnosticKind::RosterPositionOutOfRange), 1);
    }

    #[test]
    fn era_overflow_is_reported() {
        let (p, r, mut s) = (profile(), ratings(), stats());
        s.era = Some(45.0);
        let mut diags = Diagnostics::new();
        let rec = compose(filled(), &data(&p, &r, &s, "P"), 21, Role::Pitcher, &mut diags).unwrap();
        assert_eq!(rec.as_bytes()[0x1C], 0x94);
        assert_eq!(rec.as_bytes()[0x1D], 0x20);
        assert_eq!(diags.count(DiagnosticKind::ValueOverflow), 1);
    }

    #[test]
    fn zeroed_scratch_record_for_derby_batter() {
        let (p, r, s) = (profile(), ratings(), stats());
        let mut diags = Diagnostics::new();
        let rec = compose(PlayerRecord::zeroed(), &data(&p, &r, &s, "CF"), 1, Role::Batter, &mut diags)
            .unwrap();
        let b = rec.as_bytes();
        assert_eq!(b[0x11], 0x07);
        assert_eq!(&b[0x12..0x15], &[0x00; 3]);
        assert_eq!(&b[0x1E..], &[0x00; 2]);
    }

    #[test]
    fn slot_roles_and_bands() {
        assert_eq!(Role::for_slot(0), Role::Batter);
        assert_eq!(Role::for_slot(14), Role::Batter);
        assert_eq!(Role::for_slot(15), Role::Pitcher);
        assert_eq!(RosterBand::from_roster_position(15), Some(RosterBand::Batter));
        assert_eq!(RosterBand::from_roster_position(20), Some(RosterBand::StartingPitcher));
        assert_eq!(RosterBand::from_roster_position(21), Some(RosterBand::ReliefPitcher));
        assert_eq!(RosterBand::from_roster_position(0), None);
        assert_eq!(RosterBand::from_roster_position(26), None);
    }
}
