use crate::{PatcherError, Result};

pub const PLAYER_LENGTH: usize = 0x20;
pub const TEAM_SLOTS: usize = 25;
pub const TEAM_LENGTH: usize = 0x320;
pub const AL_TO_NL_GAP: usize = 0xB40;

pub const FIRST_TEAM_MARKER: &[u8] = &[
    0x81, 0x81, 0x81, 0x81, 0x9F, 0x9F, 0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0xF0, 0xF0,
];
pub const HR_DERBY_MARKER: &[u8] = &[0x02, 0x2E, 0x37, 0x27, 0x00, 0x0A, 0x23, 0x3B, 0x35, 0xFF];
pub const HR_DERBY_BATTER_COUNT: usize = 6;

/// Byte sequences that sit directly in front of a table we patch.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Anchor {
    FirstTeam,
    HomeRunDerby,
}

impl Anchor {
    pub fn marker(self) -> &'static [u8] {
        match self {
            Anchor::FirstTeam => FIRST_TEAM_MARKER,
            Anchor::HomeRunDerby => HR_DERBY_MARKER,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::FirstTeam => "first team",
            Anchor::HomeRunDerby => "home run derby",
        }
    }
}

/// Order in which the cartridge stores its team tables.
///
/// Offsets are positional: the `n`th code owns the `n`th table, and the
/// first `boundary` entries sit before the AL/NL gap.
#[derive(Debug)]
pub struct TeamOrder {
    codes: &'static [&'static str],
    boundary: usize,
}

pub const STOCK_TEAM_ORDER: TeamOrder = TeamOrder {
    codes: &[
        "BAL", "BOS", "CAL", "CHW", "CLE", "DET", "KC", "MIL", "MIN", "NYY", "OAK", "SEA", "TEX",
        "TOR", // AL
        "ATL", "CHC", "CIN", "HOU", "LAD", "MON", "NYM", "PIT", "STL", "SD", "SF", "PHI", "COL",
        "FLA", // NL
    ],
    boundary: 14,
};

impl TeamOrder {
    pub const fn new(codes: &'static [&'static str], boundary: usize) -> Self {
        TeamOrder { codes, boundary }
    }

    pub fn codes(&self) -> &'static [&'static str] {
        self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn boundary(&self) -> usize {
        self.boundary
    }

    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.codes.iter().position(|c| *c == code)
    }

    pub fn expected_rows(&self) -> usize {
        self.codes.len() * TEAM_SLOTS
    }
}

/// Offset of the first byte after `anchor`'s marker.
pub fn locate(image: &[u8], anchor: Anchor) -> Result<usize> {
    let marker = anchor.marker();
    image
        .windows(marker.len())
        .position(|w| w == marker)
        .map(|idx| idx + marker.len())
        .ok_or(PatcherError::AnchorNotFound { anchor })
}

/// Start of team `index`'s table. Indices at or past `boundary` are shifted
/// by the one-time `gap`.
pub fn team_offset(index: usize, boundary: usize, base: usize, team_length: usize, gap: usize) -> usize {
    if index < boundary {
        base + index * team_length
    } else {
        base + boundary * team_length + gap + (index - boundary) * team_length
    }
}

/// Absolute table positions for one image.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct BinaryLayout {
    pub team_base: usize,
    pub special_base: usize,
    boundary: usize,
    team_count: usize,
}

impl BinaryLayout {
    /// Find both anchors and check that every table we will write fits.
    pub fn resolve(image: &[u8], order: &TeamOrder) -> Result<Self> {
        let layout = BinaryLayout {
            team_base: locate(image, Anchor::FirstTeam)?,
            special_base: locate(image, Anchor::HomeRunDerby)?,
            boundary: order.boundary(),
            team_count: order.len(),
        };

        if layout.team_count > 0 {
            let end = layout.team_offset(layout.team_count - 1) + TEAM_LENGTH;
            check_bounds("team tables", end, image.len())?;
        }
        let end = layout.special_offset(HR_DERBY_BATTER_COUNT - 1) + PLAYER_LENGTH;
        check_bounds("home run derby table", end, image.len())?;

        log::debug!(
            "team tables at 0x{:06X}, home run derby at 0x{:06X}",
            layout.team_base,
            layout.special_base
        );
        Ok(layout)
    }

    pub fn team_offset(&self, index: usize) -> usize {
        team_offset(index, self.boundary, self.team_base, TEAM_LENGTH, AL_TO_NL_GAP)
    }

    pub fn slot_offset(&self, team_index: usize, slot: usize) -> usize {
        self.team_offset(team_index) + slot * PLAYER_LENGTH
    }

    pub fn special_offset(&self, index: usize) -> usize {
        self.special_base + index * PLAYER_LENGTH
    }
}

fn check_bounds(region: &str, end: usize, len: usize) -> Result<()> {
    if end > len {
        return Err(PatcherError::LayoutOutOfBounds {
            region: region.to_string(),
            end,
            len,
        });
    }
    Ok(())
}
