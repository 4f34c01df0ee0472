use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::roster::{
    LineupEntry, PlayerProfile, Ratings, RosterProvider, SeasonStats, SpecialRosterEntry,
};
use crate::{PatcherError, Result};

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

#[derive(Debug, Clone, Default)]
struct DatasetIndex {
    players: HashMap<String, usize>,
    ratings: HashMap<String, usize>,
    stats: HashMap<String, usize>,
    lineups: HashMap<String, usize>,
}

/// Everything needed to patch one season.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterDataset {
    pub year: u16,
    #[serde(default)]
    pub players: Vec<PlayerProfile>,
    #[serde(default)]
    pub ratings: Vec<Ratings>,
    #[serde(default)]
    pub stats: Vec<SeasonStats>,
    #[serde(default)]
    pub lineups: Vec<LineupEntry>,
    #[serde(default)]
    pub special_roster: Vec<SpecialRosterEntry>,
    #[serde(skip)]
    index: DatasetIndex,
}

fn first_index<'a, I>(ids: I) -> HashMap<String, usize>
where
    I: Iterator<Item = &'a str>,
{
    let mut map = HashMap::new();
    for (i, id) in ids.enumerate() {
        map.entry(id.to_string()).or_insert(i);
    }
    map
}

impl RosterDataset {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PatcherError::Config(format!(
                "Roster dataset does not exist: {}",
                path.display()
            )));
        }
        let raw = fs::read(path)?;
        let dataset = Self::from_bytes(&raw)?;
        log::info!(
            "loaded {} season: {} players, {} lineup rows, {} derby entrants",
            dataset.year,
            dataset.players.len(),
            dataset.lineups.len(),
            dataset.special_roster.len()
        );
        Ok(dataset)
    }

    /// Parse plain or gzip-compressed JSON.
    pub fn from_bytes(raw: &[u8]) -> Result<Self> {
        let dataset: RosterDataset = if raw.starts_with(&GZIP_MAGIC) {
            let mut json = Vec::new();
            GzDecoder::new(raw).read_to_end(&mut json)?;
            serde_json::from_slice(&json)?
        } else {
            serde_json::from_slice(raw)?
        };
        Ok(dataset.indexed())
    }

    /// Rebuild the id lookups. Needed after editing the public vectors.
    pub fn indexed(mut self) -> Self {
        self.reindex();
        self
    }

    pub fn reindex(&mut self) {
        self.index = DatasetIndex {
            players: first_index(self.players.iter().map(|p| p.player_id.as_str())),
            ratings: first_index(self.ratings.iter().map(|r| r.player_id.as_str())),
            stats: first_index(self.stats.iter().map(|s| s.player_id.as_str())),
            lineups: first_index(self.lineups.iter().map(|l| l.player_id.as_str())),
        };
    }
}

impl RosterProvider for RosterDataset {
    fn lineup_count(&self) -> usize {
        self.lineups.len()
    }

    fn team_lineup(&self, team: &str) -> Vec<&LineupEntry> {
        self.lineups.iter().filter(|l| l.team == team).collect()
    }

    fn lineup_entry(&self, player_id: &str) -> Option<&LineupEntry> {
        self.index.lineups.get(player_id).map(|&i| &self.lineups[i])
    }

    fn player(&self, player_id: &str) -> Option<&PlayerProfile> {
        self.index.players.get(player_id).map(|&i| &self.players[i])
    }

    fn ratings(&self, player_id: &str) -> Option<&Ratings> {
        self.index.ratings.get(player_id).map(|&i| &self.ratings[i])
    }

    fn stats(&self, player_id: &str) -> Option<&SeasonStats> {
        self.index.stats.get(player_id).map(|&i| &self.stats[i])
    }

    fn special_roster(&self) -> Vec<&SpecialRosterEntry> {
        self.special_roster.iter().collect()
    }
}
