use std::fs;
use std::path::Path;

use crate::layout::PLAYER_LENGTH;
use crate::record::PlayerRecord;
use crate::{PatcherError, Result};

/// In-memory cartridge image. Read once, patched in place, written once.
#[derive(Clone, Debug)]
pub struct Rom {
    data: Vec<u8>,
}

impl Rom {
    pub fn new(data: Vec<u8>) -> Self {
        Rom { data }
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(PatcherError::Config(format!(
                "ROM file does not exist: {}",
                path.display()
            )));
        }
        let data = fs::read(path)?;
        log::info!("read {} bytes from {}", data.len(), path.display());
        Ok(Rom::new(data))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.data)?;
        log::info!("wrote {} bytes to {}", self.data.len(), path.display());
        Ok(())
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    fn record_range(&self, offset: usize) -> Result<std::ops::Range<usize>> {
        let end = offset + PLAYER_LENGTH;
        if end > self.data.len() {
            return Err(PatcherError::LayoutOutOfBounds {
                region: format!("player record at 0x{offset:06X}"),
                end,
                len: self.data.len(),
            });
        }
        Ok(offset..end)
    }

    pub fn record(&self, offset: usize) -> Result<PlayerRecord> {
        let range = self.record_range(offset)?;
        let mut bytes = [0u8; PLAYER_LENGTH];
        bytes.copy_from_slice(&self.data[range]);
        Ok(PlayerRecord::from_bytes(bytes))
    }

    pub fn write_record(&mut self, offset: usize, record: &PlayerRecord) -> Result<()> {
        let range = self.record_range(offset)?;
        self.data[range].copy_from_slice(record.as_bytes());
        Ok(())
    }
}
