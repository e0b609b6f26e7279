use std::fs;
use std::path::{Path, PathBuf};

use crate::error::JournalError;
use crate::models::Trade;

/// Storage key for the journal blob; it lives at `<data dir>/plug_trades.json`.
pub const STORAGE_KEY: &str = "plug_trades";

/// Persists the whole trade collection as one JSON array.
///
/// There is no versioning and no migration: an absent or malformed blob
/// degrades to an empty collection (logged, never surfaced), and every save
/// rewrites the file in full.
pub struct TradeStore {
    path: PathBuf,
}

impl TradeStore {
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, JournalError> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;
        Ok(TradeStore {
            path: data_dir.join(format!("{}.json", STORAGE_KEY)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, degrading to empty on any failure.
    pub fn load(&self) -> Vec<Trade> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No journal blob at {:?}, starting empty", self.path);
                return Vec::new();
            }
            Err(err) => {
                log::warn!("Failed to read journal blob {:?}: {}", self.path, err);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(trades) => trades,
            Err(err) => {
                log::warn!(
                    "Malformed journal blob {:?} ({}), starting empty",
                    self.path,
                    err
                );
                Vec::new()
            }
        }
    }

    /// Rewrite the blob with the full collection. Writes go through a sibling
    /// temp file so a failed write never truncates the existing blob.
    pub fn save(&self, trades: &[Trade]) -> Result<(), JournalError> {
        let json = serde_json::to_string(trades)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
