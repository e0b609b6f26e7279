use std::path::Path;
use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;

use crate::analytics::{self, TradeStats, risk_reward_ratio};
use crate::error::JournalError;
use crate::models::Trade;
use crate::store::TradeStore;

static PLUG_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#PLUG-(\d+)$").unwrap()
});

/// The journal: the in-memory trade collection plus its backing store.
///
/// Loaded once at startup; every mutation runs to completion and rewrites the
/// blob in full. A storage failure is logged and swallowed, leaving the
/// in-memory state authoritative for the rest of the session.
pub struct Journal {
    store: TradeStore,
    trades: Vec<Trade>,
}

impl Journal {
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, JournalError> {
        let store = TradeStore::open(data_dir)?;
        let trades = store.load();
        log::info!("Journal opened with {} trades", trades.len());
        Ok(Journal { store, trades })
    }

    /// All trades, newest first.
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn get(&self, id: &str) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    /// Next sequential display id, `#PLUG-NNN`.
    ///
    /// Derived from the highest existing suffix rather than the collection
    /// length, so ids stay unique after deletions.
    pub fn next_plug_id(&self) -> String {
        let highest = self
            .trades
            .iter()
            .filter_map(|t| PLUG_ID.captures(&t.id))
            .filter_map(|caps| caps[1].parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("#PLUG-{:03}", highest + 1)
    }

    /// A blank Planned entry carrying the next id. Not stored until saved.
    pub fn new_trade(&self) -> Trade {
        Trade::new(self.next_plug_id())
    }

    /// Upsert by id: replace the stored record, or prepend a new one.
    ///
    /// The risk/reward ratio is rederived from entry, stop, first target and
    /// direction on every save, overwriting whatever the record carried.
    pub fn save_trade(&mut self, mut trade: Trade) -> &Trade {
        trade.risk_reward_ratio = risk_reward_ratio(
            &trade.entry_price,
            &trade.stop_loss_price,
            &trade.take_profit_targets,
            trade.direction,
        );

        let index = match self.trades.iter().position(|t| t.id == trade.id) {
            Some(index) => {
                self.trades[index] = trade;
                index
            }
            None => {
                self.trades.insert(0, trade);
                0
            }
        };

        self.persist();
        &self.trades[index]
    }

    /// Remove a trade. The caller must pass `confirmed = true`; there is no
    /// undo.
    pub fn delete_trade(&mut self, id: &str, confirmed: bool) -> Result<(), JournalError> {
        if !confirmed {
            return Err(JournalError::DeleteNotConfirmed);
        }
        let index = self
            .trades
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| JournalError::TradeNotFound(id.to_string()))?;
        self.trades.remove(index);
        self.persist();
        Ok(())
    }

    /// Embed an uploaded chart image on the record as a base64 data URL.
    pub fn attach_chart_screenshot(
        &mut self,
        id: &str,
        bytes: &[u8],
        mime: &str,
    ) -> Result<(), JournalError> {
        if !mime.starts_with("image/") {
            return Err(JournalError::UnsupportedImage(mime.to_string()));
        }
        let trade = self
            .trades
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| JournalError::TradeNotFound(id.to_string()))?;
        trade.chart_screenshot = Some(format!("data:{};base64,{}", mime, BASE64.encode(bytes)));
        self.persist();
        Ok(())
    }

    /// Performance statistics over the closed trades, or None when there is
    /// nothing to report yet.
    pub fn stats(&self) -> Option<TradeStats> {
        analytics::compute_stats(&self.trades)
    }

    /// The whole journal as a JSON string, for backup.
    pub fn export_json(&self) -> Result<String, JournalError> {
        Ok(serde_json::to_string_pretty(&self.trades)?)
    }

    /// Merge a backup into the journal: records replace existing ones by id,
    /// unknown ids are added at the front. Returns the number of records read.
    pub fn import_json(&mut self, json: &str) -> Result<usize, JournalError> {
        let incoming: Vec<Trade> = serde_json::from_str(json)?;
        let count = incoming.len();

        for trade in incoming {
            match self.trades.iter().position(|t| t.id == trade.id) {
                Some(index) => self.trades[index] = trade,
                None => self.trades.insert(0, trade),
            }
        }

        self.persist();
        log::info!("Imported {} trades", count);
        Ok(count)
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.trades) {
            log::error!("Failed to persist journal: {}", err);
        }
    }
}
