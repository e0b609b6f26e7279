use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Market {
    Forex,
    Crypto,
    Stocks,
    Indices,
}

impl Market {
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Forex => "Forex",
            Market::Crypto => "Crypto",
            Market::Stocks => "Stocks",
            Market::Indices => "Indices",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketContext {
    Bullish,
    Bearish,
    Ranging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitReason {
    #[serde(rename = "Hit TP")]
    TakeProfit,
    #[serde(rename = "Stopped Out")]
    StoppedOut,
    #[serde(rename = "Manual Close")]
    ManualClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeStatus {
    Planned,
    Live,
    Closed,
}

/// One journal entry across its full plan / execute / review lifecycle.
///
/// Price and P/L fields are kept as the raw strings the user typed; the
/// analytics layer parses them on demand and skips whatever does not parse.
/// The serialized form is the journal's established blob format: camelCase
/// keys, an empty string for an unset exit reason, `null` for unset plan
/// adherence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: String,
    pub date: String,
    pub status: TradeStatus,

    // A. PRE-PLUG
    pub instrument: String,
    pub market: Market,
    pub market_context: MarketContext,
    pub setup: String,
    pub rationale: String,
    pub direction: Direction,
    pub entry_price: String,
    pub stop_loss_price: String,
    pub take_profit_targets: String,
    pub risk_reward_ratio: String,
    pub risk_percent: String,

    // B. LIVE PLUG
    pub actual_entry_price: String,
    pub pnl: String,
    #[serde(with = "exit_reason_wire")]
    pub exit_reason: Option<ExitReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_screenshot: Option<String>,

    // C. POST-PLUG
    pub psychology: String,
    pub plan_adherence: Option<bool>,
    pub deviation_reason: String,
    pub what_went_right: String,
    pub what_went_wrong: String,
    pub key_takeaway: String,
}

impl Trade {
    /// A blank Planned entry with the given id, dated today (UTC).
    pub fn new(id: String) -> Self {
        Trade {
            id,
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            status: TradeStatus::Planned,
            instrument: String::new(),
            market: Market::Forex,
            market_context: MarketContext::Ranging,
            setup: String::new(),
            rationale: String::new(),
            direction: Direction::Long,
            entry_price: String::new(),
            stop_loss_price: String::new(),
            take_profit_targets: String::new(),
            risk_reward_ratio: String::new(),
            risk_percent: String::new(),
            actual_entry_price: String::new(),
            pnl: String::new(),
            exit_reason: None,
            chart_screenshot: None,
            psychology: String::new(),
            plan_adherence: None,
            deviation_reason: String::new(),
            what_went_right: String::new(),
            what_went_wrong: String::new(),
            key_takeaway: String::new(),
        }
    }
}

/// The blob format stores an unset exit reason as `""`, not `null`.
mod exit_reason_wire {
    use super::ExitReason;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<ExitReason>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(reason) => reason.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<ExitReason>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        ExitReason::deserialize(serde::de::value::StrDeserializer::new(raw.as_str())).map(Some)
    }
}
