//! THE PLUG Trading Journal.
//!
//! A personal trading journal: plan trades, track them live, review them
//! closed, and read aggregate performance statistics back out. The UI is an
//! external collaborator; this crate owns the trade collection, its JSON blob
//! persistence, and the analytics derived from it.

pub mod analytics;
pub mod error;
pub mod journal;
pub mod models;
pub mod store;

pub use analytics::{
    GroupPerformance, TradeStats, compute_stats, format_currency, format_profit_factor,
    format_win_rate, risk_reward_ratio,
};
pub use error::JournalError;
pub use journal::Journal;
pub use models::{Direction, ExitReason, Market, MarketContext, Trade, TradeStatus};
pub use store::TradeStore;
