use serde::Serialize;

use super::risk::parse_decimal;
use crate::models::{Trade, TradeStatus};

/// Accumulator for one setup or market bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPerformance {
    pub trade_count: u32,
    pub win_count: u32,
    pub total_pnl: f64,
}

/// Aggregate KPIs over the closed trades with a parseable P/L.
///
/// Breakdown lists keep first-seen key order, so the dashboard renders groups
/// in the order they were encountered rather than in map iteration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeStats {
    pub total_trades: u32,
    pub total_pnl: f64,
    pub win_rate: f64,
    pub profit_factor: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
    pub avg_win: f64,
    pub avg_loss: f64,
    pub setup_performance: Vec<(String, GroupPerformance)>,
    pub market_performance: Vec<(String, GroupPerformance)>,
}

fn accumulate(groups: &mut Vec<(String, GroupPerformance)>, key: &str, pnl: f64) {
    let index = match groups.iter().position(|(k, _)| k == key) {
        Some(index) => index,
        None => {
            groups.push((
                key.to_string(),
                GroupPerformance {
                    trade_count: 0,
                    win_count: 0,
                    total_pnl: 0.0,
                },
            ));
            groups.len() - 1
        }
    };
    let bucket = &mut groups[index].1;
    bucket.trade_count += 1;
    bucket.total_pnl += pnl;
    if pnl > 0.0 {
        bucket.win_count += 1;
    }
}

/// Reduce the full trade collection to dashboard statistics.
///
/// Only Closed trades whose `pnl` parses as a number participate; everything
/// else is excluded from every figure. Returns None when no such trade exists
/// so the caller can show its "no data" state. Pure function of its input.
pub fn compute_stats(trades: &[Trade]) -> Option<TradeStats> {
    let closed: Vec<(&Trade, f64)> = trades
        .iter()
        .filter(|t| t.status == TradeStatus::Closed)
        .filter_map(|t| parse_decimal(&t.pnl).map(|pnl| (t, pnl)))
        .collect();

    if closed.is_empty() {
        return None;
    }

    let mut total_pnl = 0.0;
    let mut gross_profit = 0.0;
    let mut gross_loss = 0.0;
    let mut win_count = 0u32;
    let mut loss_count = 0u32;
    let mut best_trade = f64::NEG_INFINITY;
    let mut worst_trade = f64::INFINITY;
    let mut setup_performance: Vec<(String, GroupPerformance)> = Vec::new();
    let mut market_performance: Vec<(String, GroupPerformance)> = Vec::new();

    for (trade, pnl) in &closed {
        let pnl = *pnl;
        total_pnl += pnl;
        best_trade = best_trade.max(pnl);
        worst_trade = worst_trade.min(pnl);
        if pnl > 0.0 {
            gross_profit += pnl;
            win_count += 1;
        } else if pnl < 0.0 {
            gross_loss += pnl.abs();
            loss_count += 1;
        }

        let setup = trade.setup.trim();
        let setup_key = if setup.is_empty() { "Uncategorized" } else { setup };
        accumulate(&mut setup_performance, setup_key, pnl);
        accumulate(&mut market_performance, trade.market.as_str(), pnl);
    }

    let total_trades = closed.len() as u32;
    let win_rate = (win_count as f64 / total_trades as f64) * 100.0;

    let profit_factor = if gross_loss > 0.0 {
        gross_profit / gross_loss
    } else if gross_profit > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };

    let avg_win = if win_count > 0 {
        gross_profit / win_count as f64
    } else {
        0.0
    };
    let avg_loss = if loss_count > 0 {
        gross_loss / loss_count as f64
    } else {
        0.0
    };

    Some(TradeStats {
        total_trades,
        total_pnl,
        win_rate,
        profit_factor,
        best_trade,
        worst_trade,
        avg_win,
        avg_loss,
        setup_performance,
        market_performance,
    })
}

/// `+$X.XX` for gains and break-even, `-$X.XX` for losses.
pub fn format_currency(value: f64) -> String {
    if value >= 0.0 {
        format!("+${:.2}", value)
    } else {
        format!("-${:.2}", value.abs())
    }
}

/// Two decimals, with `∞` standing in for the no-losers sentinel.
pub fn format_profit_factor(profit_factor: f64) -> String {
    if profit_factor.is_finite() {
        format!("{:.2}", profit_factor)
    } else {
        "∞".to_string()
    }
}

pub fn format_win_rate(win_rate: f64) -> String {
    format!("{:.1}%", win_rate)
}
