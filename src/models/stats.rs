use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dashboard summary figures.
///
/// Usually fetched precomputed from GET /stats; [`crate::stats::compute_stats`]
/// derives the same figures client-side from a trade collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_signals: u64,
    pub total_trades: u64,
    pub open_trades: u64,
    pub total_profit: Decimal,
    pub today_profit: Decimal,
    /// Share of closed trades that were profitable, in percent.
    pub success_rate: Decimal,
}
