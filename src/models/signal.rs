use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Blockchain;

/// Lifecycle of a detected opportunity: `pending → notified → {executed, skipped}`.
///
/// Transitions are driven by the bot backend; the dashboard only renders the
/// current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Pending,
    Notified,
    Executed,
    Skipped,
}

impl SignalStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SignalStatus::Executed | SignalStatus::Skipped)
    }
}

/// An arbitrage opportunity detected by the monitoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Signal {
    pub id: Uuid,
    pub blockchain: Blockchain,
    pub token_address: String,
    #[serde(default)]
    pub token_symbol: Option<String>,
    /// pool_creation, large_swap, liquidity_add, ...
    pub event_type: String,
    pub price: Decimal,
    /// Pool liquidity in USD.
    pub liquidity: Decimal,
    /// 24h trading volume in USD.
    #[serde(default)]
    pub volume_24h: Option<Decimal>,
    /// Detected spread in percent, if already computed.
    #[serde(default)]
    pub spread: Option<Decimal>,
    pub timestamp: DateTime<Utc>,
    pub status: SignalStatus,
}
