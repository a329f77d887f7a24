use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Blockchain, Venue};

/// Singleton process-wide trading policy.
///
/// Read on page entry, mutated only in a local draft, and replaced wholesale
/// on save (PUT /config sends the full object, never a partial patch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub id: Option<String>,
    /// Minimum spread in percent for a signal to be actionable.
    pub min_spread: Decimal,
    /// Maximum spread in percent; wider spreads are treated as suspicious.
    pub max_spread: Decimal,
    /// Minimum pool liquidity in USD.
    pub min_liquidity: Decimal,
    /// Minimum 24h volume in USD.
    pub min_volume_24h: Decimal,
    /// Notional per trade in USD.
    pub trade_amount: Decimal,
    pub auto_trading: bool,
    pub active_blockchains: Vec<Blockchain>,
    pub active_exchanges: Vec<Venue>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BotConfig {
    /// Membership toggle over the active-blockchain set: present → remove,
    /// absent → add. Applying it twice restores the original membership.
    pub fn toggle_blockchain(&mut self, chain: Blockchain) {
        toggle(&mut self.active_blockchains, chain);
    }

    /// Membership toggle over the active-exchange set.
    pub fn toggle_exchange(&mut self, venue: Venue) {
        toggle(&mut self.active_exchanges, venue);
    }
}

fn toggle<T: Copy + PartialEq>(set: &mut Vec<T>, item: T) {
    if let Some(pos) = set.iter().position(|x| *x == item) {
        set.remove(pos);
    } else {
        set.push(item);
    }
}
