use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Side, Venue};

/// Lifecycle of an order: `open → {closed, failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Open,
    Closed,
    Failed,
}

impl TradeStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TradeStatus::Closed | TradeStatus::Failed)
    }
}

/// An order placed in response to an executed [`Signal`](super::Signal).
///
/// Terminal trades are immutable from the dashboard's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: Uuid,
    /// The signal this trade was opened for.
    pub signal_id: Uuid,
    pub exchange: Venue,
    pub symbol: String,
    pub side: Side,
    pub entry_price: Decimal,
    /// Present only once the position has been closed.
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    /// Position size in USD.
    pub amount: Decimal,
    /// Realized PnL; signed, null while the trade is unresolved.
    #[serde(default)]
    pub profit: Option<Decimal>,
    /// Spread in percent at entry.
    pub spread: Decimal,
    pub status: TradeStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Trade {
    /// Checks the cross-field lifecycle invariants:
    /// closed trades carry an exit price, a profit and a close time;
    /// open trades carry none of them; closed_at is set exactly for
    /// terminal trades.
    pub fn lifecycle_consistent(&self) -> bool {
        let closed_at_ok = self.closed_at.is_some() == self.status.is_terminal();
        let fields_ok = match self.status {
            TradeStatus::Open => {
                self.exit_price.is_none() && self.profit.is_none() && self.closed_at.is_none()
            }
            TradeStatus::Closed => self.exit_price.is_some() && self.profit.is_some(),
            // A failed trade may or may not have partial fill data.
            TradeStatus::Failed => true,
        };
        closed_at_ok && fields_ok
    }

    pub fn is_profitable(&self) -> bool {
        self.profit.map(|p| p > Decimal::ZERO).unwrap_or(false)
    }
}
