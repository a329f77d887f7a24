pub mod bot_config;
pub mod exchange;
pub mod signal;
pub mod stats;
pub mod trade;

pub use bot_config::BotConfig;
pub use exchange::{Exchange, NewExchange};
pub use signal::{Signal, SignalStatus};
pub use stats::DashboardStats;
pub use trade::{Trade, TradeStatus};

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Blockchain
// ---------------------------------------------------------------------------

/// Chains the monitoring engine watches for opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Blockchain {
    Eth,
    Bsc,
    Solana,
}

impl Blockchain {
    pub const ALL: [Blockchain; 3] = [Blockchain::Eth, Blockchain::Bsc, Blockchain::Solana];

    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "eth" => Some(Blockchain::Eth),
            "bsc" => Some(Blockchain::Bsc),
            "solana" => Some(Blockchain::Solana),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Blockchain::Eth => "eth",
            Blockchain::Bsc => "bsc",
            Blockchain::Solana => "solana",
        }
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

/// Supported centralized-exchange venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Bybit,
    Binance,
    Bingx,
    Gate,
    Okx,
    Xt,
}

impl Venue {
    pub const ALL: [Venue; 6] = [
        Venue::Bybit,
        Venue::Binance,
        Venue::Bingx,
        Venue::Gate,
        Venue::Okx,
        Venue::Xt,
    ];

    pub fn from_api_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bybit" => Some(Venue::Bybit),
            "binance" => Some(Venue::Binance),
            "bingx" => Some(Venue::Bingx),
            "gate" => Some(Venue::Gate),
            "okx" => Some(Venue::Okx),
            "xt" => Some(Venue::Xt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Venue::Bybit => "bybit",
            Venue::Binance => "binance",
            Venue::Bingx => "bingx",
            Venue::Gate => "gate",
            Venue::Okx => "okx",
            Venue::Xt => "xt",
        }
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}
