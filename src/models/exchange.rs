use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Venue;

/// A configured exchange credential binding, as returned by the backend.
///
/// There is deliberately no `api_secret` field here: the secret is write-only
/// and never appears in a read response, so the read model cannot carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exchange {
    pub id: Uuid,
    pub name: Venue,
    pub api_key: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Exchange {
    /// Key rendered for display: first four characters, rest elided.
    pub fn masked_key(&self) -> String {
        let visible: String = self.api_key.chars().take(4).collect();
        format!("{visible}...")
    }
}

/// Creation payload for POST /exchanges. The secret is sent once and
/// cannot be read back; replacing credentials means delete-then-recreate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExchange {
    pub name: Venue,
    pub api_key: String,
    pub api_secret: String,
    pub is_active: bool,
}

impl NewExchange {
    /// Client-side validation run before any HTTP request is issued.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("api_key must not be empty".into());
        }
        if self.api_secret.trim().is_empty() {
            return Err("api_secret must not be empty".into());
        }
        Ok(())
    }
}
