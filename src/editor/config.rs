use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::{Blockchain, BotConfig, Venue};

/// Edit lifecycle: `clean → dirty → saving → {clean, dirty}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Clean,
    Dirty,
    Saving,
}

/// Locally-mutable draft of the bot's trading policy.
///
/// Edits only touch the in-memory draft; `save` PUTs the complete draft and,
/// on success, adopts the server's response as the new committed baseline.
/// A failed save keeps the draft untouched so the operator loses nothing.
///
/// The two spread bounds are set independently and min_spread > max_spread is
/// not auto-corrected here; the backend owns that validation.
#[derive(Debug, Default)]
pub struct ConfigEditor {
    committed: Option<BotConfig>,
    draft: Option<BotConfig>,
    state: EditorState,
}

impl ConfigEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the committed config and resets the draft to it.
    pub async fn load(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let config = client.get_config().await?;
        self.draft = Some(config.clone());
        self.committed = Some(config);
        self.state = EditorState::Clean;
        Ok(())
    }

    pub fn draft(&self) -> Option<&BotConfig> {
        self.draft.as_ref()
    }

    pub fn committed(&self) -> Option<&BotConfig> {
        self.committed.as_ref()
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == EditorState::Dirty
    }

    pub fn set_min_spread(&mut self, value: Decimal) {
        self.edit(|c| c.min_spread = value);
    }

    pub fn set_max_spread(&mut self, value: Decimal) {
        self.edit(|c| c.max_spread = value);
    }

    pub fn set_min_liquidity(&mut self, value: Decimal) {
        self.edit(|c| c.min_liquidity = value);
    }

    pub fn set_min_volume_24h(&mut self, value: Decimal) {
        self.edit(|c| c.min_volume_24h = value);
    }

    pub fn set_trade_amount(&mut self, value: Decimal) {
        self.edit(|c| c.trade_amount = value);
    }

    pub fn set_auto_trading(&mut self, enabled: bool) {
        self.edit(|c| c.auto_trading = enabled);
    }

    /// Set-membership toggle; applying it twice with the same chain restores
    /// the original membership.
    pub fn toggle_blockchain(&mut self, chain: Blockchain) {
        self.edit(|c| c.toggle_blockchain(chain));
    }

    pub fn toggle_exchange(&mut self, venue: Venue) {
        self.edit(|c| c.toggle_exchange(venue));
    }

    /// Discards local edits, restoring the committed baseline.
    pub fn revert(&mut self) {
        self.draft = self.committed.clone();
        self.state = EditorState::Clean;
    }

    /// Persists the full draft. No-op when nothing has been loaded.
    pub async fn save(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        let Some(draft) = self.draft.clone() else {
            return Ok(());
        };

        self.state = EditorState::Saving;
        match client.put_config(&draft).await {
            Ok(saved) => {
                self.draft = Some(saved.clone());
                self.committed = Some(saved);
                self.state = EditorState::Clean;
                Ok(())
            }
            Err(e) => {
                // Draft stays exactly as it was; the operator keeps the edits.
                self.state = EditorState::Dirty;
                Err(e)
            }
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut BotConfig)) {
        if let Some(draft) = self.draft.as_mut() {
            f(draft);
            self.state = EditorState::Dirty;
        }
    }
}
