use uuid::Uuid;

use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::{Exchange, NewExchange};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Rejected client-side before any HTTP request was made.
    #[error("invalid exchange form: {0}")]
    Invalid(String),

    /// No delete has been requested, so there is nothing to confirm.
    #[error("no pending delete")]
    NoPendingDelete,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Create/delete operations over the configured exchange list.
///
/// The server owns generated fields (id, created_at) and strips api_secret
/// from reads, so every mutation is followed by a full re-fetch instead of
/// an optimistic local insert or remove. Deletion is a two-step flow:
/// `request_delete` arms the confirmation, `confirm_delete` issues it.
#[derive(Debug, Default)]
pub struct ExchangeEditor {
    exchanges: Vec<Exchange>,
    pending_delete: Option<Uuid>,
}

impl ExchangeEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn pending_delete(&self) -> Option<Uuid> {
        self.pending_delete
    }

    /// Replaces the local list with the server's.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<(), ApiError> {
        self.exchanges = client.get_exchanges().await?;
        Ok(())
    }

    /// Validates and submits a new credential binding, then re-fetches.
    pub async fn create(
        &mut self,
        client: &ApiClient,
        form: NewExchange,
    ) -> Result<(), RegistryError> {
        form.validate().map_err(RegistryError::Invalid)?;
        client.create_exchange(&form).await?;
        self.refresh(client).await?;
        Ok(())
    }

    /// Arms deletion of `id`; returns false if the id is not in the list.
    pub fn request_delete(&mut self, id: Uuid) -> bool {
        if self.exchanges.iter().any(|e| e.id == id) {
            self.pending_delete = Some(id);
            true
        } else {
            false
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Issues the armed delete and re-fetches. On failure the entry stays in
    /// the local list; a repeat delete of an already-removed id surfaces the
    /// server's rejection rather than silently succeeding.
    pub async fn confirm_delete(&mut self, client: &ApiClient) -> Result<(), RegistryError> {
        let id = self.pending_delete.take().ok_or(RegistryError::NoPendingDelete)?;
        client.delete_exchange(id).await?;
        self.refresh(client).await?;
        Ok(())
    }
}
