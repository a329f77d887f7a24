use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::{BotConfig, DashboardStats, Exchange, NewExchange, Signal, Trade};

/// Thin transport layer over the bot backend's REST API.
///
/// Stateless between calls; cloning shares the underlying connection pool.
/// List responses are returned in server order (most recent first) and are
/// never re-sorted here, so server-side limiting stays stable.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` should include the `/api` prefix, e.g. `http://host:8000/api`.
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        let resp = self
            .http
            .get(format!("{}/stats", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn get_signals(&self, limit: Option<u32>) -> Result<Vec<Signal>, ApiError> {
        let mut req = self.http.get(format!("{}/signals", self.base_url));
        if let Some(limit) = limit {
            req = req.query(&[("limit", limit)]);
        }
        decode(req.send().await?).await
    }

    pub async fn get_trades(&self, limit: Option<u32>) -> Result<Vec<Trade>, ApiError> {
        let mut req = self.http.get(format!("{}/trades", self.base_url));
        if let Some(limit) = limit {
            req = req.query(&[("limit", limit)]);
        }
        decode(req.send().await?).await
    }

    pub async fn get_exchanges(&self) -> Result<Vec<Exchange>, ApiError> {
        let resp = self
            .http
            .get(format!("{}/exchanges", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn create_exchange(&self, form: &NewExchange) -> Result<Exchange, ApiError> {
        let resp = self
            .http
            .post(format!("{}/exchanges", self.base_url))
            .json(form)
            .send()
            .await?;
        decode(resp).await
    }

    /// Deleting an id the server does not know fails with
    /// [`ApiError::Server`]; the operation is not idempotent.
    pub async fn delete_exchange(&self, id: Uuid) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(format!("{}/exchanges/{id}", self.base_url))
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    pub async fn get_config(&self) -> Result<BotConfig, ApiError> {
        let resp = self
            .http
            .get(format!("{}/config", self.base_url))
            .send()
            .await?;
        decode(resp).await
    }

    /// Replaces the config wholesale; there is no partial-field patch.
    pub async fn put_config(&self, config: &BotConfig) -> Result<BotConfig, ApiError> {
        let resp = self
            .http
            .put(format!("{}/config", self.base_url))
            .json(config)
            .send()
            .await?;
        decode(resp).await
    }
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Server { status, body })
}

/// Reads the body as bytes first so a shape mismatch surfaces as
/// [`ApiError::Schema`] rather than blending into the transport error.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
