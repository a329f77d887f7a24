use std::env;

const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
const DEFAULT_LIST_LIMIT: u32 = 100;

/// Process-wide settings, resolved once at startup and read-only after.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend origin, without the `/api` suffix.
    pub backend_url: String,
    /// Page bound for GET /signals.
    pub signal_limit: u32,
    /// Page bound for GET /trades.
    pub trade_limit: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let backend_url = env::var("BACKEND_URL")
            .unwrap_or_else(|_| DEFAULT_BACKEND_URL.into())
            .trim_end_matches('/')
            .to_string();

        let signal_limit = env::var("SIGNAL_LIMIT")
            .ok()
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(DEFAULT_LIST_LIMIT);

        let trade_limit = env::var("TRADE_LIMIT")
            .ok()
            .map(|v| v.parse())
            .transpose()?
            .unwrap_or(DEFAULT_LIST_LIMIT);

        Ok(Self {
            backend_url,
            signal_limit,
            trade_limit,
        })
    }

    /// Base URL for the REST client, `/api` prefix included.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url)
    }
}
