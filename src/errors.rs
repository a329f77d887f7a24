use reqwest::StatusCode;

/// Failure modes of a backend API call.
///
/// The three kinds are independently matchable so a caller can keep stale
/// data on a transport hiccup, surface a server rejection, or flag a contract
/// drift, without any of them taking the process down.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("server error: {status}: {body}")]
    Server { status: StatusCode, body: String },

    /// The response body does not match the expected domain shape.
    #[error("schema error: {0}")]
    Schema(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    pub fn is_server(&self) -> bool {
        matches!(self, ApiError::Server { .. })
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, ApiError::Schema(_))
    }

    /// Status code of a server rejection, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
