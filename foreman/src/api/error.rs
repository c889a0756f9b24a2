use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Non-2xx response with the decoded Foreman error envelope.
    #[error("API returned error (HTTP {status}): {}", messages.join("; "))]
    Api { status: u16, messages: Vec<String> },

    /// 404 gets its own variant so READ/DELETE can map it to "resource no
    /// longer exists" instead of failing.
    #[error("Resource not found (HTTP 404)")]
    NotFound,

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Entity has no server-assigned id")]
    MissingId,

    #[error("Request cancelled")]
    Cancelled,

    #[error("Query returned no results")]
    NoResults,

    #[error("Query returned {0} results, expected exactly 1")]
    TooManyResults(u32),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
