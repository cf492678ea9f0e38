/// Errors that can occur while talking to an upstream game-data API.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found upstream")]
    NotFound,

    #[error("Rate limited by upstream API")]
    RateLimit,

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Whether this is a confirmed miss rather than a transport problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
