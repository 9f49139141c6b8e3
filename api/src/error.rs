use std::time::Duration;

use thiserror::Error;

/// Everything that can go wrong between building a request and decoding its body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request url `{0}`")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no response within {}s", .0.as_secs())]
    Timeout(Duration),
}

impl ApiError {
    /// Short machine-friendly tag, handy for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "invalid-url",
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
            Self::Timeout(_) => "timeout",
        }
    }
}
