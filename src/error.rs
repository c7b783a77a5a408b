// Error types shared by the library. Every operation of the API client
// returns an `ApiError`; the UI layer decides which message to print for
// each variant.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// No usable token on disk. Raised before any network call is made.
    #[error("You must be logged in to perform this action.")]
    NotLoggedIn,

    /// The server answered, but not with the status the operation expects.
    #[error("Request rejected with status {status}")]
    Rejected { status: StatusCode },

    /// Login returned success but the body did not carry `access_token`.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to save token: {0}")]
    Storage(#[from] std::io::Error),
}

impl ApiError {
    /// Status code of a rejected request, if that is what happened.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Rejected { status } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to get home directory.")]
    HomeDirUnavailable,
}
