//! Aviation Weather client error types.

/// Errors from the Aviation Weather station API client.
#[derive(Debug, thiserror::Error)]
pub enum AviationError {
    /// The API answered with a non-success status.
    #[error("HTTP {status} {reason}")]
    Status { status: u16, reason: String },

    /// Could not reach the API (connection refused, DNS, timeout).
    #[error("{0}")]
    Unreachable(reqwest::Error),

    /// The API returned a payload that is not the expected JSON.
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Any other transport failure (body decoding, invalid URL, ...).
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for AviationError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            AviationError::Unreachable(err)
        } else {
            AviationError::Http(err)
        }
    }
}
