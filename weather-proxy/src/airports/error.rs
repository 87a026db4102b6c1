//! Airport dataset error types.

/// Errors that can occur when fetching the airport dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Dataset host returned an error status
    #[error("dataset error {status}: {message}")]
    Api { status: u16, message: String },
}
