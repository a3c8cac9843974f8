//! Call error types

use thiserror::Error;

/// Errors from constructing a caller or classifying a failed transfer.
///
/// Verb methods never return these; a failed transfer is logged and folded
/// into the returned [`crate::CallResult`].
#[derive(Debug, Error)]
pub enum CallError {
    /// Connection error
    #[error("connection error: {0}")]
    Connection(String),
    /// Transfer timeout
    #[error("transfer timeout")]
    Timeout,
    /// Client build error
    #[error("client build error: {0}")]
    Build(String),
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for CallError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CallError::Timeout
        } else if err.is_connect() {
            CallError::Connection(err.to_string())
        } else if err.is_builder() {
            CallError::Build(err.to_string())
        } else {
            CallError::Other(err.to_string())
        }
    }
}
