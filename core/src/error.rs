//! Error types for the todo API client.
//!
//! # Design
//! Every failure on the load path ends up as the same user-facing banner, but
//! the variants are kept apart so logs say what actually went wrong. Non-2xx
//! responses land in `HttpError` with the raw status code and body.

use thiserror::Error;

/// Errors produced while fetching the todo list.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The host could not complete the round-trip at all.
    #[error("transport failed: {0}")]
    Transport(String),
}
