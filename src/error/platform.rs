//! Errors reported by the chat platform.
//!
//! Serenity's error type covers the whole client (gateway, cache, HTTP, model
//! validation). Channel operations only care about the handful of ways Discord can
//! refuse a request, so they are narrowed down to `PlatformError` at the platform
//! boundary.

use serenity::http::HttpError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Discord refused the request because the bot lacks a permission.
    #[error("Forbidden - Status {status}, Code {code}: {text}")]
    Forbidden { status: u16, code: isize, text: String },

    /// Discord answered with an unsuccessful HTTP status.
    #[error("HTTP error - Status {status}, Code {code}: {text}")]
    Http { status: u16, code: isize, text: String },

    /// The request was rejected client-side before being sent, e.g. a name that is
    /// too long or an invalid channel type.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Any other client failure (network, serialization, ...).
    #[error("{0}")]
    Other(String),
}

impl PlatformError {
    /// Classifies an unsuccessful Discord response by its HTTP status.
    ///
    /// # Arguments
    /// - `status` - HTTP status code of the response
    /// - `code` - Discord JSON error code
    /// - `text` - Discord error message
    ///
    /// # Returns
    /// - `PlatformError::Forbidden` - For 403 responses
    /// - `PlatformError::Http` - For every other status
    pub fn from_status(status: u16, code: isize, text: String) -> Self {
        if status == 403 {
            Self::Forbidden { status, code, text }
        } else {
            Self::Http { status, code, text }
        }
    }
}

impl From<serenity::Error> for PlatformError {
    fn from(err: serenity::Error) -> Self {
        match err {
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                Self::from_status(
                    response.status_code.as_u16(),
                    response.error.code,
                    response.error.message.clone(),
                )
            }
            serenity::Error::Model(e) => Self::InvalidArgument(e.to_string()),
            e => Self::Other(e.to_string()),
        }
    }
}
