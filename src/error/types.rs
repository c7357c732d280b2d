//! Error types with exit codes

use serde_json::Value;
use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Main error type for MoltHellas operations
///
/// `Api` means the service answered and rejected the request. `Transport`
/// means the request never produced a usable answer.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration Error - missing or invalid local input
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// API Error - the service responded with a non-success status
    #[error("MoltHellas API error: {message}")]
    Api {
        message: String,
        status: u16,
        payload: Value,
    },

    /// Transport Error - network failure, timeout or undecodable body
    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl Error {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::Api { .. } => 2,
            Self::Transport { .. } => 3,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an API error from a status code and the parsed response body
    #[inline]
    pub fn api<S: Into<String>>(message: S, status: u16, payload: Value) -> Self {
        Self::Api {
            message: message.into(),
            status,
            payload,
        }
    }

    /// Create a transport error
    #[inline]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// The message without the variant prefix
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        match *self {
            Self::Configuration { ref message }
            | Self::Api { ref message, .. }
            | Self::Transport { ref message } => message,
        }
    }

    /// HTTP status of an API error
    #[must_use]
    #[inline]
    pub const fn status(&self) -> Option<u16> {
        match *self {
            Self::Api { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Raw response body of an API error
    #[must_use]
    #[inline]
    pub const fn payload(&self) -> Option<&Value> {
        match *self {
            Self::Api { ref payload, .. } => Some(payload),
            _ => None,
        }
    }

    #[must_use]
    #[inline]
    pub const fn is_api(&self) -> bool {
        matches!(*self, Self::Api { .. })
    }

    #[must_use]
    #[inline]
    pub const fn is_transport(&self) -> bool {
        matches!(*self, Self::Transport { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::transport(format!("Invalid JSON: {err}"))
    }
}
