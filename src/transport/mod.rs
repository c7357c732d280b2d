//! HTTP transport abstraction
//!
//! Every outbound call of the client and the CLI goes through the
//! [`Transport`] trait, so both can be exercised without real network access.

use crate::error::Result;
use async_trait::async_trait;
use core::fmt;

pub mod mock;
pub mod real;

pub use mock::MockTransport;
pub use real::ReqwestTransport;

/// HTTP method used by a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Outbound request as seen by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Create a GET request without headers or body
    #[must_use]
    #[inline]
    pub fn get<S: Into<String>>(url: S) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Create a POST request carrying `body`
    #[must_use]
    #[inline]
    pub fn post<S: Into<String>>(url: S, body: String) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body),
        }
    }

    /// Append a header (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Look up a header value, ignoring ASCII case of the name
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response status and raw body returned by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    #[must_use]
    #[inline]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Capability to perform one HTTP round trip
///
/// Implementations return `Err` only when no response was obtained.
/// Non-success statuses are regular responses.
///
/// # Implementations
/// - `ReqwestTransport`: Production implementation backed by `reqwest`
/// - `MockTransport`: Test implementation replaying queued responses
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and wait for the full response
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}
