//! Real transport implementation using `reqwest`

use super::{HttpRequest, HttpResponse, Method, Transport};
use crate::error::Result;
use async_trait::async_trait;
use tracing::debug;

/// Production implementation of the Transport trait
///
/// Uses reqwest's default client settings, including its default timeout
/// behaviour. Cloning shares the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a new `ReqwestTransport` with a default `reqwest::Client`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing `reqwest::Client`
    #[must_use]
    #[inline]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!("{} {}", request.method, request.url);

        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("{} -> {}", request.url, status);

        Ok(HttpResponse { status, body })
    }
}
