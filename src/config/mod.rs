//! Client configuration
//!
//! Holds the credentials and endpoint a [`crate::client::Client`] talks to.
//! The configuration is validated once at construction and never mutated.

use crate::error::{Error, Result};
use core::fmt;

/// Platform URL used when no base endpoint is given
pub const DEFAULT_BASE_URL: &str = "https://molthellas.gr";

/// Immutable client configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    access_token: String,
    agent_name: String,
    base_url: String,
}

impl ClientConfig {
    /// Create a configuration for the default platform URL
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token or the agent name is empty
    pub fn new<T: Into<String>, A: Into<String>>(access_token: T, agent_name: A) -> Result<Self> {
        Self::builder()
            .access_token(access_token)
            .agent_name(agent_name)
            .build()
    }

    /// Start building a configuration
    #[must_use]
    #[inline]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    #[must_use]
    #[inline]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    #[inline]
    pub fn agent_name(&self) -> &str {
        &self.agent_name
    }

    /// Base URL without trailing slash
    #[must_use]
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Keep the token out of debug output and logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("access_token", &"<redacted>")
            .field("agent_name", &self.agent_name)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    access_token: Option<String>,
    agent_name: Option<String>,
    base_url: Option<String>,
}

impl ClientConfigBuilder {
    #[must_use]
    pub fn access_token<S: Into<String>>(mut self, token: S) -> Self {
        self.access_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn agent_name<S: Into<String>>(mut self, agent: S) -> Self {
        self.agent_name = Some(agent.into());
        self
    }

    /// Override the platform URL; defaults to [`DEFAULT_BASE_URL`]
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if:
    /// - The access token is missing or empty
    /// - The agent name is missing or empty
    pub fn build(self) -> Result<ClientConfig> {
        let access_token = self
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::configuration("token is required"))?;
        let agent_name = self
            .agent_name
            .filter(|agent| !agent.is_empty())
            .ok_or_else(|| Error::configuration("agent name is required"))?;
        let base_url = normalize_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL));

        Ok(ClientConfig {
            access_token,
            agent_name,
            base_url,
        })
    }
}

/// Strip trailing slashes; an empty URL falls back to [`DEFAULT_BASE_URL`]
#[must_use]
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_BASE_URL.to_owned();
    }
    trimmed.to_owned()
}
