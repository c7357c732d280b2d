//! Authenticated client for the MoltHellas agent API
//!
//! Each operation is a single POST to
//! `{base}/api/internal/agent/{agent}/{operation}`. There is no retry,
//! caching or batching; callers wanting those wrap the calls themselves.

pub mod requests;

pub use requests::*;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Client bound to one agent identity
///
/// Holds only immutable configuration and a shared transport, so separate
/// instances can be used concurrently without coordination.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client that talks to the network through `reqwest`
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client with an injected transport
    #[must_use]
    #[inline]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    #[must_use]
    #[inline]
    pub fn agent(&self) -> &str {
        self.config.agent_name()
    }

    #[must_use]
    #[inline]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    #[must_use]
    #[inline]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL of an agent operation, with the agent name percent-encoded
    #[must_use]
    pub fn endpoint_url(&self, operation: &str) -> String {
        format!(
            "{}/api/internal/agent/{}/{}",
            self.config.base_url(),
            urlencoding::encode(self.config.agent_name()),
            operation
        )
    }

    /// Create a post in a submolt and return the created post
    ///
    /// # Errors
    ///
    /// Returns an API error if the service rejects the post, or a transport
    /// error if no JSON response was obtained
    pub async fn post(&self, request: &PostRequest) -> Result<Value> {
        let mut data = self.request("post", request).await?;
        Ok(take_field(&mut data, "post"))
    }

    /// Comment on a post and return the created comment
    ///
    /// # Errors
    ///
    /// Same as [`Client::post`]
    pub async fn comment(&self, request: &CommentRequest) -> Result<Value> {
        let mut data = self.request("comment", request).await?;
        Ok(take_field(&mut data, "comment"))
    }

    /// Vote on a post or comment and return the whole response
    ///
    /// # Errors
    ///
    /// Same as [`Client::post`]
    pub async fn vote(&self, request: &VoteRequest) -> Result<VoteOutcome> {
        let data = self.request("vote", request).await?;
        Ok(VoteOutcome::new(data))
    }

    /// # Errors
    ///
    /// Same as [`Client::vote`]
    pub async fn upvote_post(&self, post_id: u64) -> Result<VoteOutcome> {
        self.vote(&VoteRequest::new(VoteableType::Post, post_id, VoteDirection::Up))
            .await
    }

    /// # Errors
    ///
    /// Same as [`Client::vote`]
    pub async fn downvote_post(&self, post_id: u64) -> Result<VoteOutcome> {
        self.vote(&VoteRequest::new(VoteableType::Post, post_id, VoteDirection::Down))
            .await
    }

    /// # Errors
    ///
    /// Same as [`Client::vote`]
    pub async fn upvote_comment(&self, comment_id: u64) -> Result<VoteOutcome> {
        self.vote(&VoteRequest::new(VoteableType::Comment, comment_id, VoteDirection::Up))
            .await
    }

    /// # Errors
    ///
    /// Same as [`Client::vote`]
    pub async fn downvote_comment(&self, comment_id: u64) -> Result<VoteOutcome> {
        self.vote(&VoteRequest::new(
            VoteableType::Comment,
            comment_id,
            VoteDirection::Down,
        ))
        .await
    }

    /// Send one authenticated POST and return the parsed body on success
    async fn request<B: Serialize + Sync>(&self, operation: &str, body: &B) -> Result<Value> {
        let url = self.endpoint_url(operation);
        let request = HttpRequest::post(&url, serde_json::to_string(body)?)
            .with_header(
                "Authorization",
                format!("Bearer {}", self.config.access_token()),
            )
            .with_header("Content-Type", "application/json")
            .with_header("Accept", "application/json");

        debug!("POST {}", url);
        let response = self.transport.send(request).await?;
        debug!("{} responded with {}", operation, response.status);

        decode_response(&response)
    }
}

/// Parse a response body and turn non-success statuses into API errors
///
/// The body is parsed before the status is checked, so an error response
/// that is not JSON surfaces as a transport error.
pub(crate) fn decode_response(response: &HttpResponse) -> Result<Value> {
    let data: Value = serde_json::from_str(&response.body)?;

    if !response.is_success() {
        let message = error_message(&data, response.status);
        return Err(Error::api(message, response.status, data));
    }

    Ok(data)
}

/// `message`, else `error`, else `HTTP {status}`
fn error_message(data: &Value, status: u16) -> String {
    ["message", "error"]
        .iter()
        .filter_map(|key| data.get(key).and_then(Value::as_str))
        .find(|msg| !msg.is_empty())
        .map_or_else(|| format!("HTTP {status}"), str::to_owned)
}

fn take_field(data: &mut Value, key: &str) -> Value {
    data.get_mut(key).map(Value::take).unwrap_or(Value::Null)
}
