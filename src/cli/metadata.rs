//! Platform metadata document served at `/developers/api.json`

use crate::error::{Error, Result};
use crate::transport::{HttpRequest, Transport};
use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Path of the unauthenticated metadata document
pub const METADATA_PATH: &str = "/developers/api.json";

/// Decoded metadata document
///
/// Every field is optional and decoded leniently: a field of an unexpected
/// type reads as absent instead of failing the whole document. Maps keep the
/// order the service sent them in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub platform: Option<PlatformInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub authentication: Option<AuthenticationInfo>,
    #[serde(default, deserialize_with = "lenient")]
    pub endpoints: Option<IndexMap<String, Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub language_guidelines: Option<IndexMap<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthenticationInfo {
    #[serde(default, rename = "type", deserialize_with = "lenient")]
    pub auth_type: Option<String>,
}

/// One entry of the `endpoints` map
#[derive(Debug, Clone, Copy)]
pub struct EndpointInfo<'doc> {
    value: &'doc Value,
}

impl EndpointInfo<'_> {
    pub fn method(&self) -> String {
        self.field("method")
    }

    pub fn url(&self) -> String {
        self.field("url")
    }

    pub fn description(&self) -> String {
        self.field("description")
    }

    fn field(&self, key: &str) -> String {
        self.value.get(key).map(display_value).unwrap_or_default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrSkip<T> {
    Value(T),
    Skip(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D) -> core::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Option::<OrSkip<T>>::deserialize(deserializer)? {
        Some(OrSkip::Value(value)) => Some(value),
        Some(OrSkip::Skip(_)) | None => None,
    })
}

/// Strings print bare, null prints empty, anything else as compact JSON
#[must_use]
pub fn display_value(value: &Value) -> String {
    match *value {
        Value::String(ref text) => text.clone(),
        Value::Null => String::new(),
        ref other => other.to_string(),
    }
}

fn non_empty(text: Option<&String>) -> Option<&str> {
    text.map(String::as_str).filter(|text| !text.is_empty())
}

impl PlatformMetadata {
    pub fn name(&self) -> Option<&str> {
        non_empty(self.platform.as_ref()?.name.as_ref())
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(self.platform.as_ref()?.url.as_ref())
    }

    pub fn language(&self) -> Option<&str> {
        non_empty(self.platform.as_ref()?.language.as_ref())
    }

    pub fn auth_type(&self) -> Option<&str> {
        non_empty(self.authentication.as_ref()?.auth_type.as_ref())
    }

    /// Endpoints in document order
    pub fn endpoints(&self) -> impl Iterator<Item = (&String, EndpointInfo<'_>)> {
        self.endpoints
            .iter()
            .flatten()
            .map(|(name, value)| (name, EndpointInfo { value }))
    }

    /// Language guidelines in document order, without the `note` entry
    pub fn language_guidelines(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.language_guidelines
            .iter()
            .flatten()
            .filter(|&(key, _)| key != "note")
    }
}

/// GET the metadata document from `base_url`
///
/// # Errors
///
/// Returns an API error for a non-success status, or a transport error if
/// the host is unreachable or the document is not valid JSON
pub async fn fetch_metadata(transport: &dyn Transport, base_url: &str) -> Result<PlatformMetadata> {
    let url = format!("{base_url}{METADATA_PATH}");
    debug!("GET {}", url);

    let response = transport.send(HttpRequest::get(url)).await?;
    if !response.is_success() {
        let payload = serde_json::from_str(&response.body).unwrap_or(Value::Null);
        return Err(Error::api(
            format!("HTTP {}", response.status),
            response.status,
            payload,
        ));
    }

    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;
    use serde_json::json;

    #[test]
    fn decodes_partial_document() {
        let metadata: PlatformMetadata = serde_json::from_value(json!({
            "platform": {"name": "MoltHellas"},
            "endpoints": null
        }))
        .unwrap();
        assert_eq!(metadata.name(), Some("MoltHellas"));
        assert_eq!(metadata.url(), None);
        assert_eq!(metadata.auth_type(), None);
        assert_eq!(metadata.endpoints().count(), 0);
        assert_eq!(metadata.language_guidelines().count(), 0);
    }

    #[test]
    fn preserves_document_order_and_skips_note() {
        let metadata: PlatformMetadata = serde_json::from_str(
            r#"{
                "endpoints": {
                    "zeta": {"method": "POST", "url": "/z", "description": "last letter"},
                    "alpha": {"method": "GET", "url": "/a", "description": "first letter"}
                },
                "language_guidelines": {
                    "modern": "Modern Greek",
                    "note": "ignored",
                    "ancient": "Ancient Greek"
                }
            }"#,
        )
        .unwrap();

        let names: Vec<&str> = metadata.endpoints().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);

        let keys: Vec<&str> = metadata
            .language_guidelines()
            .map(|(key, _)| key.as_str())
            .collect();
        assert_eq!(keys, vec!["modern", "ancient"]);
    }

    #[test]
    fn unexpected_types_read_as_absent() {
        let metadata: PlatformMetadata = serde_json::from_value(json!({
            "platform": {"name": 7, "url": "https://molthellas.gr", "language": ""},
            "authentication": "bearer",
            "endpoints": {
                "foo": {"method": "GET", "url": "/x", "description": "d"},
                "bar": {"method": ["GET", "POST"], "url": "/y"},
                "baz": "not an object"
            },
            "language_guidelines": ["modern"]
        }))
        .unwrap();

        assert_eq!(metadata.name(), None);
        assert_eq!(metadata.url(), Some("https://molthellas.gr"));
        assert_eq!(metadata.language(), None);
        assert_eq!(metadata.auth_type(), None);
        assert_eq!(metadata.language_guidelines().count(), 0);

        let endpoints: Vec<(String, String, String)> = metadata
            .endpoints()
            .map(|(_, endpoint)| (endpoint.method(), endpoint.url(), endpoint.description()))
            .collect();
        assert_eq!(
            endpoints,
            vec![
                ("GET".to_owned(), "/x".to_owned(), "d".to_owned()),
                (r#"["GET","POST"]"#.to_owned(), "/y".to_owned(), String::new()),
                (String::new(), String::new(), String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn fetch_uses_metadata_path() {
        let transport = MockTransport::new().with_json(200, &json!({"endpoints": {}}));
        fetch_metadata(&transport, "http://localhost:8000").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "http://localhost:8000/developers/api.json");
        assert!(request.header("Authorization").is_none());
    }

    #[tokio::test]
    async fn fetch_maps_status_to_api_error() {
        let transport = MockTransport::new().with_response(503, "unavailable");
        let err = fetch_metadata(&transport, "http://localhost:8000").await.unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.payload(), Some(&Value::Null));
    }
}
