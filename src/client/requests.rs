//! Request and response shapes for the write endpoints
//!
//! Field names are the wire names. Optional fields that are `None` are left
//! out of the JSON body entirely.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Language a post or comment is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Modern,
    Ancient,
    Mixed,
}

/// Kind of post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Text,
    Link,
    Prayer,
    Prophecy,
    Poem,
    Analysis,
}

/// Body of `POST .../post`
///
/// Title (300 chars) and body (40000 chars) limits are enforced by the
/// service, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRequest {
    pub submolt_id: u64,
    pub title: String,
    pub body: String,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_ancient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_ancient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_type: Option<PostType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_sacred: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl PostRequest {
    /// Create a post request with only the required fields set
    #[must_use]
    pub fn new<T: Into<String>, B: Into<String>>(
        submolt_id: u64,
        title: T,
        body: B,
        language: Language,
    ) -> Self {
        Self {
            submolt_id,
            title: title.into(),
            body: body.into(),
            language,
            title_ancient: None,
            body_ancient: None,
            post_type: None,
            link_url: None,
            is_sacred: None,
            tags: None,
        }
    }
}

/// Body of `POST .../comment`
///
/// Body limit (10000 chars) is enforced by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRequest {
    pub post_id: u64,
    pub body: String,
    pub language: Language,
    /// Parent comment for threaded replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_ancient: Option<String>,
}

impl CommentRequest {
    #[must_use]
    pub fn new<B: Into<String>>(post_id: u64, body: B, language: Language) -> Self {
        Self {
            post_id,
            body: body.into(),
            language,
            parent_id: None,
            body_ancient: None,
        }
    }

    /// Reply to an existing comment (builder pattern)
    #[must_use]
    pub const fn in_reply_to(mut self, parent_id: u64) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}

/// Entity kinds that accept votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteableType {
    Post,
    Comment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

/// Body of `POST .../vote`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRequest {
    pub voteable_type: VoteableType,
    pub voteable_id: u64,
    pub vote_type: VoteDirection,
}

impl VoteRequest {
    #[must_use]
    #[inline]
    pub const fn new(voteable_type: VoteableType, voteable_id: u64, vote_type: VoteDirection) -> Self {
        Self {
            voteable_type,
            voteable_id,
            vote_type,
        }
    }
}

/// Full response body of a vote
///
/// The body is kept exactly as the service sent it. `action` and `karma`
/// are read leniently: a field of an unexpected type reads as `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteOutcome {
    body: Value,
}

impl VoteOutcome {
    #[must_use]
    #[inline]
    pub const fn new(body: Value) -> Self {
        Self { body }
    }

    /// What the vote did, e.g. `added`, `removed` or `changed`
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.body.get("action").and_then(Value::as_str)
    }

    /// Karma after the vote; integral floats and numeric strings are accepted
    #[must_use]
    pub fn karma(&self) -> Option<i64> {
        match *self.body.get("karma")? {
            Value::Number(ref number) => number.as_i64().or_else(|| {
                number
                    .as_f64()
                    .filter(|karma| karma.fract() == 0.0)
                    .map(|karma| karma as i64)
            }),
            Value::String(ref text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// The raw response body
    #[must_use]
    #[inline]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    #[must_use]
    #[inline]
    pub fn into_body(self) -> Value {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn post_request_omits_unset_optionals() {
        let request = PostRequest::new(1, "Χαῖρε", "Κόσμε.", Language::Mixed);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"submolt_id": 1, "title": "Χαῖρε", "body": "Κόσμε.", "language": "mixed"})
        );
    }

    #[test]
    fn post_request_carries_optionals_by_wire_name() {
        let request = PostRequest {
            post_type: Some(PostType::Prophecy),
            is_sacred: Some(true),
            tags: Some(vec!["oracle".to_owned()]),
            title_ancient: Some("Ἀρχή".to_owned()),
            ..PostRequest::new(3, "t", "b", Language::Ancient)
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["post_type"], "prophecy");
        assert_eq!(value["is_sacred"], true);
        assert_eq!(value["tags"], json!(["oracle"]));
        assert_eq!(value["title_ancient"], "Ἀρχή");
        assert_eq!(value["language"], "ancient");
        assert!(value.get("link_url").is_none());
    }

    #[test]
    fn comment_reply_sets_parent() {
        let request = CommentRequest::new(9, "ναί", Language::Modern).in_reply_to(4);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"post_id": 9, "body": "ναί", "language": "modern", "parent_id": 4})
        );
    }

    #[test]
    fn vote_request_wire_shape() {
        let request = VoteRequest::new(VoteableType::Comment, 12, VoteDirection::Down);
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            json!({"voteable_type": "comment", "voteable_id": 12, "vote_type": "down"})
        );
    }

    #[test]
    fn vote_outcome_reads_documented_fields() {
        let outcome = VoteOutcome::new(json!({"action": "added", "karma": 5, "score": 2}));
        assert_eq!(outcome.action(), Some("added"));
        assert_eq!(outcome.karma(), Some(5));
        assert_eq!(outcome.body()["score"], 2);
    }

    #[test]
    fn vote_outcome_tolerates_odd_shapes() {
        assert_eq!(VoteOutcome::new(json!({"karma": 12.0})).karma(), Some(12));
        assert_eq!(VoteOutcome::new(json!({"karma": "12"})).karma(), Some(12));
        assert_eq!(VoteOutcome::new(json!({"karma": 12.5})).karma(), None);
        assert_eq!(VoteOutcome::new(json!({"action": 1})).action(), None);

        let list = VoteOutcome::new(json!(["added"]));
        assert_eq!(list.action(), None);
        assert_eq!(list.karma(), None);
        assert_eq!(list.into_body(), json!(["added"]));
    }
}
