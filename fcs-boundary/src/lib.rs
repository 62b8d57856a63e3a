use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "entity-conversions")]
mod conv;

/// Request body for creating a comment.
///
/// All fields are kept as raw JSON. Values of the wrong
/// type are rejected by the validation rules with a
/// dedicated error message instead of a parse error.
#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    #[serde(default)]
    pub film_id : Value,
    #[serde(default)]
    pub nik     : Value,
    #[serde(default)]
    pub text    : Value,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct CommentCreated {
    pub id: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id         : String,
    pub film_id    : i64,
    pub nik        : String,
    pub text       : String,
    // unix time in milliseconds
    pub created_at : i64,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct CommentCountsRequest {
    #[serde(default)]
    pub film_ids: Value,
}

/// Number of comments per film id.
///
/// JSON object keys are strings, i.e. the film ids
/// are serialized as decimal strings.
pub type CommentCounts = BTreeMap<i64, u64>;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserialize_new_comment() {
        let c: NewComment =
            serde_json::from_value(json!({"filmId": 3, "nik": "alice", "text": "hi"})).unwrap();
        assert_eq!(Some(3.0), c.film_id.as_f64());
        assert_eq!(Some("alice"), c.nik.as_str());
        assert_eq!(Some("hi"), c.text.as_str());
    }

    #[test]
    fn deserialize_incomplete_new_comment() {
        let c: NewComment = serde_json::from_value(json!({"filmId": "3"})).unwrap();
        assert!(c.film_id.as_f64().is_none());
        assert!(c.nik.is_null());
        assert!(c.text.is_null());
    }

    #[test]
    fn deserialize_new_comment_with_non_string_fields() {
        let c: NewComment =
            serde_json::from_value(json!({"filmId": 1, "nik": 5, "text": null})).unwrap();
        assert_eq!(Some(5), c.nik.as_i64());
        assert!(c.text.is_null());
    }

    #[test]
    fn serialize_comment_counts_with_string_keys() {
        let mut counts = CommentCounts::new();
        counts.insert(1, 2);
        counts.insert(10, 0);
        assert_eq!(
            json!({"1": 2, "10": 0}),
            serde_json::to_value(&counts).unwrap()
        );
    }

    #[test]
    fn missing_film_ids_are_null() {
        let req: CommentCountsRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.film_ids.is_null());
    }
}
