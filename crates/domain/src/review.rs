//! Review — free-form customer feedback.
//!
//! Reviews carry no invariants: every field besides the identifier is
//! optional and client-supplied.

use serde::{Deserialize, Serialize};

use crate::id::ReviewId;

/// A piece of customer feedback. Read back only as a full collection scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", default)]
    pub id: ReviewId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Client-supplied fields with no dedicated column.
    #[serde(flatten, default)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_fully_empty_review() {
        let review: Review = serde_json::from_str("{}").unwrap();
        assert!(review.name.is_none());
        assert!(review.rating.is_none());
    }

    #[test]
    fn should_keep_unknown_fields_in_extra_bag() {
        let body = r#"{"name":"Ada","rating":5,"img":"ada.png"}"#;
        let review: Review = serde_json::from_str(body).unwrap();
        assert_eq!(review.rating, Some(5.0));
        assert_eq!(review.extra["img"], "ada.png");
    }
}
