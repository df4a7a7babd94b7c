//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Unknown fields (including a client supplied `id`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_is_ignored() {
        let req: PostRequest =
            serde_json::from_str(r#"{"id": 42, "title": "t1", "content": "c1"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("t1"));
        assert_eq!(req.content.as_deref(), Some("c1"));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let req: PostRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert!(req.content.is_none());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result = serde_json::from_str::<PostRequest>(r#"{"title": 3}"#);
        assert!(result.is_err());
    }
}
