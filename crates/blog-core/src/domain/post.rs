use serde::{Deserialize, Serialize};

/// Primary key of a stored post.
pub type PostId = i64;

/// Post entity - represents one blog post.
///
/// `id` is `None` until the store assigns one on first insert and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<PostId>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Post {
    /// Create a new, not yet persisted post.
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            id: None,
            title,
            content,
        }
    }

    /// Copy of this post with `title` and `content` replaced; `id` is kept.
    pub fn with_content(&self, title: Option<String>, content: Option<String>) -> Self {
        Self {
            id: self.id,
            title,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_has_no_id() {
        let post = Post::new(Some("t".into()), None);
        assert_eq!(post.id, None);
        assert_eq!(post.title.as_deref(), Some("t"));
        assert_eq!(post.content, None);
    }

    #[test]
    fn test_with_content_keeps_id() {
        let stored = Post {
            id: Some(7),
            title: Some("old".into()),
            content: Some("old body".into()),
        };

        let updated = stored.with_content(Some("new".into()), None);

        assert_eq!(updated.id, Some(7));
        assert_eq!(updated.title.as_deref(), Some("new"));
        assert_eq!(updated.content, None);
    }

    #[test]
    fn test_serializes_flat() {
        let post = Post {
            id: Some(1),
            title: Some("t1".into()),
            content: Some("c1".into()),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "t1", "content": "c1"})
        );
    }
}
