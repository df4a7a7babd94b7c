use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::RepoError;

/// Post store - the persistence port for `Post` records.
///
/// Callers are expected to check existence with `find_by_id` before
/// `update`/`delete`; the store itself does not coordinate the two calls.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a post, assigning a fresh id when it has none.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Snapshot of every stored post.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id. `Ok(None)` when absent.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Overwrite the mutable fields of the post with the same id.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove a post. Removing an absent post is a no-op.
    async fn delete(&self, post: &Post) -> Result<(), RepoError>;

    /// Remove every post, returning how many were removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
