//! In-memory post store - used when no database is configured, and in tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{Post, PostId};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// In-memory post repository using a `BTreeMap` behind an async `RwLock`.
///
/// Ids come from a sequence starting at 1 that is never rewound, so
/// `delete_all` behaves like truncating an auto-increment table without
/// restarting its identity. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<BTreeMap<PostId, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Resolve the id a post will be stored under, advancing the sequence.
    fn assign_id(&self, requested: Option<PostId>) -> PostId {
        match requested {
            Some(id) => {
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let id = self.assign_id(post.id);
        let stored = Post {
            id: Some(id),
            ..post
        };

        self.store.write().await.insert(id, stored.clone());
        tracing::debug!(post_id = id, "Inserted post");

        Ok(stored)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let Some(id) = post.id else {
            return self.insert(post).await;
        };

        // Upsert: a row removed since the caller's existence check is recreated.
        self.assign_id(Some(id));
        self.store.write().await.insert(id, post.clone());
        tracing::debug!(post_id = id, "Updated post");

        Ok(post)
    }

    async fn delete(&self, post: &Post) -> Result<(), RepoError> {
        if let Some(id) = post.id {
            self.store.write().await.remove(&id);
            tracing::debug!(post_id = id, "Deleted post");
        }
        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.len() as u64;
        store.clear();
        Ok(removed)
    }
}
