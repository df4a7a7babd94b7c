//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::PostRepository;
use blog_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::{PostgresPostRepository, database::connect};

use crate::config::{AppConfig, BlogProperties};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub blog: BlogProperties,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, blog: BlogProperties) -> Self {
        Self { posts, blog }
    }

    /// Build the application state with the store selected by configuration.
    pub async fn from_config(config: &AppConfig) -> Self {
        let posts = build_post_store(config.database.as_ref()).await;

        tracing::info!("Application state initialized");

        Self::new(posts, config.blog.clone())
    }
}

#[cfg(feature = "postgres")]
async fn build_post_store(db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Arc::new(InMemoryPostRepository::new());
    };

    match connect(config).await {
        Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            Arc::new(InMemoryPostRepository::new())
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn build_post_store(db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
    if db_config.is_some() {
        tracing::warn!("DATABASE_URL ignored: built without postgres feature");
    }
    tracing::info!("Running without postgres feature - using in-memory repository");
    Arc::new(InMemoryPostRepository::new())
}
