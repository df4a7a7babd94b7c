//! Startup data initialization.

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

/// Sample posts written on every start.
const SEED_POSTS: [(&str, &str); 2] = [
    ("my first post", "content of my first post"),
    ("my second post", "content of my second post"),
];

/// Replace every stored post with the sample posts and return what is stored.
pub async fn seed_posts(posts: &dyn PostRepository) -> Result<Vec<Post>, RepoError> {
    tracing::info!("Starting data initialization...");

    let removed = posts.delete_all().await?;
    for (title, content) in SEED_POSTS {
        posts
            .insert(Post::new(Some(title.to_string()), Some(content.to_string())))
            .await?;
    }

    tracing::info!(removed, "Data initialization done");

    let seeded = posts.find_all().await?;
    for post in &seeded {
        tracing::info!(
            post_id = ?post.id,
            title = ?post.title,
            content = ?post.content,
            "Initialized post"
        );
    }

    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_infra::InMemoryPostRepository;

    #[actix_web::test]
    async fn test_seed_replaces_existing_posts() {
        let repo = InMemoryPostRepository::new();
        repo.insert(Post::new(Some("stale".into()), None))
            .await
            .unwrap();

        let seeded = seed_posts(&repo).await.unwrap();

        let titles: Vec<_> = seeded.iter().filter_map(|p| p.title.as_deref()).collect();
        assert_eq!(titles, vec!["my first post", "my second post"]);
        assert!(seeded.iter().all(|p| p.id.is_some()));
        assert_eq!(repo.find_all().await.unwrap(), seeded);
    }
}
