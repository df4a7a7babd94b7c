//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;
use serde::Serialize;

/// Blog metadata served by `GET /info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogProperties {
    pub title: String,
    pub description: String,
    pub author: String,
}

impl Default for BlogProperties {
    fn default() -> Self {
        Self {
            title: "Nobody's Blog".to_string(),
            description: "Description of Nobody's Blog".to_string(),
            author: "Nobody".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub blog: BlogProperties,
    /// Replace all posts with the sample posts at startup.
    pub seed_data: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            min_connections: lookup("DB_MIN_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        });

        let defaults = BlogProperties::default();
        let blog = BlogProperties {
            title: lookup("BLOG_TITLE").unwrap_or(defaults.title),
            description: lookup("BLOG_DESCRIPTION").unwrap_or(defaults.description),
            author: lookup("BLOG_AUTHOR").unwrap_or(defaults.author),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            blog,
            seed_data: lookup("SEED_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.database.is_none());
        assert!(config.seed_data);
        assert_eq!(config.blog, BlogProperties::default());
        assert_eq!(config.blog.title, "Nobody's Blog");
        assert_eq!(config.blog.description, "Description of Nobody's Blog");
        assert_eq!(config.blog.author, "Nobody");
    }

    #[test]
    fn test_blog_overrides() {
        let config = config_from(&[("BLOG_TITLE", "Rust Notes"), ("BLOG_AUTHOR", "Ferris")]);

        assert_eq!(config.blog.title, "Rust Notes");
        assert_eq!(config.blog.author, "Ferris");
        assert_eq!(config.blog.description, "Description of Nobody's Blog");
    }

    #[test]
    fn test_database_and_port() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/blog"),
            ("DB_MAX_CONNECTIONS", "25"),
            ("PORT", "not-a-port"),
            ("SEED_DATA", "false"),
        ]);

        let database = config.database.unwrap();
        assert_eq!(database.url, "postgres://localhost/blog");
        assert_eq!(database.max_connections, 25);
        assert_eq!(database.min_connections, 1);
        assert_eq!(config.port, 8080);
        assert!(!config.seed_data);
    }
}
