//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/blog.db";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DATABASE_URL is empty")]
    EmptyDatabaseUrl,

    #[error("unsupported DATABASE_URL scheme: {0}")]
    UnsupportedScheme(String),
}

/// Where the blog post store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    Memory,
    File(PathBuf),
}

impl DatabaseUrl {
    /// Accepts a bare path, `sqlite://<path>`, `sqlite::memory:` or `:memory:`.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::EmptyDatabaseUrl);
        }
        if raw == ":memory:" || raw == "sqlite::memory:" {
            return Ok(DatabaseUrl::Memory);
        }
        if let Some(path) = raw.strip_prefix("sqlite://") {
            if path.is_empty() {
                return Err(ConfigError::EmptyDatabaseUrl);
            }
            return Ok(DatabaseUrl::File(PathBuf::from(path)));
        }
        if let Some((scheme, _)) = raw.split_once("://") {
            return Err(ConfigError::UnsupportedScheme(scheme.to_string()));
        }
        Ok(DatabaseUrl::File(PathBuf::from(raw)))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: DatabaseUrl,
    /// Enable JSON logging (for production).
    pub json_logs: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        Ok(Self {
            database_url: DatabaseUrl::parse(&raw_url)?,
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_memory_forms() {
        assert_eq!(DatabaseUrl::parse(":memory:"), Ok(DatabaseUrl::Memory));
        assert_eq!(DatabaseUrl::parse("sqlite::memory:"), Ok(DatabaseUrl::Memory));
    }

    #[test]
    fn parses_file_forms() {
        assert_eq!(
            DatabaseUrl::parse("sqlite://data/blog.db"),
            Ok(DatabaseUrl::File(PathBuf::from("data/blog.db")))
        );
        assert_eq!(
            DatabaseUrl::parse("/var/lib/blog.db"),
            Ok(DatabaseUrl::File(PathBuf::from("/var/lib/blog.db")))
        );
    }

    #[test]
    fn rejects_other_schemes() {
        assert_eq!(
            DatabaseUrl::parse("mongodb://localhost/blog"),
            Err(ConfigError::UnsupportedScheme("mongodb".to_string()))
        );
        assert_eq!(DatabaseUrl::parse("  "), Err(ConfigError::EmptyDatabaseUrl));
        assert_eq!(DatabaseUrl::parse("sqlite://"), Err(ConfigError::EmptyDatabaseUrl));
    }
}
