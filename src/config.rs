//! Runtime configuration
//!
//! Resolved from environment variables, falling back to paths relative to the
//! project root.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::planner::PlannerSeed;

/// Environment variable naming the seed file
pub const SEED_PATH_ENV: &str = "GROCER_SEED_PATH";

/// Default tracing directive when RUST_LOG is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "grocer=info";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the seed file path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Set explicitly; it must exist and parse
    Explicit,
    /// Default location; skipped if missing
    Default,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub seed_path: PathBuf,
    pub seed_source: SeedSource,
}

impl ServerConfig {
    /// Resolve configuration from the environment
    pub fn from_env() -> Self {
        match std::env::var(SEED_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self {
                seed_path: PathBuf::from(path),
                seed_source: SeedSource::Explicit,
            },
            _ => Self {
                seed_path: default_seed_path(),
                seed_source: SeedSource::Default,
            },
        }
    }

    /// Configuration pointing at an explicit seed file
    pub fn with_seed_path(path: impl Into<PathBuf>) -> Self {
        Self {
            seed_path: path.into(),
            seed_source: SeedSource::Explicit,
        }
    }

    /// Load the seed file, if any
    ///
    /// A missing file at the default location yields None. An explicitly
    /// configured file must exist and parse.
    pub fn load_seed(&self) -> Result<Option<PlannerSeed>, ConfigError> {
        if self.seed_source == SeedSource::Default && !self.seed_path.exists() {
            tracing::debug!(path = %self.seed_path.display(), "No seed file at default location");
            return Ok(None);
        }
        load_seed_file(&self.seed_path).map(Some)
    }
}

/// Read and parse a seed file
pub fn load_seed_file(path: &Path) -> Result<PlannerSeed, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "Could not read seed file");
        ConfigError::Io { path: path.to_path_buf(), source }
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Project root: the executable's directory, stepping out of target/{debug,release}
pub fn project_root() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path
}

/// Default seed file location: <project root>/data/seed.json
pub fn default_seed_path() -> PathBuf {
    let mut path = project_root();
    path.push("data");
    path.push("seed.json");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("grocer-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_missing_seed_is_none() {
        let config = ServerConfig {
            seed_path: PathBuf::from("/nonexistent/grocer/seed.json"),
            seed_source: SeedSource::Default,
        };
        assert!(config.load_seed().unwrap().is_none());
    }

    #[test]
    fn test_explicit_missing_seed_is_error() {
        let config = ServerConfig::with_seed_path("/nonexistent/grocer/seed.json");
        assert!(matches!(config.load_seed(), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_seed_file() {
        let path = temp_file(
            "seed.json",
            r#"{"recipes": [{"name": "Tea", "ingredients": [{"item": "tea", "quantity": "2", "unit": "teaspoon"}]}]}"#,
        );
        let seed = ServerConfig::with_seed_path(&path).load_seed().unwrap().unwrap();
        assert_eq!(seed.recipes.len(), 1);
        assert!(seed.meals.is_empty());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_malformed_seed_is_error() {
        let path = temp_file("bad.json", "{ not json");
        let result = load_seed_file(&path);
        assert!(matches!(result, Err(ConfigError::Json { .. })));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_default_seed_path_layout() {
        let path = default_seed_path();
        assert!(path.ends_with("data/seed.json"));
    }
}
