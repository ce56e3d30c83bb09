use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid chunking config: {0}")]
    InvalidChunking(String),

    #[error("Invalid top_k: {0}. Must be at least 1")]
    InvalidTopK(usize),

    #[error("Invalid min_score: {0}. Must be within [0.0, 1.0]")]
    InvalidMinScore(f32),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Collection name cannot be empty")]
    EmptyCollection,

    #[error("Embedding dimension cannot be zero")]
    ZeroDimension,

    #[error("Unknown embedding provider: {0}. Must be one of: openai, hash")]
    UnknownEmbeddingProvider(String),
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. `docqa.yaml` in the working directory
    /// 3. Environment variables (`DOCQA_` prefix, `__` nesting, highest
    ///    priority — e.g. `DOCQA_WEAVIATE__URL`)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("docqa.yaml"))
            .merge(Env::prefixed("DOCQA_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        config
            .chunking
            .validate()
            .map_err(ConfigError::InvalidChunking)?;

        if config.retrieval.top_k == 0 {
            return Err(ConfigError::InvalidTopK(config.retrieval.top_k));
        }

        if !(0.0..=1.0).contains(&config.retrieval.min_score) {
            return Err(ConfigError::InvalidMinScore(config.retrieval.min_score));
        }

        if config.weaviate.collection.is_empty() {
            return Err(ConfigError::EmptyCollection);
        }

        if config.embedding.dimension == 0 {
            return Err(ConfigError::ZeroDimension);
        }

        if !["openai", "hash"].contains(&config.embedding.provider.as_str()) {
            return Err(ConfigError::UnknownEmbeddingProvider(
                config.embedding.provider.clone(),
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_validates() {
        let config = Config::default();
        assert!(ConfigLoader::validate(&config).is_ok());
    }

    #[test]
    fn zero_top_k_rejected() {
        let mut config = Config::default();
        config.retrieval.top_k = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidTopK(0))
        ));
    }

    #[test]
    fn out_of_range_min_score_rejected() {
        let mut config = Config::default();
        config.retrieval.min_score = 1.5;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidMinScore(_))
        ));
    }

    #[test]
    fn bad_log_level_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn overlap_not_below_size_rejected() {
        let mut config = Config::default();
        config.chunking.chunk_overlap = config.chunking.chunk_size;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidChunking(_))
        ));
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "weaviate:\n  collection: HandbookChunks\nretrieval:\n  top_k: 3"
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(file.path()).unwrap();
        assert_eq!(config.weaviate.collection, "HandbookChunks");
        assert_eq!(config.retrieval.top_k, 3);
        // Untouched sections keep their defaults.
        assert_eq!(config.chunking.chunk_size, 1500);
    }
}
