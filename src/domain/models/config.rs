//! Configuration model for docqa.
//!
//! All sections carry serde defaults so a partial YAML file or a handful of
//! `DOCQA_*` environment variables is enough to run. Validation lives in
//! `infrastructure::config::ConfigLoader`.

use serde::{Deserialize, Serialize};

use super::chunk::ChunkerConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Vector store connection and collection settings.
    #[serde(default)]
    pub weaviate: WeaviateConfig,

    /// Embedding provider settings.
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Answer synthesis (Gemini) settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Chunking settings.
    #[serde(default)]
    pub chunking: ChunkerConfig,

    /// Retrieval defaults; overridable per request.
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weaviate: WeaviateConfig::default(),
            embedding: EmbeddingConfig::default(),
            gemini: GeminiConfig::default(),
            chunking: ChunkerConfig::default(),
            retrieval: RetrievalConfig::default(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Weaviate connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WeaviateConfig {
    /// Base URL of the Weaviate instance (REST endpoint).
    #[serde(default = "default_weaviate_url")]
    pub url: String,

    /// API key; empty for unauthenticated local instances.
    #[serde(default)]
    pub api_key: String,

    /// Collection (class) name holding the embedded chunks.
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_weaviate_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_collection() -> String {
    "DemoCollection".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for WeaviateConfig {
    fn default() -> Self {
        Self {
            url: default_weaviate_url(),
            api_key: String::new(),
            collection: default_collection(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Embedding provider settings (OpenAI-compatible endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EmbeddingConfig {
    /// Provider backend: "openai" for an HTTP embeddings API, "hash" for
    /// the offline deterministic embedder.
    #[serde(default = "default_embedding_provider")]
    pub provider: String,

    /// Base URL of the embeddings API.
    #[serde(default = "default_embedding_url")]
    pub base_url: String,

    /// API key; empty for local servers.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier.
    #[serde(default = "default_embedding_model")]
    pub model: String,

    /// Expected vector dimensionality; must match the collection.
    #[serde(default = "default_dimension")]
    pub dimension: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_embedding_provider() -> String {
    "openai".to_string()
}

fn default_embedding_url() -> String {
    "http://localhost:8081/v1".to_string()
}

fn default_embedding_model() -> String {
    "all-MiniLM-L6-v2".to_string()
}

const fn default_dimension() -> usize {
    384
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: default_embedding_provider(),
            base_url: default_embedding_url(),
            api_key: String::new(),
            model: default_embedding_model(),
            dimension: default_dimension(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Gemini generation API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GeminiConfig {
    /// Base URL of the generative language API.
    #[serde(default = "default_gemini_url")]
    pub base_url: String,

    /// API key.
    #[serde(default)]
    pub api_key: String,

    /// Generation model identifier.
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Request timeout in seconds.
    #[serde(default = "default_gemini_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_gemini_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

const fn default_gemini_timeout_secs() -> u64 {
    120
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_gemini_url(),
            api_key: String::new(),
            model: default_gemini_model(),
            timeout_secs: default_gemini_timeout_secs(),
        }
    }
}

/// Retrieval defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RetrievalConfig {
    /// Maximum matches requested from the vector store.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Minimum similarity score; matches below are discarded.
    #[serde(default)]
    pub min_score: f32,
}

const fn default_top_k() -> usize {
    5
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_score: 0.0,
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json, pretty.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
