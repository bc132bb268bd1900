//! Configuration loading, validation, and management for Blogforge.
//!
//! Loads configuration from `~/.blogforge/config.toml` with environment
//! variable overrides for the API key. Validates all settings at startup.
//! The credential and gateway base URL are threaded explicitly from here into
//! the provider — nothing reads the environment at call sites.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.blogforge/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// API key for the completion gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible completion gateway
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model used for reference-material summaries (lighter)
    #[serde(default = "default_reference_model")]
    pub reference_model: String,

    /// Model used for code summaries and the final composition
    #[serde(default = "default_composer_model")]
    pub composer_model: String,

    /// Max tokens per per-link summary
    #[serde(default = "default_summary_max_tokens")]
    pub summary_max_tokens: u32,

    /// Max tokens for the finished post
    #[serde(default = "default_post_max_tokens")]
    pub post_max_tokens: u32,

    /// Deadline for one full generate run, in seconds
    #[serde(default = "default_generate_timeout_secs")]
    pub generate_timeout_secs: u64,

    /// Gateway (HTTP server) configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Reference-link fetcher configuration
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".into()
}
fn default_reference_model() -> String {
    "openai/gpt-4o-mini".into()
}
fn default_composer_model() -> String {
    "anthropic/claude-3.5-sonnet".into()
}
fn default_summary_max_tokens() -> u32 {
    500
}
fn default_post_max_tokens() -> u32 {
    2500
}
fn default_generate_timeout_secs() -> u64 {
    60
}

fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("reference_model", &self.reference_model)
            .field("composer_model", &self.composer_model)
            .field("summary_max_tokens", &self.summary_max_tokens)
            .field("post_max_tokens", &self.post_max_tokens)
            .field("generate_timeout_secs", &self.generate_timeout_secs)
            .field("gateway", &self.gateway)
            .field("fetcher", &self.fetcher)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    8080
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Timeout per reference fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_fetch_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    concat!("blogforge/", env!("CARGO_PKG_VERSION")).into()
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.blogforge/config.toml).
    ///
    /// Also checks environment variables for the API key:
    /// - `BLOGFORGE_API_KEY` (highest priority)
    /// - `OPENROUTER_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if config.api_key.is_none() {
            config.api_key = std::env::var("BLOGFORGE_API_KEY")
                .ok()
                .or_else(|| std::env::var("OPENROUTER_API_KEY").ok());
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".blogforge")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::ValidationError("base_url must not be empty".into()));
        }

        if self.summary_max_tokens == 0 || self.post_max_tokens == 0 {
            return Err(ConfigError::ValidationError(
                "summary_max_tokens and post_max_tokens must be > 0".into(),
            ));
        }

        if self.generate_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "generate_timeout_secs must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a default config TOML string (for the `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            reference_model: default_reference_model(),
            composer_model: default_composer_model(),
            summary_max_tokens: default_summary_max_tokens(),
            post_max_tokens: default_post_max_tokens(),
            generate_timeout_secs: default_generate_timeout_secs(),
            gateway: GatewayConfig::default(),
            fetcher: FetcherConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
