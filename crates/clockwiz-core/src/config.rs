//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: `<config_dir>/clockwiz/config.toml`
//! 3. Environment variables: `CLOCKWIZ_*`
//! 4. CLI flags (passed in as a [`PartialConfig`])
//!
//! # Example Config
//!
//! ```toml
//! base_url = "https://apps.timeclockwizard.com"
//! user_agent = "clockwiz/0.1.0"
//! timeout_secs = 30
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://apps.timeclockwizard.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 300;

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Scheme and host of the time clock service
    pub base_url: String,
    /// `User-Agent` sent with every request
    pub user_agent: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("clockwiz/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Partial configuration with `Option<T>` fields for explicit-key merge semantics
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartialConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Merge partial config, only updating fields that are `Some(value)`
    pub fn merge(&mut self, partial: PartialConfig) {
        if let Some(base_url) = partial.base_url {
            self.base_url = base_url;
        }
        if let Some(user_agent) = partial.user_agent {
            self.user_agent = user_agent;
        }
        if let Some(timeout_secs) = partial.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
    }

    /// Apply `CLOCKWIZ_*` overrides read through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns error if an environment value cannot be parsed
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("CLOCKWIZ_BASE_URL") {
            self.base_url = value;
        }

        if let Some(value) = lookup("CLOCKWIZ_USER_AGENT") {
            self.user_agent = value;
        }

        if let Some(value) = lookup("CLOCKWIZ_TIMEOUT_SECS") {
            self.timeout_secs = value.parse().map_err(|e| {
                Error::InvalidConfig(format!("Invalid CLOCKWIZ_TIMEOUT_SECS value: {e}"))
            })?;
        }

        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any values are out of range or invalid
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidConfig(format!("base_url '{}': {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::InvalidConfig(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "user_agent must not be empty".to_string(),
            ));
        }

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(Error::InvalidConfig(format!(
                "timeout_secs must be 1-{MAX_TIMEOUT_SECS}"
            )));
        }

        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LOADING
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from defaults, the global file, the environment and
/// finally `overrides` (usually CLI flags).
///
/// # Errors
///
/// Returns error if:
/// - Config file is malformed TOML
/// - Config values fail validation
pub async fn load_config(overrides: PartialConfig) -> Result<Config> {
    let path = global_config_path().ok();
    load_config_from(path.as_deref(), |key| std::env::var(key).ok(), overrides).await
}

/// Load configuration with an explicit file path and environment lookup.
pub async fn load_config_from<F>(
    path: Option<&Path>,
    lookup: F,
    overrides: PartialConfig,
) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(path) = path {
        if path.exists() {
            let partial = load_toml_file(path).await?;
            config.merge(partial);
            tracing::debug!(path = %path.display(), "Loaded config file");
        }
    }

    config.apply_env(lookup)?;
    config.merge(overrides);
    config.validate()?;

    Ok(config)
}

/// Get path to global config file
pub fn global_config_path() -> Result<PathBuf> {
    directories::ProjectDirs::from("", "", "clockwiz")
        .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
        .ok_or_else(|| Error::Io("Failed to determine global config directory".to_string()))
}

async fn load_toml_file(path: &Path) -> Result<PartialConfig> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::Io(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content)
        .map_err(|e| Error::Parse(format!("Failed to parse config: {}: {e}", path.display())))
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
