//! Remembered form values
//!
//! The email and subdomain of the last punch are saved so the next run can
//! prefill them. The password is never written.
//!
//! # File
//!
//! `<config_dir>/clockwiz/settings.toml`:
//!
//! ```toml
//! email = "me@example.com"
//! subdomain = "acme"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const SETTINGS_FILE: &str = "settings.toml";

/// Saved form values. Missing keys read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub email: String,
    pub subdomain: String,
}

/// File-backed settings.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at an explicit path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the platform config directory.
    pub fn default_location() -> Result<Self> {
        directories::ProjectDirs::from("", "", "clockwiz")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE)))
            .ok_or_else(|| Error::Io("Failed to determine settings directory".to_string()))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read settings, treating a missing file as empty.
    pub async fn load(&self) -> Result<Settings> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No settings file, using empty settings");
                return Ok(Settings::default());
            }
            Err(e) => {
                return Err(Error::Io(format!(
                    "Failed to read settings {}: {e}",
                    self.path.display()
                )))
            }
        };

        toml::from_str(&content).map_err(|e| {
            Error::Parse(format!(
                "Failed to parse settings {}: {e}",
                self.path.display()
            ))
        })
    }

    /// Write settings, creating the parent directory when needed.
    pub async fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::Io(format!(
                    "Failed to create settings directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let content = toml::to_string(settings)
            .map_err(|e| Error::Parse(format!("Failed to serialize settings: {e}")))?;

        tokio::fs::write(&self.path, content).await.map_err(|e| {
            Error::Io(format!(
                "Failed to write settings {}: {e}",
                self.path.display()
            ))
        })?;

        tracing::debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }

    pub async fn save_email(&self, email: &str) -> Result<()> {
        let mut settings = self.load().await?;
        settings.email = email.to_string();
        self.save(&settings).await
    }

    pub async fn save_subdomain(&self, subdomain: &str) -> Result<()> {
        let mut settings = self.load().await?;
        settings.subdomain = subdomain.to_string();
        self.save(&settings).await
    }
}
