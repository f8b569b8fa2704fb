//! Settings command implementation
//!
//! Shows and edits the remembered email and subdomain.

use anyhow::{Context, Result};
use clockwiz_core::{Email, Settings, SettingsStore, Subdomain};
use serde::Serialize;

use crate::output::{self, OutputMode};

/// Settings command options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    Show,
    SetEmail(String),
    SetSubdomain(String),
}

#[derive(Debug, Serialize)]
struct SettingsReport<'a> {
    path: String,
    #[serde(flatten)]
    settings: &'a Settings,
}

fn render_text(settings: &Settings) -> String {
    let show = |value: &str| {
        if value.is_empty() {
            "(not set)".to_string()
        } else {
            value.to_string()
        }
    };
    format!(
        "email:     {}\nsubdomain: {}",
        show(&settings.email),
        show(&settings.subdomain)
    )
}

/// Run the settings command
///
/// # Errors
///
/// Returns an error if:
/// - The new value fails validation
/// - The settings file cannot be read or written
pub async fn run(action: &SettingsAction, store: &SettingsStore, mode: OutputMode) -> Result<()> {
    match action {
        SettingsAction::Show => {}
        SettingsAction::SetEmail(raw) => {
            let email = Email::parse(raw)?;
            store
                .save_email(email.as_str())
                .await
                .context("Failed to save email")?;
        }
        SettingsAction::SetSubdomain(raw) => {
            let subdomain = Subdomain::parse(raw)?;
            store
                .save_subdomain(subdomain.as_str())
                .await
                .context("Failed to save subdomain")?;
        }
    }

    let settings = store.load().await.context("Failed to load settings")?;
    let report = SettingsReport {
        path: store.path().display().to_string(),
        settings: &settings,
    };
    output::emit(mode, &report, || render_text(&settings))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_render_text_marks_missing_values() {
        let text = render_text(&Settings {
            email: "me@example.com".to_string(),
            subdomain: String::new(),
        });
        assert!(text.contains("email:     me@example.com"));
        assert!(text.contains("subdomain: (not set)"));
    }

    #[tokio::test]
    async fn test_set_values_are_trimmed_and_saved() -> Result<()> {
        let dir = TempDir::new()?;
        let store = SettingsStore::new(dir.path().join("settings.toml"));

        run(
            &SettingsAction::SetEmail(" me@example.com ".to_string()),
            &store,
            OutputMode::Json,
        )
        .await?;
        run(
            &SettingsAction::SetSubdomain("acme\n".to_string()),
            &store,
            OutputMode::Json,
        )
        .await?;

        let settings = store.load().await?;
        assert_eq!(settings.email, "me@example.com");
        assert_eq!(settings.subdomain, "acme");
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_email_is_not_saved() -> Result<()> {
        let dir = TempDir::new()?;
        let store = SettingsStore::new(dir.path().join("settings.toml"));

        let result = run(
            &SettingsAction::SetEmail("not-an-email".to_string()),
            &store,
            OutputMode::Text,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(store.load().await?.email, "");
        Ok(())
    }
}
