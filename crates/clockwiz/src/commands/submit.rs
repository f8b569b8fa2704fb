//! Submit command implementation
//!
//! Validates the form, remembers email and subdomain, then punches in or out.

use anyhow::{Context, Result};
use clockwiz_core::{ClockClient, Config, Credentials, PunchOutcome, Settings, SettingsStore, TimerCommand};
use serde::Serialize;

/// Submit command options
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// Punch to submit
    pub command: TimerCommand,
    /// Email, falling back to the saved one
    pub email: Option<String>,
    /// Subdomain, falling back to the saved one
    pub subdomain: Option<String>,
    /// Password; empty when not supplied
    pub password: Option<String>,
}

/// What `submit` reports on stdout.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmitReport {
    /// False when the service refused the punch
    pub success: bool,
    pub command: TimerCommand,
    pub label: &'static str,
    pub message: String,
}

impl From<PunchOutcome> for SubmitReport {
    fn from(outcome: PunchOutcome) -> Self {
        let command = outcome.command();
        Self {
            success: outcome.is_accepted(),
            command,
            label: command.label(),
            message: outcome.message(),
        }
    }
}

/// Validate the form fields against the saved settings.
///
/// # Errors
///
/// Returns the first validation failure in form order.
pub fn resolve_credentials(options: &SubmitOptions, saved: &Settings) -> Result<Credentials> {
    let email = options.email.as_deref().unwrap_or(&saved.email);
    let subdomain = options.subdomain.as_deref().unwrap_or(&saved.subdomain);
    let password = options.password.as_deref().unwrap_or_default();

    Ok(Credentials::parse(email, password, subdomain)?)
}

/// Run the submit command
///
/// # Errors
///
/// Returns an error if:
/// - Email, subdomain or password fail validation
/// - Settings cannot be written
/// - The service cannot be reached or refuses the login page
pub async fn run(
    options: &SubmitOptions,
    store: &SettingsStore,
    config: &Config,
) -> Result<PunchOutcome> {
    let saved = store.load().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring unreadable settings");
        Settings::default()
    });

    let credentials = resolve_credentials(options, &saved)?;

    store
        .save(&Settings {
            email: credentials.email.to_string(),
            subdomain: credentials.subdomain.to_string(),
        })
        .await
        .context("Failed to save settings")?;

    let client = ClockClient::new(config)?;
    let outcome = client.punch(&credentials, options.command).await?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use clockwiz_core::Error;
    use tempfile::TempDir;

    use super::*;

    fn saved() -> Settings {
        Settings {
            email: "saved@example.com".to_string(),
            subdomain: "saved-co".to_string(),
        }
    }

    #[test]
    fn test_flags_override_saved_values() -> Result<()> {
        let options = SubmitOptions {
            email: Some("flag@example.com".to_string()),
            password: Some("pw".to_string()),
            ..SubmitOptions::default()
        };
        let creds = resolve_credentials(&options, &saved())?;
        assert_eq!(creds.email.as_str(), "flag@example.com");
        assert_eq!(creds.subdomain.as_str(), "saved-co");
        Ok(())
    }

    #[test]
    fn test_missing_password_is_reported() {
        let options = SubmitOptions::default();
        let err = resolve_credentials(&options, &saved()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingPassword)
        ));
    }

    #[test]
    fn test_empty_saved_email_is_invalid() {
        let options = SubmitOptions {
            password: Some("pw".to_string()),
            ..SubmitOptions::default()
        };
        let err = resolve_credentials(&options, &Settings::default()).unwrap_err();
        assert_eq!(err.to_string(), "You entered invalid email");
    }

    #[test]
    fn test_report_from_outcome() {
        let report = SubmitReport::from(PunchOutcome::Accepted {
            command: TimerCommand::ClockIn,
        });
        assert!(report.success);
        assert_eq!(report.label, "Clock in");
        assert_eq!(report.message, "You have been successfully clocked in");
    }

    #[test]
    fn test_report_from_rejection() {
        let report = SubmitReport::from(PunchOutcome::Rejected {
            command: TimerCommand::ClockOut,
        });
        assert!(!report.success);
        assert_eq!(report.label, "Clock out");
        assert_eq!(
            report.message,
            "Authorization unsuccessful. Check your credentials, please."
        );
    }

    #[tokio::test]
    async fn test_validation_failure_saves_nothing() -> Result<()> {
        let dir = TempDir::new()?;
        let store = SettingsStore::new(dir.path().join("settings.toml"));
        let options = SubmitOptions {
            email: Some("me@example.com".to_string()),
            subdomain: Some("acme".to_string()),
            ..SubmitOptions::default()
        };

        let result = run(&options, &store, &Config::default()).await;
        assert!(result.is_err());
        assert_eq!(store.load().await?, Settings::default());
        Ok(())
    }
}
