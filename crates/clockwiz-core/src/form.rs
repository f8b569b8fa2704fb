//! The quick clock-in login form

use reqwest::multipart;

use crate::{Credentials, TimerCommand};

/// Form posted to the login endpoint to punch in or out.
#[derive(Debug, Clone)]
pub struct LoginForm<'a> {
    pub credentials: &'a Credentials,
    pub command: TimerCommand,
    pub verification_token: &'a str,
}

impl<'a> LoginForm<'a> {
    #[must_use]
    pub const fn new(
        credentials: &'a Credentials,
        command: TimerCommand,
        verification_token: &'a str,
    ) -> Self {
        Self {
            credentials,
            command,
            verification_token,
        }
    }

    /// Form fields in submission order.
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("__RequestVerificationToken", self.verification_token.to_string()),
            ("Subdomain", self.credentials.subdomain.as_str().to_string()),
            ("ClientDetails.QuickClockInPassword", "True".to_string()),
            ("ClientDetails.QuickClockIn", "True".to_string()),
            ("UserName", self.credentials.email.as_str().to_string()),
            ("Password", self.credentials.password.expose().to_string()),
            ("command", self.command.form_value().to_string()),
        ]
    }

    /// Build the `multipart/form-data` body.
    #[must_use]
    pub fn to_multipart(&self) -> multipart::Form {
        self.fields()
            .into_iter()
            .fold(multipart::Form::new(), |form, (name, value)| {
                form.text(name, value)
            })
    }
}
