//! HTTP client for the time clock service
//!
//! A punch is two requests:
//! 1. `GET /Login?subDomain=..` to obtain session and anti-forgery cookies.
//! 2. `POST /Login` with the quick clock-in form and those cookies.
//!
//! The service signals an accepted punch by setting cookies on the post
//! response; a 2xx response without cookies means the login was refused.

use std::time::Duration;

use reqwest::header::{COOKIE, SET_COOKIE};

use crate::{
    Config, Credentials, Error, LoginForm, PunchOutcome, Result, SessionCookies, Subdomain,
    TimerCommand,
};

/// Client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct ClockClient {
    http: reqwest::Client,
    base_url: String,
}

impl ClockClient {
    /// Build a client from validated configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn login_url(&self) -> String {
        format!("{}/Login", self.base_url)
    }

    /// Fetch the login page for `subdomain` and collect its cookies.
    pub async fn open_session(&self, subdomain: &Subdomain) -> Result<SessionCookies> {
        tracing::debug!(subdomain = %subdomain, "Requesting login page");

        let response = self
            .http
            .get(self.login_url())
            .query(&[("subDomain", subdomain.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Login page request failed");
            let reason = status.canonical_reason().unwrap_or_else(|| status.as_str());
            return Err(Error::LoginPage(reason.to_string()));
        }

        let cookies = SessionCookies::from_set_cookie(
            response
                .headers()
                .get_all(SET_COOKIE)
                .iter()
                .filter_map(|value| value.to_str().ok()),
        );

        if cookies.is_empty() {
            tracing::warn!("Login page set no cookies");
            return Err(Error::NoSession);
        }

        tracing::debug!(count = cookies.len(), "Received session cookies");
        Ok(cookies)
    }

    /// Post the punch form within an open session.
    pub async fn submit(
        &self,
        form: &LoginForm<'_>,
        cookies: &SessionCookies,
    ) -> Result<PunchOutcome> {
        tracing::debug!(command = form.command.form_value(), "Submitting punch");

        let response = self
            .http
            .post(self.login_url())
            .header(COOKIE, cookies.header_value())
            .multipart(form.to_multipart())
            .send()
            .await?;

        let status = response.status();
        let has_cookies = response.headers().get_all(SET_COOKIE).iter().next().is_some();

        let command = form.command;
        if status.is_success() && has_cookies {
            tracing::info!(command = command.form_value(), "Punch accepted");
            Ok(PunchOutcome::Accepted { command })
        } else {
            tracing::info!(%status, has_cookies, command = command.form_value(), "Punch rejected");
            Ok(PunchOutcome::Rejected { command })
        }
    }

    /// Open a session and submit `command` for `credentials`.
    pub async fn punch(
        &self,
        credentials: &Credentials,
        command: TimerCommand,
    ) -> Result<PunchOutcome> {
        let cookies = self.open_session(&credentials.subdomain).await?;

        let token = cookies.verification_token().unwrap_or_else(|| {
            tracing::warn!("No verification token cookie; submitting without one");
            ""
        });

        let form = LoginForm::new(credentials, command, token);
        self.submit(&form, &cookies).await
    }
}
