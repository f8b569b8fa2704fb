//! Error types for clockwiz-core

use thiserror::Error;

/// Core error type for clockwiz operations
#[derive(Debug, Error)]
pub enum Error {
    /// Email failed the address pattern
    #[error("You entered invalid email")]
    InvalidEmail,

    /// Subdomain was empty after trimming
    #[error("Subdomain field must contain data")]
    MissingSubdomain,

    /// Password was empty after trimming
    #[error("Password field must contain data")]
    MissingPassword,

    /// Input did not name a timer command
    #[error("Unknown command '{0}'. Expected one of: clock-in, clock-out")]
    UnknownCommand(String),

    /// Configuration value out of range or malformed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Filesystem errors
    #[error("IO error: {0}")]
    Io(String),

    /// TOML or JSON (de)serialization errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// The service could not be reached at all
    #[error("Please check your internet connection. Turn on Wi-Fi or mobile network.")]
    Network(String),

    /// The login page answered with a non-success status
    #[error(
        "Authorization unsuccessful. Check your credentials and internet connection please. {0}"
    )]
    LoginPage(String),

    /// The login page set no cookies, so there is no session to post into
    #[error(
        "Authorization unsuccessful. Check your credentials and internet connection please. No session cookies received"
    )]
    NoSession,

    /// Any other transport failure
    #[error("HTTP error: {0}")]
    Http(String),
}

impl Error {
    /// True for errors caused by user input rather than the environment.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail | Self::MissingSubdomain | Self::MissingPassword | Self::UnknownCommand(_)
        )
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Network(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Result type alias for clockwiz-core operations
pub type Result<T> = std::result::Result<T, Error>;
