//! Validated login credentials
//!
//! Each field is a newtype that can only be built through its parser, so a
//! [`Credentials`] value is always submittable. All inputs are trimmed before
//! validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Address pattern used by the mobile client's email field.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$";

fn email_regex() -> Result<&'static Regex> {
    static EMAIL_REGEX: OnceLock<std::result::Result<Regex, String>> = OnceLock::new();
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| Error::InvalidConfig(format!("Invalid email pattern: {e}")))
}

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if email_regex()?.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::InvalidEmail)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Company subdomain on the time clock service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subdomain(String);

impl Subdomain {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::MissingSubdomain);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Subdomain {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Subdomain> for String {
    fn from(subdomain: Subdomain) -> Self {
        subdomain.0
    }
}

impl std::fmt::Display for Subdomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account password. Never printed and never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::MissingPassword);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Expose the secret for submission.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Everything needed to log in and punch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: Email,
    pub password: Password,
    pub subdomain: Subdomain,
}

impl Credentials {
    /// Validate raw form input.
    ///
    /// Fields are checked in the order the form presents its errors:
    /// email, then subdomain, then password.
    pub fn parse(email: &str, password: &str, subdomain: &str) -> Result<Self> {
        let email = Email::parse(email)?;
        let subdomain = Subdomain::parse(subdomain)?;
        let password = Password::parse(password)?;
        Ok(Self {
            email,
            password,
            subdomain,
        })
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_valid_emails() {
        for raw in [
            "user@example.com",
            "first.last+tag@sub.example.co",
            "  padded@example.org  ",
            "a_b%c-d@x-y.io",
        ] {
            assert!(Email::parse(raw).is_ok(), "{raw}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for raw in ["", "   ", "user", "user@", "@example.com", "user@example", "user@-bad.com", "us er@example.com"] {
            assert!(matches!(Email::parse(raw), Err(Error::InvalidEmail)), "{raw}");
        }
    }

    #[test]
    fn test_email_is_trimmed() -> Result<()> {
        assert_eq!(Email::parse(" me@example.com\n")?.as_str(), "me@example.com");
        Ok(())
    }

    #[test]
    fn test_subdomain_requires_data() {
        assert!(matches!(Subdomain::parse(""), Err(Error::MissingSubdomain)));
        assert!(matches!(Subdomain::parse(" \t"), Err(Error::MissingSubdomain)));
        assert!(Subdomain::parse("acme").is_ok());
    }

    #[test]
    fn test_password_requires_data_and_is_redacted() -> Result<()> {
        assert!(matches!(Password::parse(""), Err(Error::MissingPassword)));
        let password = Password::parse(" hunter2 ")?;
        assert_eq!(password.expose(), "hunter2");
        assert_eq!(format!("{password:?}"), "Password(***)");
        Ok(())
    }

    #[test]
    fn test_credentials_check_order() {
        assert!(matches!(
            Credentials::parse("bad", "", ""),
            Err(Error::InvalidEmail)
        ));
        assert!(matches!(
            Credentials::parse("me@example.com", "", ""),
            Err(Error::MissingSubdomain)
        ));
        assert!(matches!(
            Credentials::parse("me@example.com", "", "acme"),
            Err(Error::MissingPassword)
        ));
    }

    #[test]
    fn test_credentials_debug_hides_password() -> Result<()> {
        let creds = Credentials::parse("me@example.com", "secret", "acme")?;
        assert!(!format!("{creds:?}").contains("secret"));
        Ok(())
    }

    #[test]
    fn test_email_serde_validates() {
        let ok: std::result::Result<Email, _> = serde_json::from_str("\"me@example.com\"");
        assert!(ok.is_ok());
        let bad: std::result::Result<Email, _> = serde_json::from_str("\"nope\"");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_simple_addresses_are_valid(
            local in "[a-z0-9]{1,20}",
            domain in "[a-z0-9]{1,20}",
            tld in "[a-z]{2,6}",
        ) {
            let raw = format!("{local}@{domain}.{tld}");
            prop_assert!(Email::parse(&raw).is_ok());
        }

        #[test]
        fn prop_no_at_sign_is_invalid(raw in "[a-zA-Z0-9.]{0,40}") {
            prop_assert!(Email::parse(&raw).is_err());
        }

        #[test]
        fn prop_whitespace_only_subdomain_is_missing(raw in "[ \t\n]{0,10}") {
            prop_assert!(matches!(Subdomain::parse(&raw), Err(Error::MissingSubdomain)));
        }
    }
}
