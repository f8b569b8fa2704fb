//! Session cookies returned by the login page
//!
//! The login page hands out a session cookie and an anti-forgery cookie.
//! Both are echoed back on the form post; the anti-forgery value is also
//! sent as a form field.

/// Name fragment identifying the anti-forgery cookie.
pub const VERIFICATION_COOKIE: &str = "__RequestVerificationToken";

/// Cookies collected from a login page response, ready for a `Cookie` header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    header: String,
}

impl SessionCookies {
    /// Build from raw `Set-Cookie` header values.
    ///
    /// Only the leading `name=value` pair of each header is kept; attributes
    /// such as `Path` or `HttpOnly` are dropped.
    pub fn from_set_cookie<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let header = values
            .into_iter()
            .filter_map(|value| {
                value
                    .as_ref()
                    .split(';')
                    .next()
                    .map(str::trim)
                    .filter(|pair| !pair.is_empty())
                    .map(str::to_string)
            })
            .collect::<Vec<_>>()
            .join("; ");
        Self { header }
    }

    /// Value for the `Cookie` request header.
    #[must_use]
    pub fn header_value(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Number of cookies held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs().count()
    }

    fn pairs(&self) -> impl Iterator<Item = &str> {
        self.header
            .split(';')
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
    }

    /// The anti-forgery token, if the login page set one.
    ///
    /// The value is everything after the first `=`, so base64 padding
    /// survives intact.
    #[must_use]
    pub fn verification_token(&self) -> Option<&str> {
        self.pairs()
            .find(|pair| pair.contains(VERIFICATION_COOKIE))
            .and_then(|pair| pair.split_once('='))
            .map(|(_, value)| value.trim())
    }
}
