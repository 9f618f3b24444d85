//! Query parameters the login route is opened with.
//!
//! The form never reads the browser location itself. The host parses the
//! query string once and hands a [`LoginQuery`] to [`crate::LoginForm::new`].

use url::form_urlencoded;

/// Value of `error` set by routes that bounced an anonymous visitor here.
pub const SESSION_REQUIRED: &str = "SessionRequired";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginQuery {
    /// `error` parameter.
    pub error: Option<String>,
    /// `callbackUrl` parameter: where to go after a successful login.
    pub callback_url: Option<String>,
}

impl LoginQuery {
    /// Parse a raw query string, with or without the leading `?`.
    /// Unknown keys are ignored; the first occurrence of a key wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "error" if parsed.error.is_none() => parsed.error = Some(value.into_owned()),
                "callbackUrl" if parsed.callback_url.is_none() => {
                    parsed.callback_url = Some(value.into_owned())
                }
                _ => {}
            }
        }
        parsed
    }

    /// Build the query used when redirecting an anonymous visitor to login.
    pub fn session_required(callback_url: impl Into<String>) -> Self {
        Self {
            error: Some(SESSION_REQUIRED.to_string()),
            callback_url: Some(callback_url.into()),
        }
    }

    /// Whether the visitor was sent here because a session was missing.
    pub fn is_session_required(&self) -> bool {
        self.error.as_deref() == Some(SESSION_REQUIRED)
    }

    /// Destination after login: the callback URL, or `home` when it is
    /// absent or empty.
    pub fn callback_or<'a>(&'a self, home: &'a str) -> &'a str {
        match self.callback_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => home,
        }
    }

    /// Encode back into a query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(error) = &self.error {
            serializer.append_pair("error", error);
        }
        if let Some(callback_url) = &self.callback_url {
            serializer.append_pair("callbackUrl", callback_url);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_parameters() {
        let query = LoginQuery::parse("?error=SessionRequired&callbackUrl=%2Fhome%2Fstats");
        assert!(query.is_session_required());
        assert_eq!(query.callback_url.as_deref(), Some("/home/stats"));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let query = LoginQuery::parse("foo=bar&error=Other");
        assert_eq!(query.error.as_deref(), Some("Other"));
        assert!(!query.is_session_required());
        assert!(query.callback_url.is_none());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(LoginQuery::parse(""), LoginQuery::default());
    }

    #[test]
    fn test_callback_falls_back_to_home() {
        assert_eq!(LoginQuery::default().callback_or("/home"), "/home");
        assert_eq!(LoginQuery::parse("callbackUrl=").callback_or("/home"), "/home");
        assert_eq!(LoginQuery::parse("callbackUrl=/stats").callback_or("/home"), "/stats");
    }

    #[test]
    fn test_session_required_query_string() {
        let query = LoginQuery::session_required("/home");
        assert_eq!(query.to_query_string(), "error=SessionRequired&callbackUrl=%2Fhome");
        assert_eq!(LoginQuery::parse(&query.to_query_string()), query);
    }
}
