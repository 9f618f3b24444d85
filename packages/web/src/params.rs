//! Query segment of the `/login` route.

use std::fmt::{self, Display};

use login::LoginQuery;

/// `?error=…&callbackUrl=…` as carried by [`crate::Route::Login`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginParams(pub LoginQuery);

impl From<&str> for LoginParams {
    fn from(query: &str) -> Self {
        Self(LoginQuery::parse(query))
    }
}

impl Display for LoginParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_query_string())
    }
}

impl LoginParams {
    /// Params for bouncing an anonymous visitor of `callback_url`.
    pub fn session_required(callback_url: &str) -> Self {
        Self(LoginQuery::session_required(callback_url))
    }
}
