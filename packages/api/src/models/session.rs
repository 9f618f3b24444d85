//! # Session payloads
//!
//! The provider's `/session` endpoint answers `{}` for anonymous visitors and
//! otherwise:
//!
//! ```json
//! { "user": { "name": "Ada", "email": "ada@example.com", "image": null },
//!   "expires": "2026-11-17T10:00:00.000Z" }
//! ```
//!
//! [`Session`] mirrors that shape. Every user field is optional because the
//! provider only fills in what the account exposes; [`SessionUser::display_name`]
//! picks the best one for display.

use serde::{Deserialize, Serialize};

/// An authenticated session as reported by the provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Session {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub expires: Option<String>,
}

impl Session {
    /// `{}` and `null` both mean "nobody is logged in".
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// User information carried by a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl SessionUser {
    /// Get display name, falling back to email, then to a generic label.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Signed in")
    }
}

/// Body of `GET /csrf`.
#[derive(Debug, Deserialize)]
pub(crate) struct CsrfResponse {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

/// Body of the sign-in and sign-out endpoints when redirects are disabled.
#[derive(Debug, Deserialize)]
pub(crate) struct RedirectResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_anonymous() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_full_session() {
        let session: Session = serde_json::from_str(
            r#"{"user":{"name":null,"email":"ada@example.com","image":null},"expires":"2026-11-17T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert!(session.is_authenticated());
        let user = session.user.unwrap();
        assert_eq!(user.display_name(), "ada@example.com");
    }

    #[test]
    fn test_csrf_field_name() {
        let body: CsrfResponse = serde_json::from_str(r#"{"csrfToken":"abc"}"#).unwrap();
        assert_eq!(body.csrf_token, "abc");
    }
}
