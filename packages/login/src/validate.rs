//! Local field validation, run before anything is sent to the provider.

use std::sync::LazyLock;

use regex::Regex;

use crate::messages;
use crate::models::{ErrorState, FieldError, FormInput};

/// `local@domain.tld`: no whitespace anywhere, exactly one `@`, and a dot
/// with at least one character on each side somewhere after it.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Map the current input to the errors it would produce.
/// An empty result means the input can be submitted.
pub fn validate(input: &FormInput) -> ErrorState {
    let mut errors = ErrorState::default();

    if input.email.is_empty() {
        errors.email = Some(FieldError::Message(messages::EMAIL_REQUIRED.to_string()));
    } else if !is_valid_email(&input.email) {
        errors.email = Some(FieldError::Message(messages::EMAIL_INVALID.to_string()));
    }

    if input.password.is_empty() {
        errors.password = Some(FieldError::Message(messages::PASSWORD_REQUIRED.to_string()));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_both_fields_empty() {
        let errors = validate(&FormInput::default());
        assert_eq!(errors.message(Field::Email), Some(messages::EMAIL_REQUIRED));
        assert_eq!(errors.message(Field::Password), Some(messages::PASSWORD_REQUIRED));
        assert!(errors.form.is_none());
        assert!(errors.credentials.is_none());
    }

    #[test]
    fn test_bad_email_format() {
        let errors = validate(&FormInput::new("bad-email", "x"));
        assert_eq!(errors.message(Field::Email), Some(messages::EMAIL_INVALID));
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_missing_password() {
        let errors = validate(&FormInput::new("a@b.com", ""));
        assert!(errors.email.is_none());
        assert_eq!(errors.message(Field::Password), Some(messages::PASSWORD_REQUIRED));
    }

    #[test]
    fn test_valid_input() {
        assert!(validate(&FormInput::new("a@b.com", "secret")).is_empty());
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
    }
}
