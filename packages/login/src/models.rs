//! # Form models: input values and per-field errors
//!
//! Defines the transient data the login form works on. Nothing here is
//! persisted: a fresh [`FormInput`] and an empty [`ErrorState`] are created
//! every time the form is mounted.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`FormInput`] | The email/password pair typed by the user. |
//! | [`Field`] | The four error slots: `email`, `password`, `form`, `credentials`. |
//! | [`FieldError`] | An input-field error: either a message rendered under the field, or a bare highlight. |
//! | [`ErrorState`] | The current set of errors. A slot is `Some` only while that field is in error. |
//!
//! A credentials failure marks both inputs as invalid without repeating the
//! message under each of them; that is what [`FieldError::Highlight`] is for.

/// Values currently held by the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub email: String,
    pub password: String,
}

impl FormInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Error slots tracked by [`ErrorState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
    Form,
    Credentials,
}

/// Error attached to an input field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Shown as text under the input, and styles the input as invalid.
    Message(String),
    /// Styles the input as invalid without any text.
    Highlight,
}

impl FieldError {
    pub fn message(&self) -> Option<&str> {
        match self {
            FieldError::Message(text) => Some(text.as_str()),
            FieldError::Highlight => None,
        }
    }
}

/// Errors from the last validation or submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub form: Option<String>,
    pub credentials: Option<String>,
}

impl ErrorState {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.form.is_none()
            && self.credentials.is_none()
    }

    /// Whether `field` currently has an entry.
    pub fn has(&self, field: Field) -> bool {
        match field {
            Field::Email => self.email.is_some(),
            Field::Password => self.password.is_some(),
            Field::Form => self.form.is_some(),
            Field::Credentials => self.credentials.is_some(),
        }
    }

    /// Text to render for `field`, if any. Highlights have no text.
    pub fn message(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_ref().and_then(FieldError::message),
            Field::Password => self.password.as_ref().and_then(FieldError::message),
            Field::Form => self.form.as_deref(),
            Field::Credentials => self.credentials.as_deref(),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = None,
            Field::Password => self.password = None,
            Field::Form => self.form = None,
            Field::Credentials => self.credentials = None,
        }
    }

    /// An input renders as invalid when it has its own error or when the
    /// credentials were rejected.
    pub fn is_invalid(&self, field: Field) -> bool {
        self.has(field) || self.credentials.is_some()
    }

    /// Fields that currently have an entry, in display order.
    pub fn fields(&self) -> Vec<Field> {
        [Field::Email, Field::Password, Field::Form, Field::Credentials]
            .into_iter()
            .filter(|field| self.has(*field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let errors = ErrorState::default();
        assert!(errors.is_empty());
        assert!(errors.fields().is_empty());
        assert!(!errors.is_invalid(Field::Email));
    }

    #[test]
    fn test_highlight_has_no_message() {
        let errors = ErrorState {
            email: Some(FieldError::Highlight),
            ..Default::default()
        };
        assert!(errors.has(Field::Email));
        assert!(errors.is_invalid(Field::Email));
        assert_eq!(errors.message(Field::Email), None);
    }

    #[test]
    fn test_credentials_marks_both_inputs_invalid() {
        let errors = ErrorState {
            credentials: Some("bad".to_string()),
            ..Default::default()
        };
        assert!(errors.is_invalid(Field::Email));
        assert!(errors.is_invalid(Field::Password));
        assert!(!errors.has(Field::Email));
    }

    #[test]
    fn test_clear_only_touches_one_slot() {
        let mut errors = ErrorState {
            email: Some(FieldError::Message("x".to_string())),
            form: Some("y".to_string()),
            ..Default::default()
        };
        errors.clear(Field::Email);
        assert_eq!(errors.fields(), vec![Field::Form]);
    }
}
