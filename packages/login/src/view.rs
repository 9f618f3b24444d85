//! What the form should show, derived from its state.
//!
//! Rendering layers only read a [`LoginView`]; every conditional branch of
//! the login screen is decided here.

use crate::form::LoginForm;
use crate::messages;
use crate::models::Field;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    /// Informational, e.g. the visitor needs to log in first.
    Notice,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldView {
    /// Style the input as invalid.
    pub invalid: bool,
    /// Text under the input.
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitView {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginView {
    /// Slot above the form. A form error takes it over from the
    /// session-required notice.
    pub banner: Option<Banner>,
    pub email: FieldView,
    pub password: FieldView,
    /// Shown below the submit control.
    pub credentials: Option<String>,
    pub submit: SubmitView,
}

impl LoginForm {
    pub fn view(&self) -> LoginView {
        let errors = self.errors();

        let banner = match (&errors.form, self.session_required()) {
            (Some(text), _) => Some(Banner {
                kind: BannerKind::Error,
                text: text.clone(),
            }),
            (None, true) => Some(Banner {
                kind: BannerKind::Notice,
                text: messages::SESSION_REQUIRED.to_string(),
            }),
            (None, false) => None,
        };

        let field = |field: Field| FieldView {
            invalid: errors.is_invalid(field),
            message: errors.message(field).map(str::to_string),
        };

        LoginView {
            banner,
            email: field(Field::Email),
            password: field(Field::Password),
            credentials: errors.credentials.clone(),
            submit: SubmitView {
                label: if self.is_loading() {
                    messages::SUBMIT_BUSY
                } else {
                    messages::SUBMIT_IDLE
                },
                disabled: self.is_loading(),
            },
        }
    }
}
