//! # Login form state machine
//!
//! [`LoginForm`] holds everything the form shows and [`LoginForm::update`] is
//! the only way to change it: it takes a [`FormEvent`], mutates the state and
//! returns the [`Command`]s the host must carry out (call the provider,
//! navigate, refresh). Nothing in here performs I/O, so the whole flow can be
//! driven from tests or from any rendering layer.
//!
//! ## Submission
//!
//! ```text
//! Idle --Submit--> Validating --errors--> Idle
//!                      |
//!                      +--valid--> Submitting --Completed--> Idle
//! ```
//!
//! While a submission is in flight (`loading`), further `Submit` events are
//! dropped, so at most one provider call exists at a time no matter how fast
//! the control is activated. Each submission gets an attempt number; a
//! `Completed` event for any other attempt is ignored.

use crate::config::LoginConfig;
use crate::messages;
use crate::models::{ErrorState, Field, FieldError, FormInput};
use crate::provider::{SignInOutcome, SignInRequest};
use crate::query::LoginQuery;
use crate::validate::validate;

/// Something that happened to the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Completed { attempt: u64, outcome: SignInOutcome },
}

/// Work the host must do on behalf of the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Call the provider, then report back with [`FormEvent::Completed`].
    SignIn { attempt: u64, request: SignInRequest },
    Navigate(String),
    /// Reload the data of the current route (session included).
    Refresh,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoginForm {
    input: FormInput,
    errors: ErrorState,
    loading: bool,
    query: LoginQuery,
    home: String,
    provider: String,
    attempts: u64,
    in_flight: Option<u64>,
}

impl LoginForm {
    pub fn new(query: LoginQuery, config: &LoginConfig) -> Self {
        Self {
            input: FormInput::default(),
            errors: ErrorState::default(),
            loading: false,
            query,
            home: config.routes.home.clone(),
            provider: config.auth.provider.clone(),
            attempts: 0,
            in_flight: None,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn query(&self) -> &LoginQuery {
        &self.query
    }

    pub fn session_required(&self) -> bool {
        self.query.is_session_required()
    }

    /// Attempt currently awaiting its result.
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn update(&mut self, event: FormEvent) -> Vec<Command> {
        match event {
            FormEvent::EmailChanged(email) => {
                self.input.email = email;
                self.errors.clear(Field::Email);
                self.errors.clear(Field::Credentials);
                Vec::new()
            }
            FormEvent::PasswordChanged(password) => {
                self.input.password = password;
                self.errors.clear(Field::Password);
                self.errors.clear(Field::Credentials);
                Vec::new()
            }
            FormEvent::Submit => self.submit(),
            FormEvent::Completed { attempt, outcome } => self.complete(attempt, outcome),
        }
    }

    /// Give up on `attempt` without an outcome, e.g. when the provider call
    /// was cancelled. Errors are left untouched; a stale attempt is ignored.
    pub fn abandon(&mut self, attempt: u64) {
        if self.in_flight != Some(attempt) {
            return;
        }
        tracing::debug!(attempt, "sign-in abandoned");
        self.in_flight = None;
        self.loading = false;
    }

    /// Replace the query the form reads its banner and callback from.
    pub fn set_query(&mut self, query: LoginQuery) {
        self.query = query;
    }

    fn submit(&mut self) -> Vec<Command> {
        if self.loading {
            tracing::debug!(attempt = ?self.in_flight, "submit ignored, sign-in already in flight");
            return Vec::new();
        }

        let errors = validate(&self.input);
        if !errors.is_empty() {
            tracing::debug!(fields = ?errors.fields(), "login form invalid");
            self.errors = errors;
            return Vec::new();
        }

        self.errors = ErrorState::default();
        self.loading = true;
        self.attempts += 1;
        self.in_flight = Some(self.attempts);

        let mut request = SignInRequest::credentials(&self.input).with_provider(self.provider.clone());
        if let Some(callback_url) = &self.query.callback_url {
            request = request.with_callback_url(callback_url.clone());
        }
        tracing::debug!(attempt = self.attempts, "submitting credentials");

        vec![Command::SignIn {
            attempt: self.attempts,
            request,
        }]
    }

    fn complete(&mut self, attempt: u64, outcome: SignInOutcome) -> Vec<Command> {
        if self.in_flight != Some(attempt) {
            tracing::debug!(attempt, in_flight = ?self.in_flight, "stale sign-in result dropped");
            return Vec::new();
        }
        self.in_flight = None;
        self.loading = false;

        match outcome {
            SignInOutcome::Success => {
                let destination = self.query.callback_or(&self.home).to_string();
                vec![Command::Navigate(destination), Command::Refresh]
            }
            ref rejected @ SignInOutcome::Rejected(_) if rejected.is_credentials_error() => {
                self.errors = ErrorState {
                    credentials: Some(messages::INVALID_CREDENTIALS.to_string()),
                    email: Some(FieldError::Highlight),
                    password: Some(FieldError::Highlight),
                    form: None,
                };
                Vec::new()
            }
            SignInOutcome::Rejected(_) => {
                self.errors = ErrorState {
                    form: Some(messages::SOMETHING_WENT_WRONG.to_string()),
                    ..Default::default()
                };
                Vec::new()
            }
            SignInOutcome::Failed(_) => {
                self.errors = ErrorState {
                    form: Some(messages::UNEXPECTED_ERROR.to_string()),
                    ..Default::default()
                };
                Vec::new()
            }
        }
    }
}
