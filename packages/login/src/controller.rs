//! # Submission controller
//!
//! Carries out the [`Command`]s produced by [`LoginForm::update`] against an
//! [`AuthProvider`] and a [`Navigator`].
//!
//! UI layers that keep the form inside their own reactive state call
//! [`attempt_sign_in`](crate::attempt_sign_in) and [`perform`] themselves.
//! [`LoginController`] bundles the three pieces for everything else: each
//! [`dispatch`](LoginController::dispatch) runs an event to completion,
//! including the provider call and its follow-up navigation.

use crate::form::{Command, FormEvent, LoginForm};
use crate::provider::{attempt_sign_in, AuthProvider, SignInOutcome};

/// Navigation facility. Both calls are fire-and-forget.
pub trait Navigator {
    fn push(&self, path: &str);
    fn refresh(&self);
}

/// Execute a navigation command. Returns `false` for commands that are not
/// navigation (sign-in calls are left to the caller).
pub fn perform<N: Navigator>(navigator: &N, command: &Command) -> bool {
    match command {
        Command::Navigate(path) => {
            tracing::debug!(%path, "navigating after login");
            navigator.push(path);
            true
        }
        Command::Refresh => {
            navigator.refresh();
            true
        }
        Command::SignIn { .. } => false,
    }
}

pub struct LoginController<P, N> {
    form: LoginForm,
    provider: P,
    navigator: N,
}

impl<P: AuthProvider, N: Navigator> LoginController<P, N> {
    pub fn new(form: LoginForm, provider: P, navigator: N) -> Self {
        Self {
            form,
            provider,
            navigator,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Apply `event` and run every command it leads to. The provider call is
    /// the only suspension point; `loading` is back to `false` when this
    /// returns, whatever the provider did, and also when the future is
    /// dropped while the call is pending.
    pub async fn dispatch(&mut self, event: FormEvent) {
        let mut pending = self.form.update(event);
        while !pending.is_empty() {
            let mut next = Vec::new();
            for command in pending {
                match command {
                    Command::SignIn { attempt, request } => {
                        let mut guard = InFlight {
                            form: &mut self.form,
                            attempt,
                            settled: false,
                        };
                        let outcome = attempt_sign_in(&self.provider, request).await;
                        next.extend(guard.settle(outcome));
                    }
                    other => {
                        perform(&self.navigator, &other);
                    }
                }
            }
            pending = next;
        }
    }
}

/// Abandons the attempt on drop unless its outcome was fed back.
struct InFlight<'a> {
    form: &'a mut LoginForm,
    attempt: u64,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(&mut self, outcome: SignInOutcome) -> Vec<Command> {
        self.settled = true;
        self.form.update(FormEvent::Completed {
            attempt: self.attempt,
            outcome,
        })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.form.abandon(self.attempt);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::config::LoginConfig;
    use crate::memory::{MemoryProvider, MemoryProviderError, NavigationEvent, RecordingNavigator};
    use crate::provider::{SignInRequest, SignInResponse};
    use crate::messages;
    use crate::models::{Field, FieldError};
    use crate::query::LoginQuery;

    fn controller(query: &str) -> LoginController<MemoryProvider, RecordingNavigator> {
        LoginController::new(
            LoginForm::new(LoginQuery::parse(query), &LoginConfig::default()),
            MemoryProvider::new().with_user("a@b.com", "secret"),
            RecordingNavigator::new(),
        )
    }

    async fn fill(controller: &mut LoginController<MemoryProvider, RecordingNavigator>, email: &str, password: &str) {
        controller.dispatch(FormEvent::EmailChanged(email.to_string())).await;
        controller.dispatch(FormEvent::PasswordChanged(password.to_string())).await;
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_provider() {
        let mut controller = controller("");
        controller.dispatch(FormEvent::Submit).await;
        assert!(controller.provider().requests().is_empty());
        assert!(controller.form().errors().has(Field::Email));
        assert!(controller.form().errors().has(Field::Password));
        assert!(controller.navigator().events().is_empty());
    }

    #[tokio::test]
    async fn test_credentials_rejected() {
        let mut controller = controller("");
        fill(&mut controller, "a@b.com", "wrong").await;
        controller.dispatch(FormEvent::Submit).await;

        let errors = controller.form().errors();
        assert_eq!(errors.credentials.as_deref(), Some(messages::INVALID_CREDENTIALS));
        assert_eq!(errors.email, Some(FieldError::Highlight));
        assert_eq!(errors.password, Some(FieldError::Highlight));
        assert!(!controller.form().is_loading());
        assert!(controller.navigator().events().is_empty());
    }

    #[tokio::test]
    async fn test_other_provider_error() {
        let mut controller = controller("");
        controller.provider().reject_next("OtherIssue");
        fill(&mut controller, "a@b.com", "secret").await;
        controller.dispatch(FormEvent::Submit).await;

        assert_eq!(controller.form().errors().fields(), vec![Field::Form]);
        assert!(!controller.form().is_loading());
    }

    #[tokio::test]
    async fn test_provider_failure_still_clears_loading() {
        let mut controller = controller("");
        controller.provider().fail_next("connection refused");
        fill(&mut controller, "a@b.com", "secret").await;
        controller.dispatch(FormEvent::Submit).await;

        assert_eq!(controller.form().errors().form.as_deref(), Some(messages::UNEXPECTED_ERROR));
        assert_eq!(controller.form().errors().fields(), vec![Field::Form]);
        assert!(!controller.form().is_loading());
    }

    #[tokio::test]
    async fn test_success_navigates_to_callback_then_refreshes() {
        let mut controller = controller("callbackUrl=%2Fstats");
        fill(&mut controller, "a@b.com", "secret").await;
        controller.dispatch(FormEvent::Submit).await;

        assert_eq!(
            controller.navigator().events(),
            vec![NavigationEvent::Push("/stats".to_string()), NavigationEvent::Refresh]
        );
        let requests = controller.provider().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].email, "a@b.com");
        assert!(!requests[0].redirect);
        assert!(controller.form().errors().is_empty());
    }

    #[tokio::test]
    async fn test_success_without_callback_goes_home() {
        let mut controller = controller("");
        fill(&mut controller, "a@b.com", "secret").await;
        controller.dispatch(FormEvent::Submit).await;

        assert_eq!(
            controller.navigator().events(),
            vec![NavigationEvent::Push("/home".to_string()), NavigationEvent::Refresh]
        );
    }

    #[tokio::test]
    async fn test_retry_after_credentials_error() {
        let mut controller = controller("");
        fill(&mut controller, "a@b.com", "wrong").await;
        controller.dispatch(FormEvent::Submit).await;
        controller.dispatch(FormEvent::PasswordChanged("secret".to_string())).await;
        assert!(controller.form().errors().credentials.is_none());
        assert_eq!(controller.form().errors().email, Some(FieldError::Highlight));

        controller.dispatch(FormEvent::Submit).await;
        assert_eq!(controller.provider().requests().len(), 2);
        assert_eq!(controller.navigator().events().len(), 2);
    }

    /// Provider whose calls never finish.
    #[derive(Default)]
    struct StalledProvider {
        calls: AtomicUsize,
    }

    impl AuthProvider for StalledProvider {
        type Error = MemoryProviderError;

        async fn sign_in(&self, _request: SignInRequest) -> Result<SignInResponse, Self::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    /// Poll one `dispatch` until it parks on the provider, then drop it.
    async fn cancel_dispatch(controller: &mut LoginController<StalledProvider, RecordingNavigator>, event: FormEvent) {
        tokio::select! {
            biased;
            _ = controller.dispatch(event) => panic!("stalled provider answered"),
            _ = std::future::ready(()) => {}
        }
    }

    #[tokio::test]
    async fn test_cancelled_dispatch_clears_loading() {
        let mut controller = LoginController::new(
            LoginForm::new(LoginQuery::default(), &LoginConfig::default()),
            StalledProvider::default(),
            RecordingNavigator::new(),
        );
        controller.dispatch(FormEvent::EmailChanged("a@b.com".to_string())).await;
        controller.dispatch(FormEvent::PasswordChanged("secret".to_string())).await;

        cancel_dispatch(&mut controller, FormEvent::Submit).await;
        assert_eq!(controller.provider().calls.load(Ordering::SeqCst), 1);
        assert!(!controller.form().is_loading());
        assert_eq!(controller.form().in_flight(), None);

        cancel_dispatch(&mut controller, FormEvent::Submit).await;
        assert_eq!(controller.provider().calls.load(Ordering::SeqCst), 2);
        assert!(!controller.form().is_loading());
        assert!(controller.navigator().events().is_empty());
    }

    #[test]
    fn test_perform_skips_sign_in() {
        let navigator = RecordingNavigator::new();
        let form = LoginForm::new(LoginQuery::default(), &LoginConfig::default());
        let command = Command::SignIn {
            attempt: 1,
            request: crate::SignInRequest::credentials(form.input()),
        };
        assert!(!perform(&navigator, &command));
        assert!(perform(&navigator, &Command::Refresh));
        assert_eq!(navigator.events(), vec![NavigationEvent::Refresh]);
    }
}
