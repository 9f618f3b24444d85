//! In-memory provider and navigator for tests and offline development.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::controller::Navigator;
use crate::provider::{AuthProvider, SignInRequest, SignInResponse, CREDENTIALS_SIGNIN};

/// Error returned by [`MemoryProvider`] for scripted failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct MemoryProviderError(pub String);

#[derive(Clone, Debug)]
enum Scripted {
    Reject(String),
    Fail(String),
}

/// In-memory AuthProvider for testing and offline development.
///
/// Checks the email/password pair against a fixed table and answers
/// `CredentialsSignin` on mismatch. Queued responses take precedence.
#[derive(Clone, Debug, Default)]
pub struct MemoryProvider {
    users: Arc<Mutex<HashMap<String, String>>>,
    scripted: Arc<Mutex<VecDeque<Scripted>>>,
    requests: Arc<Mutex<Vec<SignInRequest>>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, email: &str, password: &str) -> Self {
        self.users
            .lock()
            .unwrap()
            .insert(email.to_string(), password.to_string());
        self
    }

    /// Answer the next call with `error` instead of checking the table.
    pub fn reject_next(&self, error: &str) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(Scripted::Reject(error.to_string()));
    }

    /// Make the next call fail outright.
    pub fn fail_next(&self, message: &str) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(message.to_string()));
    }

    /// Every request received so far.
    pub fn requests(&self) -> Vec<SignInRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl AuthProvider for MemoryProvider {
    type Error = MemoryProviderError;

    async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse, Self::Error> {
        self.requests.lock().unwrap().push(request.clone());

        let scripted = self.scripted.lock().unwrap().pop_front();
        match scripted {
            Some(Scripted::Reject(error)) => return Ok(SignInResponse::rejected(error, 401)),
            Some(Scripted::Fail(message)) => return Err(MemoryProviderError(message)),
            None => {}
        }

        let known = self.users.lock().unwrap().get(&request.email).cloned();
        match known {
            Some(password) if password == request.password => {
                Ok(SignInResponse::success(request.callback_url))
            }
            _ => Ok(SignInResponse::rejected(CREDENTIALS_SIGNIN, 401)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationEvent {
    Push(String),
    Refresh,
}

/// Navigator that only records what it was asked to do.
#[derive(Clone, Debug, Default)]
pub struct RecordingNavigator {
    events: Arc<Mutex<Vec<NavigationEvent>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.events
            .lock()
            .unwrap()
            .push(NavigationEvent::Push(path.to_string()));
    }

    fn refresh(&self) {
        self.events.lock().unwrap().push(NavigationEvent::Refresh);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_user() {
        let provider = MemoryProvider::new().with_user("a@b.com", "secret");
        let request = SignInRequest {
            provider: "credentials".to_string(),
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            redirect: false,
            callback_url: Some("/stats".to_string()),
        };
        let response = provider.sign_in(request).await.unwrap();
        assert!(response.ok);
        assert!(response.error.is_none());
        assert_eq!(response.url.as_deref(), Some("/stats"));
    }

    #[tokio::test]
    async fn test_unknown_user_is_credentials_error() {
        let provider = MemoryProvider::new();
        let request = SignInRequest {
            provider: "credentials".to_string(),
            email: "who@b.com".to_string(),
            password: "x".to_string(),
            redirect: false,
            callback_url: None,
        };
        let response = provider.sign_in(request).await.unwrap();
        assert_eq!(response.error.as_deref(), Some(CREDENTIALS_SIGNIN));
        assert_eq!(response.status, 401);
        assert_eq!(provider.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_scripted_responses_are_consumed_in_order() {
        let provider = MemoryProvider::new().with_user("a@b.com", "secret");
        provider.fail_next("down");
        provider.reject_next("OtherIssue");
        let request = SignInRequest {
            provider: "credentials".to_string(),
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            redirect: false,
            callback_url: None,
        };

        let first = provider.sign_in(request.clone()).await;
        assert_eq!(first, Err(MemoryProviderError("down".to_string())));
        let second = provider.sign_in(request.clone()).await.unwrap();
        assert_eq!(second.error.as_deref(), Some("OtherIssue"));
        let third = provider.sign_in(request).await.unwrap();
        assert!(third.ok);
    }

    #[test]
    fn test_navigator_records_in_order() {
        let navigator = RecordingNavigator::new();
        navigator.push("/home");
        navigator.refresh();
        assert_eq!(
            navigator.events(),
            vec![NavigationEvent::Push("/home".to_string()), NavigationEvent::Refresh]
        );
    }
}
