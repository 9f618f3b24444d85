//! # Authentication provider seam
//!
//! The form delegates authentication to an external provider through the
//! [`AuthProvider`] trait. Implementations live elsewhere: the HTTP client in
//! the `api` crate, and [`crate::MemoryProvider`] for tests.
//!
//! A call has three possible results, collapsed by [`attempt_sign_in`] into a
//! [`SignInOutcome`]:
//!
//! | Provider result | Outcome |
//! |-----------------|---------|
//! | `Ok` with no `error` | [`SignInOutcome::Success`] |
//! | `Ok` with an `error` | [`SignInOutcome::Rejected`] carrying the error text |
//! | `Err` | [`SignInOutcome::Failed`] carrying the rendered error |

use std::fmt::Display;

use crate::models::FormInput;

/// Error text the provider reports for a wrong email/password.
pub const CREDENTIALS_SIGNIN: &str = "CredentialsSignin";

/// Arguments of a sign-in call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignInRequest {
    /// Provider id, `"credentials"` for email/password.
    pub provider: String,
    pub email: String,
    pub password: String,
    /// Always `false` from the form: the result is inspected locally and the
    /// provider must not navigate.
    pub redirect: bool,
    pub callback_url: Option<String>,
}

impl SignInRequest {
    pub fn credentials(input: &FormInput) -> Self {
        Self {
            provider: "credentials".to_string(),
            email: input.email.clone(),
            password: input.password.clone(),
            redirect: false,
            callback_url: None,
        }
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }
}

/// What the provider answered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInResponse {
    pub error: Option<String>,
    pub status: u16,
    pub ok: bool,
    pub url: Option<String>,
}

impl SignInResponse {
    pub fn success(url: Option<String>) -> Self {
        Self {
            error: None,
            status: 200,
            ok: true,
            url,
        }
    }

    pub fn rejected(error: impl Into<String>, status: u16) -> Self {
        Self {
            error: Some(error.into()),
            status,
            ok: false,
            url: None,
        }
    }
}

/// External authentication call.
pub trait AuthProvider {
    type Error: Display;

    fn sign_in(
        &self,
        request: SignInRequest,
    ) -> impl std::future::Future<Output = Result<SignInResponse, Self::Error>>;
}

/// Result of one sign-in attempt, as the form sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInOutcome {
    Success,
    /// The provider answered with an error indicator.
    Rejected(String),
    /// The call itself failed (network, provider threw).
    Failed(String),
}

impl SignInOutcome {
    pub fn is_credentials_error(&self) -> bool {
        matches!(self, SignInOutcome::Rejected(error) if error.contains(CREDENTIALS_SIGNIN))
    }
}

/// Call the provider and classify what came back.
pub async fn attempt_sign_in<P: AuthProvider>(provider: &P, request: SignInRequest) -> SignInOutcome {
    let provider_id = request.provider.clone();
    match provider.sign_in(request).await {
        Ok(SignInResponse { error: None, .. }) => {
            tracing::info!(provider = %provider_id, "sign-in succeeded");
            SignInOutcome::Success
        }
        Ok(SignInResponse { error: Some(error), status, .. }) => {
            tracing::warn!(provider = %provider_id, status, %error, "sign-in rejected");
            SignInOutcome::Rejected(error)
        }
        Err(e) => {
            tracing::error!(provider = %provider_id, "sign-in call failed: {}", e);
            SignInOutcome::Failed(e.to_string())
        }
    }
}
