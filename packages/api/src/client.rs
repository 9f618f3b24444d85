//! # HTTP client for the authentication provider
//!
//! Talks to a NextAuth-compatible REST surface below [`AuthConfig::base_path`]:
//!
//! | Call | Endpoint | Notes |
//! |------|----------|-------|
//! | [`csrf_token`](AuthClient::csrf_token) | `GET /csrf` | Token also set as a cookie; both must come back on POSTs. |
//! | [`sign_in`](AuthClient::sign_in) | `POST /callback/{provider}` | Form-encoded, `json=true`. The answer is `{ "url": ... }`; a failed sign-in puts `error=<code>` in that URL's query. |
//! | [`session`](AuthClient::session) | `GET /session` | `{}` when anonymous. |
//! | [`sign_out`](AuthClient::sign_out) | `POST /signout` | Form-encoded, `json=true`. |
//!
//! Redirects are never followed on the caller's behalf: the sign-in result is
//! returned as a [`SignInResponse`] and the caller decides where to go.
//!
//! Native builds enable reqwest's cookie store so the CSRF cookie survives
//! between the two requests of a sign-in. In the browser the cookie jar is the
//! browser's own.

use login::{AuthProvider, SignInRequest, SignInResponse};
use url::Url;

use crate::config::AuthConfig;
use crate::error::ClientError;
use crate::models::{CsrfResponse, RedirectResponse, Session};

#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    config: AuthConfig,
}

impl AuthClient {
    pub fn new(config: AuthConfig) -> Result<Self, ClientError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_store(true);
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Fetch a fresh CSRF token.
    pub async fn csrf_token(&self) -> Result<String, ClientError> {
        let body: CsrfResponse = self
            .http
            .get(self.config.endpoint("csrf"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(body.csrf_token)
    }

    /// Sign in with the credentials in `request`, without following the
    /// provider's redirect.
    pub async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse, ClientError> {
        let csrf_token = self.csrf_token().await?;
        let callback_url = request
            .callback_url
            .clone()
            .unwrap_or_else(|| self.config.base_url.clone());

        let form = [
            ("email", request.email.as_str()),
            ("password", request.password.as_str()),
            ("csrfToken", csrf_token.as_str()),
            ("callbackUrl", callback_url.as_str()),
            ("json", "true"),
        ];

        tracing::debug!(provider = %request.provider, "posting credentials");
        let response = self
            .http
            .post(self.config.endpoint(&format!("callback/{}", request.provider)))
            .header("X-Auth-Return-Redirect", "1")
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        let body: RedirectResponse = response.json().await?;
        interpret_redirect(&self.config.base_url, status.as_u16(), status.is_success(), &body.url)
    }

    /// Current session, `None` when nobody is logged in.
    pub async fn session(&self) -> Result<Option<Session>, ClientError> {
        let session: Option<Session> = self
            .http
            .get(self.config.endpoint("session"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(session.filter(Session::is_authenticated))
    }

    /// End the current session.
    pub async fn sign_out(&self) -> Result<(), ClientError> {
        let csrf_token = self.csrf_token().await?;
        let form = [
            ("csrfToken", csrf_token.as_str()),
            ("callbackUrl", self.config.base_url.as_str()),
            ("json", "true"),
        ];
        self.http
            .post(self.config.endpoint("signout"))
            .header("X-Auth-Return-Redirect", "1")
            .form(&form)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

impl AuthProvider for AuthClient {
    type Error = ClientError;

    async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse, Self::Error> {
        AuthClient::sign_in(self, request).await
    }
}

/// Turn the provider's `{ url }` answer into a [`SignInResponse`].
///
/// The error code, if any, is the `error` query parameter of `url`, which may
/// be relative to `base_url`. The URL is only reported back on success.
pub fn interpret_redirect(
    base_url: &str,
    status: u16,
    ok: bool,
    url: &str,
) -> Result<SignInResponse, ClientError> {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(base_url)?.join(url)?,
        Err(_) => return Err(ClientError::Redirect(url.to_string())),
    };

    let error = parsed
        .query_pairs()
        .find(|(key, _)| key == "error")
        .map(|(_, value)| value.into_owned());

    Ok(SignInResponse {
        url: if error.is_some() { None } else { Some(url.to_string()) },
        error,
        status,
        ok,
    })
}
