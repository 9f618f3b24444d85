//! Errors raised while talking to the authentication provider.

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("auth provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("auth provider answered with an unusable redirect `{0}`")]
    Redirect(String),
    #[error("invalid auth provider url: {0}")]
    Url(#[from] url::ParseError),
}
