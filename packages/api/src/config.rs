//! Provider location, from environment variables or the browser origin.

use login::LoginConfig;

/// Where the authentication provider's REST endpoints live.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    /// Origin of the provider, e.g. `http://localhost:3000`.
    pub base_url: String,
    /// Path prefix of the endpoints, e.g. `/api/auth`.
    pub base_path: String,
}

impl AuthConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            base_path: LoginConfig::default().auth.base_path,
        }
    }

    /// Builder method to set the endpoint prefix.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let trimmed = base_path.trim_end_matches('/');
        self.base_path = if trimmed.starts_with('/') || trimmed.is_empty() {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        self
    }

    /// Provider on the same origin, prefix taken from `login.toml`.
    pub fn from_login_config(base_url: impl Into<String>, config: &LoginConfig) -> Self {
        Self::new(base_url).with_base_path(config.auth.base_path.clone())
    }

    /// Create config from environment variables.
    ///
    /// `AUTH_URL` (or `NEXTAUTH_URL`) gives the origin, defaulting to
    /// `http://localhost:3000`; `AUTH_BASE_PATH` overrides the prefix.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("AUTH_URL")
            .or_else(|_| std::env::var("NEXTAUTH_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let config = Self::new(base_url);
        match std::env::var("AUTH_BASE_PATH") {
            Ok(base_path) => config.with_base_path(base_path),
            Err(_) => config,
        }
    }

    /// Full URL of an endpoint below the prefix.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_url,
            self.base_path,
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let config = AuthConfig::new("http://localhost:3000/");
        assert_eq!(config.endpoint("csrf"), "http://localhost:3000/api/auth/csrf");
        assert_eq!(
            config.endpoint("/callback/credentials"),
            "http://localhost:3000/api/auth/callback/credentials"
        );
    }

    #[test]
    fn test_base_path_normalised() {
        let config = AuthConfig::new("https://stats.example.com").with_base_path("auth/");
        assert_eq!(config.endpoint("session"), "https://stats.example.com/auth/session");
    }

    #[test]
    fn test_from_login_config() {
        let login = LoginConfig::from_toml("[auth]\nbase_path = \"/sso\"\n").unwrap();
        let config = AuthConfig::from_login_config("https://a.example", &login);
        assert_eq!(config.endpoint("csrf"), "https://a.example/sso/csrf");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_from_env() {
        std::env::set_var("AUTH_URL", "http://auth.internal:4000");
        std::env::set_var("AUTH_BASE_PATH", "/auth");
        let config = AuthConfig::from_env();
        std::env::remove_var("AUTH_URL");
        std::env::remove_var("AUTH_BASE_PATH");
        assert_eq!(config.endpoint("csrf"), "http://auth.internal:4000/auth/csrf");
    }
}
