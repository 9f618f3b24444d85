//! # Login configuration: `login.toml`
//!
//! Routes and provider settings the form needs but should not hard-code.
//!
//! ## Structure
//!
//! ```toml
//! [routes]
//! home = "/home"     # destination when no callbackUrl is given
//! login = "/login"   # where anonymous visitors are sent
//!
//! [auth]
//! provider = "credentials"
//! base_path = "/api/auth"
//! ```
//!
//! All structs derive `Default` so that a missing or empty file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `login.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub routes: RoutesConfig,
    #[serde(default)]
    pub auth: AuthSection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutesConfig {
    #[serde(default = "default_home")]
    pub home: String,
    #[serde(default = "default_login")]
    pub login: String,
}

fn default_home() -> String {
    "/home".to_string()
}

fn default_login() -> String {
    "/login".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            home: default_home(),
            login: default_login(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthSection {
    /// Provider id passed to the sign-in endpoint.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Path prefix of the provider's REST endpoints.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

fn default_provider() -> String {
    "credentials".to_string()
}

fn default_base_path() -> String {
    "/api/auth".to_string()
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            base_path: default_base_path(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid login config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to write login config: {0}")]
    Write(#[from] toml::ser::Error),
    #[error("route `{0}` must start with '/'")]
    RelativeRoute(String),
}

impl LoginConfig {
    /// Builder method to set the home route.
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.routes.home = home.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "login.toml"
    }

    /// Parse from TOML string and check the routes are absolute paths.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        for route in [&config.routes.home, &config.routes.login] {
            if !route.starts_with('/') {
                return Err(ConfigError::RelativeRoute(route.clone()));
            }
        }
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
