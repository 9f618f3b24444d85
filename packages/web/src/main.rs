use api::AuthConfig;
use dioxus::prelude::*;
use login::LoginConfig;

use params::LoginParams;
use ui::SessionProvider;
use views::{Home, Login};

mod params;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login?:..params")]
    Login { params: LoginParams },
    #[route("/home")]
    Home {},
}

const LOGIN_TOML: &str = include_str!("../login.toml");

fn main() {
    #[cfg(feature = "server")]
    {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .try_init();
    }

    dioxus::launch(App);
}

/// Routes and provider settings shipped with the app.
fn load_login_config() -> LoginConfig {
    match LoginConfig::from_toml(LOGIN_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default {}: {}", LoginConfig::filename(), e);
            LoginConfig::default()
        }
    }
}

/// The provider lives on the origin serving the app in the browser, and is
/// taken from the environment elsewhere.
fn auth_config(config: &LoginConfig) -> AuthConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        AuthConfig::from_login_config(origin, config)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let from_env = AuthConfig::from_env();
        if std::env::var("AUTH_BASE_PATH").is_ok() {
            from_env
        } else {
            from_env.with_base_path(config.auth.base_path.clone())
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_login_config);
    let auth = use_hook(|| auth_config(&config));
    use_context_provider(|| config.clone());

    rsx! {
        SessionProvider {
            config: auth,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to the home route
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let config = use_context::<LoginConfig>();
    nav.replace(config.routes.home.clone());
    rsx! {}
}
