//! Login page view with the email/password form.

use dioxus::prelude::*;
use login::LoginConfig;
use ui::{use_session, LoginForm};

use crate::params::LoginParams;

/// Login page component.
#[component]
pub fn Login(params: LoginParams) -> Element {
    let session = use_session();
    let config = use_context::<LoginConfig>();
    let nav = use_navigator();

    // If already logged in, go where the visitor was heading
    let state = session();
    if !state.loading && state.is_authenticated() && !params.0.is_session_required() {
        let destination = params.0.callback_or(&config.routes.home).to_string();
        nav.replace(destination);
    }

    rsx! {
        div {
            class: "flex min-h-screen items-center justify-center px-4 bg-white",
            div {
                class: "w-full max-w-md",
                LoginForm { query: params.0.clone(), config: config.clone() }
            }
        }
    }
}
