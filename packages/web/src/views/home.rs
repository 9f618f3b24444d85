//! Default landing page after login.

use dioxus::prelude::*;
use login::LoginConfig;
use ui::{use_session, LogoutButton};

use crate::params::LoginParams;
use crate::Route;

#[component]
pub fn Home() -> Element {
    let session = use_session();
    let config = use_context::<LoginConfig>();
    let nav = use_navigator();

    let state = session();
    if state.loading {
        return rsx! {
            p { class: "p-8 text-gray-500", "Loading..." }
        };
    }

    let Some(user) = state.session.and_then(|session| session.user) else {
        nav.replace(Route::Login {
            params: LoginParams::session_required(&config.routes.home),
        });
        return rsx! {};
    };
    let name = user.display_name().to_string();

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",
            h1 { class: "mb-2 text-3xl font-bold text-gray-900", "Welcome" }
            p { class: "mb-8 text-gray-600", "Signed in as {name}" }
            LogoutButton {
                redirect_to: config.routes.login.clone(),
                class: "rounded-md bg-indigo-600 py-2 px-4 text-sm font-semibold text-white hover:bg-indigo-500",
            }
        }
    }
}
