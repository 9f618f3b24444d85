//! Session context and hooks for the UI.

use api::{AuthClient, AuthConfig, Session};
use dioxus::prelude::*;

/// Session state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Handle to the provider client and the session it reports.
#[derive(Clone)]
pub struct AuthHandle {
    client: Option<AuthClient>,
    state: Signal<SessionState>,
    generation: Signal<u64>,
}

impl AuthHandle {
    /// `None` when the HTTP client could not be built.
    pub fn client(&self) -> Option<&AuthClient> {
        self.client.as_ref()
    }

    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    /// Re-fetch the session. Components reading [`AuthHandle::state`] rerender
    /// once the provider answers.
    pub fn refresh(&self) {
        // Routes wait for the new answer instead of acting on the old session
        let mut state = self.state;
        state.write().loading = true;
        let mut generation = self.generation;
        *generation.write() += 1;
    }

    fn clear(&self) {
        let mut state = self.state;
        state.set(SessionState {
            session: None,
            loading: false,
        });
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>()
}

/// Get the current session state.
/// Returns a signal that updates when the session is (re)loaded.
pub fn use_session() -> Signal<SessionState> {
    use_context::<AuthHandle>().state
}

/// Provider component that owns the auth client and the session state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn SessionProvider(config: AuthConfig, children: Element) -> Element {
    let mut state = use_signal(SessionState::default);
    let generation = use_signal(|| 0_u64);
    let client = use_hook(|| match AuthClient::new(config.clone()) {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::error!("Failed to build auth client: {}", e);
            None
        }
    });

    // Fetch the session on mount and on every refresh
    let fetch_client = client.clone();
    let _ = use_resource(move || {
        let client = fetch_client.clone();
        async move {
            let round = generation();
            let Some(client) = client else {
                state.set(SessionState {
                    session: None,
                    loading: false,
                });
                return;
            };
            match client.session().await {
                Ok(session) => {
                    tracing::debug!(round, authenticated = session.is_some(), "session loaded");
                    state.set(SessionState {
                        session,
                        loading: false,
                    });
                }
                Err(e) => {
                    tracing::warn!(round, "Failed to load session: {}", e);
                    state.set(SessionState {
                        session: None,
                        loading: false,
                    });
                }
            }
        }
    });

    use_context_provider(|| AuthHandle {
        client,
        state,
        generation,
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "/login".to_string())] redirect_to: String,
) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut busy = use_signal(|| false);

    let onclick = move |_| {
        let auth = auth.clone();
        let redirect_to = redirect_to.clone();
        async move {
            let Some(client) = auth.client() else {
                return;
            };
            busy.set(true);
            match client.sign_out().await {
                Ok(()) => {
                    auth.clear();
                    nav.replace(redirect_to);
                }
                Err(e) => {
                    tracing::error!("Failed to log out: {}", e);
                    busy.set(false);
                }
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            disabled: busy(),
            onclick: onclick,
            "{label}"
        }
    }
}
