use dioxus::prelude::*;
use login::Navigator as FormNavigator;

use crate::auth::AuthHandle;

/// Router-backed navigation for the login form.
///
/// Refreshing reloads the session, which is the data every route of this
/// app depends on.
#[derive(Clone)]
pub struct RouterNavigator {
    router: Navigator,
    auth: AuthHandle,
}

impl RouterNavigator {
    pub fn new(router: Navigator, auth: AuthHandle) -> Self {
        Self { router, auth }
    }
}

impl FormNavigator for RouterNavigator {
    fn push(&self, path: &str) {
        if let Some(failure) = self.router.push(path.to_string()) {
            tracing::error!(%path, "navigation failed: {:?}", failure);
        }
    }

    fn refresh(&self) {
        self.auth.refresh();
    }
}
