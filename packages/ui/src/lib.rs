//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, use_session, AuthHandle, LogoutButton, SessionProvider, SessionState};

mod navigator;
pub use navigator::RouterNavigator;

mod login_form;
pub use login_form::LoginForm;
