//! # API crate: client side of the external authentication provider
//!
//! The login form never authenticates anybody itself. This crate is the
//! narrow path to the provider that does.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`AuthClient`]: CSRF, credentials sign-in, session lookup, sign-out. Implements [`login::AuthProvider`]. |
//! | [`config`] | [`AuthConfig`]: provider origin and endpoint prefix, from the environment or the browser origin |
//! | [`models`] | [`Session`] and the wire payloads of the provider |
//! | [`error`] | [`ClientError`] |

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{interpret_redirect, AuthClient};
pub use config::AuthConfig;
pub use error::ClientError;
pub use models::{Session, SessionUser};
