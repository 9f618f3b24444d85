//! # Login form core
//!
//! Framework-free model of the email/password login form: input values,
//! validation, the submission state machine, and the view-model a renderer
//! reads. The external authentication provider and the navigation facility
//! are reached only through the [`AuthProvider`] and [`Navigator`] traits.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | [`FormInput`], [`ErrorState`] and the per-field error types |
//! | [`validate`] | Pure input validation |
//! | [`form`] | [`LoginForm`] and its `update` reducer |
//! | [`provider`] | Sign-in request/response types and the [`AuthProvider`] seam |
//! | [`controller`] | Command execution and [`LoginController`] |
//! | [`view`] | [`LoginView`], the renderer contract |
//! | [`query`] | [`LoginQuery`], the injected `error`/`callbackUrl` parameters |
//! | [`config`] | [`LoginConfig`], read from `login.toml` |

pub mod config;
pub mod controller;
pub mod form;
pub mod messages;
pub mod models;
pub mod provider;
pub mod query;
pub mod validate;
pub mod view;

mod memory;
pub use memory::{MemoryProvider, MemoryProviderError, NavigationEvent, RecordingNavigator};

pub use config::{ConfigError, LoginConfig};
pub use controller::{perform, LoginController, Navigator};
pub use form::{Command, FormEvent, LoginForm};
pub use models::{ErrorState, Field, FieldError, FormInput};
pub use provider::{attempt_sign_in, AuthProvider, SignInOutcome, SignInRequest, SignInResponse};
pub use query::LoginQuery;
pub use view::{Banner, BannerKind, FieldView, LoginView, SubmitView};
