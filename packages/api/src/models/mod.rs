//! Payloads exchanged with the authentication provider.

mod session;

pub use session::{Session, SessionUser};
pub(crate) use session::{CsrfResponse, RedirectResponse};
