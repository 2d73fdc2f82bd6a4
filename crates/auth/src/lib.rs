//! Admin auth gate for Folio
//!
//! Verifies the admin password against the content document, drives the
//! session state machine, and provides axum extractors that work with any
//! domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod error;
mod extractors;
mod session;
mod state;
mod types;

pub use backend::{AuthBackend, Resolution};
pub use error::{AuthError, MIN_PASSWORD_LEN};
pub use extractors::AdminSession;
pub use session::{Session, SESSION_COOKIE};
pub use state::{AuthEvent, AuthState, AuthStateMachine};
pub use types::{AuthOutcome, PasswordChange};
