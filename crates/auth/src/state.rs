//! State machine for the admin session
//!
//! LoggedOut → MustChangePassword (default password accepted)
//! LoggedOut | MustChangePassword | LoggedIn → LoggedIn (stored password accepted)
//! MustChangePassword | LoggedIn → LoggedIn (password changed)
//! any → LoggedOut (logout, stale session)

use folio_common::StateError;
use serde::{Deserialize, Serialize};

/// Admin session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthState {
    LoggedOut,
    MustChangePassword,
    LoggedIn,
}

impl AuthState {
    /// Whether admin operations are permitted
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn)
    }

    /// Get all valid next states from current state
    #[mutants::skip] // Every state is reachable from every other; the table only documents it
    pub fn valid_transitions(&self) -> &'static [AuthState] {
        match self {
            Self::LoggedOut => &[Self::LoggedOut, Self::MustChangePassword, Self::LoggedIn],
            Self::MustChangePassword => &[Self::LoggedOut, Self::MustChangePassword, Self::LoggedIn],
            Self::LoggedIn => &[Self::LoggedOut, Self::MustChangePassword, Self::LoggedIn],
        }
    }
}

impl std::fmt::Display for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoggedOut => write!(f, "logged_out"),
            Self::MustChangePassword => write!(f, "must_change_password"),
            Self::LoggedIn => write!(f, "logged_in"),
        }
    }
}

/// Events that drive the admin session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AuthEvent {
    /// The factory-default password matched while no password has been set
    DefaultPasswordAccepted,
    /// The administrator's own password matched
    PasswordAccepted,
    /// A new password was persisted
    PasswordChanged,
    /// Session flag present but the stored credentials make it invalid
    SessionRejected,
    /// Explicit logout
    Logout,
}

impl std::fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DefaultPasswordAccepted => write!(f, "default_password_accepted"),
            Self::PasswordAccepted => write!(f, "password_accepted"),
            Self::PasswordChanged => write!(f, "password_changed"),
            Self::SessionRejected => write!(f, "session_rejected"),
            Self::Logout => write!(f, "logout"),
        }
    }
}

/// Admin session state machine
pub struct AuthStateMachine;

impl AuthStateMachine {
    /// Attempt a state transition
    pub fn transition(current: AuthState, event: AuthEvent) -> Result<AuthState, StateError> {
        let next = match (current, event) {
            (_, AuthEvent::DefaultPasswordAccepted) => AuthState::MustChangePassword,
            (_, AuthEvent::PasswordAccepted) => AuthState::LoggedIn,
            (AuthState::MustChangePassword | AuthState::LoggedIn, AuthEvent::PasswordChanged) => {
                AuthState::LoggedIn
            }
            (_, AuthEvent::SessionRejected | AuthEvent::Logout) => AuthState::LoggedOut,
            (AuthState::LoggedOut, AuthEvent::PasswordChanged) => {
                return Err(StateError::invalid(current, event));
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: AuthState, event: &AuthEvent) -> bool {
        Self::transition(current, *event).is_ok()
    }
}
