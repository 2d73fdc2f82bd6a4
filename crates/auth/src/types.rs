//! Request and result types for the auth gate

use serde::{Deserialize, Serialize};

use crate::state::{AuthEvent, AuthState, AuthStateMachine};

/// Result of checking a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
    pub success: bool,
    /// The factory-default password matched; a password change is required
    pub is_default: bool,
}

impl AuthOutcome {
    pub fn rejected() -> Self {
        Self {
            success: false,
            is_default: false,
        }
    }

    /// Whether the session flag may be set for this outcome
    pub fn grants_session(&self) -> bool {
        self.success && !self.is_default
    }

    /// State reached from `current` after this outcome
    pub fn next_state(&self, current: AuthState) -> AuthState {
        let event = match (self.success, self.is_default) {
            (false, _) => return current,
            (true, true) => AuthEvent::DefaultPasswordAccepted,
            (true, false) => AuthEvent::PasswordAccepted,
        };
        AuthStateMachine::transition(current, event).unwrap_or(current)
    }
}

/// Password change request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    /// Required unless the caller already holds a valid session
    #[serde(default)]
    pub current_password: Option<String>,
    pub new_password: String,
    pub confirm_password: String,
}
