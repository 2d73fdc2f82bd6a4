//! Common state machine error types
//!
//! Shared by every crate that models a lifecycle as an explicit state machine.

use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot leave {from} via {event}")]
    InvalidTransition { from: String, event: String },
}

impl StateError {
    pub fn invalid(from: impl ToString, event: impl ToString) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            event: event.to_string(),
        }
    }
}

impl From<StateError> for crate::Error {
    fn from(err: StateError) -> Self {
        crate::Error::Authentication(err.to_string())
    }
}
