//! Concrete authentication backend
//!
//! Wraps the `ContentStore` and owns every credential check. Passwords set
//! through `change_password` are stored salted and hashed; the bootstrap
//! default is compared as configured.

use folio_common::{hash_password, verify_password};
use folio_store::ContentStore;

use crate::error::{AuthError, MIN_PASSWORD_LEN};
use crate::session::Session;
use crate::state::{AuthEvent, AuthState, AuthStateMachine};
use crate::types::{AuthOutcome, PasswordChange};

/// State resolved for an incoming session flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub state: AuthState,
    /// The client's flag is stale and must be cleared
    pub clear_flag: bool,
}

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    store: ContentStore,
}

impl AuthBackend {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    /// Re-validate a client-held session flag against stored credentials.
    ///
    /// A flag is stale while the factory-default password is still in force:
    /// nobody can legitimately hold a session before changing it.
    pub async fn resolve(&self, session: &Session) -> Result<Resolution, AuthError> {
        if !session.authenticated {
            return Ok(Resolution {
                state: AuthState::LoggedOut,
                clear_flag: false,
            });
        }

        let document = self.store.load().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load credentials for session check");
            AuthError::StoreUnavailable
        })?;

        let default_in_force = !document.password_changed
            && verify_password(self.store.default_password(), &document.admin_password);

        if default_in_force {
            tracing::info!("Rejecting session flag while default password is in force");
            let state = AuthStateMachine::transition(AuthState::LoggedIn, AuthEvent::SessionRejected)
                .unwrap_or(AuthState::LoggedOut);
            return Ok(Resolution {
                state,
                clear_flag: true,
            });
        }

        Ok(Resolution {
            state: AuthState::LoggedIn,
            clear_flag: false,
        })
    }

    /// Check a password.
    ///
    /// Until a password has been set, only the factory default is accepted,
    /// and accepting it does not grant a session (`is_default = true`).
    pub async fn authenticate(&self, password: &str) -> Result<AuthOutcome, AuthError> {
        let document = self.store.load().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load credentials for login");
            AuthError::StoreUnavailable
        })?;

        let outcome = if document.password_changed {
            AuthOutcome {
                success: verify_password(password, &document.admin_password),
                is_default: false,
            }
        } else if verify_password(password, self.store.default_password()) {
            AuthOutcome {
                success: true,
                is_default: true,
            }
        } else {
            AuthOutcome::rejected()
        };

        if outcome.success {
            tracing::info!(is_default = outcome.is_default, "Admin password accepted");
        } else {
            tracing::warn!("Admin login rejected");
        }

        Ok(outcome)
    }

    /// Set a new admin password and mark the default as retired.
    ///
    /// Permitted when the session resolves to LoggedIn, or when
    /// `current_password` authenticates (the MustChangePassword path).
    pub async fn change_password(
        &self,
        session: &Session,
        request: &PasswordChange,
    ) -> Result<AuthState, AuthError> {
        let mut current = self.resolve(session).await?.state;

        if !current.is_logged_in() {
            if let Some(password) = request.current_password.as_deref() {
                current = self.authenticate(password).await?.next_state(current);
            }
        }

        let next = AuthStateMachine::transition(current, AuthEvent::PasswordChanged)
            .map_err(|_| AuthError::NotAuthenticated)?;

        if request.new_password != request.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if request.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }

        let hashed = hash_password(&request.new_password).map_err(|e| {
            tracing::error!(error = %e, "Failed to hash new password");
            AuthError::StoreUnavailable
        })?;

        let mut document = self
            .store
            .load()
            .await
            .map_err(|_| AuthError::StoreUnavailable)?;
        document.admin_password = hashed;
        document.password_changed = true;
        self.store
            .save(&document)
            .await
            .map_err(|_| AuthError::StoreUnavailable)?;

        tracing::info!("Admin password changed");
        Ok(next)
    }

    /// End the session. Pure: the caller clears the client's flag.
    pub fn logout(&self) -> AuthState {
        AuthStateMachine::transition(AuthState::LoggedIn, AuthEvent::Logout)
            .unwrap_or(AuthState::LoggedOut)
    }
}
