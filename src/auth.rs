//! Auth Context
//!
//! Holds the current session. Readable by any view, mutated only through
//! [`AuthContext::login`], [`AuthContext::register`] and [`AuthContext::logout`].
//! Every mutation is mirrored to a [`SessionStore`] so the session survives
//! restarts.
//!
//! The server is the only authority on token validity: there is no expiry
//! or refresh handling here.

use serde_json::Value;

use crate::client::response::{classify_session, SessionOutcome};
use crate::client::{ApiError, LeadApi};
use crate::model::{Credentials, Registration, User};
use crate::session::{Session, SessionStore};

/// Fallback when a rejected login carries no server message
pub const LOGIN_FAILED: &str = "Login failed";

/// Fallback when a rejected registration carries no server message
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The server answered without a token
    #[error("{0}")]
    Rejected(String),

    #[error("Network error. Please try again.")]
    Network(#[from] ApiError),
}

/// Session holder bound to a durable store
#[derive(Debug, Clone)]
pub struct AuthContext<S> {
    store: S,
    session: Option<Session>,
}

impl<S: SessionStore> AuthContext<S> {
    /// Rehydrate from `store`. An unreadable stored session counts as absent.
    pub fn restore(store: S) -> Self {
        let session = match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable stored session");
                None
            }
        };

        if session.is_some() {
            tracing::debug!("Restored stored session");
        }

        Self { store, session }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().and_then(|s| s.user.as_ref())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Log in. A rejected attempt leaves any existing session in place.
    pub async fn login<A: LeadApi + ?Sized>(
        &mut self,
        api: &A,
        credentials: &Credentials,
    ) -> Result<&Session, AuthError> {
        let body = api.login(credentials).await?;
        self.establish(&body, LOGIN_FAILED)
    }

    /// Create an account and log straight into it
    pub async fn register<A: LeadApi + ?Sized>(
        &mut self,
        api: &A,
        registration: &Registration,
    ) -> Result<&Session, AuthError> {
        let body = api.register(registration).await?;
        self.establish(&body, REGISTRATION_FAILED)
    }

    /// Adopt the session in an auth response body, or report why there is none
    pub fn establish(&mut self, body: &Value, fallback: &str) -> Result<&Session, AuthError> {
        match classify_session(body) {
            SessionOutcome::Established(session) => {
                if let Err(e) = self.store.save(&session) {
                    tracing::warn!(error = %e, "Failed to persist session");
                }
                tracing::info!(
                    user = session.user.as_ref().map(User::display_name),
                    "Session established"
                );
                Ok(&*self.session.insert(session))
            }
            SessionOutcome::Rejected { message } => {
                let message = message.unwrap_or_else(|| fallback.to_string());
                tracing::debug!(%message, "Authentication rejected");
                Err(AuthError::Rejected(message))
            }
        }
    }

    pub fn logout(&mut self) {
        self.session = None;
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
        tracing::info!("Session cleared");
    }
}
