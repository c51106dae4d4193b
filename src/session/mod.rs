//! Session Storage
//!
//! The authenticated session and the durable stores that keep it across
//! restarts. A store holds at most one session.

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::model::User;

/// Bearer token plus whatever user identity the server returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Durable session storage
pub trait SessionStore {
    /// The stored session, `None` if nothing is stored
    fn load(&self) -> Result<Option<Session>, StoreError>;

    fn save(&self, session: &Session) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;
}

/// Session storage errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to access session file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Stored session is corrupt: {0}")]
    Corrupt(String),
}

/// Process-local store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `session`
    pub fn with_session(session: Session) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(session))),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}
