//! Session State
//!
//! The auth context behind a signal, persisted to `localStorage` under the
//! `token` and `user` keys.

use leptos::*;
use wasm_bindgen::JsValue;

use leadbook::{
    AuthContext, AuthError, Credentials, Registration, Session, SessionStore, StoreError, User,
};

use crate::api::GlooLeadApi;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Session store backed by `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

fn js_error(e: JsValue) -> StoreError {
    StoreError::Unavailable(format!("{:?}", e))
}

impl SessionStore for LocalStorageStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        let storage = Self::storage()?;

        let token = match storage.get_item(TOKEN_KEY).map_err(js_error)? {
            Some(token) if !token.is_empty() => token,
            _ => return Ok(None),
        };

        let user = match storage.get_item(USER_KEY).map_err(js_error)? {
            Some(raw) => serde_json::from_str::<Option<User>>(&raw)
                .map_err(|e| StoreError::Corrupt(e.to_string()))?,
            None => None,
        };

        Ok(Some(Session { token, user }))
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage.set_item(TOKEN_KEY, &session.token).map_err(js_error)?;

        match &session.user {
            Some(user) => {
                let raw =
                    serde_json::to_string(user).map_err(|e| StoreError::Corrupt(e.to_string()))?;
                storage.set_item(USER_KEY, &raw).map_err(js_error)
            }
            None => storage.remove_item(USER_KEY).map_err(js_error),
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage.remove_item(TOKEN_KEY).map_err(js_error)?;
        storage.remove_item(USER_KEY).map_err(js_error)
    }
}

/// Session shared with every view
#[derive(Clone, Copy)]
pub struct AuthState {
    pub auth: RwSignal<AuthContext<LocalStorageStore>>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.auth.with(AuthContext::is_authenticated)
    }

    /// Current token, read without subscribing
    pub fn token(&self) -> Option<String> {
        self.auth
            .with_untracked(|auth| auth.token().map(str::to_string))
    }

    pub fn user(&self) -> Option<User> {
        self.auth.with(|auth| auth.user().cloned())
    }

    pub async fn login(&self, credentials: Credentials) -> Result<(), AuthError> {
        let api = GlooLeadApi::from_storage();
        let mut auth = self.auth.get_untracked();
        let outcome = auth.login(&api, &credentials).await.map(|_| ());
        self.auth.set(auth);
        outcome
    }

    pub async fn register(&self, registration: Registration) -> Result<(), AuthError> {
        let api = GlooLeadApi::from_storage();
        let mut auth = self.auth.get_untracked();
        let outcome = auth.register(&api, &registration).await.map(|_| ());
        self.auth.set(auth);
        outcome
    }

    pub fn logout(&self) {
        self.auth.update(AuthContext::logout);
    }
}

/// Restore the stored session and provide it to the component tree
pub fn provide_auth_state() {
    let state = AuthState {
        auth: create_rw_signal(AuthContext::restore(LocalStorageStore)),
    };

    provide_context(state);
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>().expect("AuthState not found")
}
