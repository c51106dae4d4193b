//! State Management
//!
//! Session and dashboard state shared through Leptos context.

pub mod auth;
pub mod dashboard;

pub use auth::{provide_auth_state, use_auth, AuthState, LocalStorageStore};
pub use dashboard::DashboardState;
