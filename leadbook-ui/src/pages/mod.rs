//! Pages
//!
//! Top-level page components for each route.

pub mod auth;
pub mod dashboard;

pub use auth::{Login, Register};
pub use dashboard::Dashboard;
