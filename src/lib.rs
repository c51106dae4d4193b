//! # Leadbook
//!
//! Client for a lead-management backend: a sales team logs in and keeps a
//! table of leads (name, email, phone, status) up to date.
//!
//! ## Modules
//!
//! - [`client`]: Transport contract, endpoint table and response classification
//! - [`session`]: Session type and durable session stores
//! - [`auth`]: Auth context (login, register, logout, restore)
//! - [`routes`]: Client routes and the dashboard guard
//! - [`dashboard`]: Lead dashboard controller with status banners
//! - [`config`]: TOML configuration with environment overrides (native only)
//!
//! The core compiles for `wasm32` as well; the browser client builds on it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use leadbook::{AuthContext, Credentials, Dashboard, FileStore, HttpLeadApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpLeadApi::new(leadbook::DEFAULT_API_BASE);
//!     let mut auth = AuthContext::restore(FileStore::new(FileStore::default_path()));
//!
//!     if !auth.is_authenticated() {
//!         let credentials = Credentials {
//!             email: "ada@example.com".into(),
//!             password: "secret".into(),
//!         };
//!         auth.login(&api, &credentials).await?;
//!     }
//!
//!     let mut dashboard = Dashboard::new();
//!     let _ = dashboard.refresh(&api, auth.token()).await;
//!     println!("{}", dashboard.heading());
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod dashboard;
pub mod model;
pub mod routes;
pub mod session;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;

// Re-export top-level types for convenience
pub use model::{
    Credentials, DraftError, Lead, LeadDraft, LeadId, LeadStatus, RecordStatus, Registration,
    User,
};

pub use client::{
    response::{SaveOutcome, SessionOutcome},
    ApiError, ApiResult, Endpoint, LeadApi, DEFAULT_API_BASE,
};

#[cfg(not(target_arch = "wasm32"))]
pub use client::HttpLeadApi;

pub use session::{MemoryStore, Session, SessionStore, StoreError};

#[cfg(not(target_arch = "wasm32"))]
pub use session::FileStore;

pub use auth::{AuthContext, AuthError};

pub use routes::{AppRoute, Navigation};

pub use dashboard::{
    BannerKind, Banners, Dashboard, DismissTicket, LeadModal, ListPhase, ModalMode, Step,
    Submission, BANNER_TIMEOUT,
};

#[cfg(not(target_arch = "wasm32"))]
pub use config::{Config, ConfigError, LoggingConfig};
