//! UI Components
//!
//! Reusable Leptos components for the lead dashboard.

pub mod banner;
pub mod lead_modal;
pub mod lead_table;
pub mod nav;
pub mod protected;

pub use banner::StatusBanners;
pub use lead_modal::LeadModal;
pub use lead_table::LeadTable;
pub use nav::Nav;
pub use protected::Protected;
