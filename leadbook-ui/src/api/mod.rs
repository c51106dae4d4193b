//! API Client
//!
//! Browser transport for the lead backend.

pub mod client;

pub use client::GlooLeadApi;
