//! Leadbook Web Client
//!
//! Lead management dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and registration with a persisted session
//! - Lead table with create, edit and delete
//! - Auto-dismissing status banners
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Routing, session handling and the dashboard controller come
//! from the `leadbook` core crate; this crate supplies the browser transport,
//! `localStorage` persistence and the views.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
