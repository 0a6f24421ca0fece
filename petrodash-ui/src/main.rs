//! Petrodash Dashboard
//!
//! Oil production dashboard and admin panel built with Leptos (WASM).
//!
//! # Features
//!
//! - Daily overview, per-field, historical and per-well views
//! - Admin data-entry forms with inline validation
//! - Historical bulk-upload acknowledgment
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Validation and projections come from the `petrodash` core
//! crate and run in the browser; validated records are written to the
//! browser console.

use leptos::*;

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
