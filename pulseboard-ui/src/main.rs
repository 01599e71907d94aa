//! Pulseboard Dashboard
//!
//! Admin dashboard for the Pulseboard record API, built with Leptos (WASM).
//!
//! # Features
//!
//! - Summary cards for record count and total value
//! - Bar, line and pie charts drawn on canvas
//! - Raw record table with per-row delete
//! - Settings tab to add records or reset the collection
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the Pulseboard API over HTTP only.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
