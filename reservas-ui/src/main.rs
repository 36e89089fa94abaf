//! Reservas Dashboard
//!
//! Restaurant reservation front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Daily dashboard with reservation counters
//! - New reservation form with live table availability
//! - Table management, customer history and reservation list
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the reservation REST API over HTTP; models,
//! endpoints and form validation come from the shared `reservas` crate.

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
