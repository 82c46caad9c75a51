//! Marketplace Dashboard
//!
//! Marketplace analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Category distribution bar chart with totals
//! - Product recommendation lookup
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Screen state, formatting and the HTTP client live in the
//! `marketplace-dashboard` crate; this crate only renders them.

use leptos::*;

mod app;
mod components;
mod logging;
mod pages;
mod settings;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let config = settings::load_config();
    logging::init(&config.logging.level);

    tracing::info!(
        api = %config.api.base_url,
        "Marketplace Dashboard v{}",
        env!("CARGO_PKG_VERSION")
    );

    mount_to_body(move || view! { <app::App config=config /> });
}
