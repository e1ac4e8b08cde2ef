//! JobTrack Dashboard
//!
//! Job-application tracker built with Leptos (WASM).
//!
//! # Features
//!
//! - Login / registration against the Job Tracker Service
//! - Application list with per-job status updates
//! - Status breakdown pie chart
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It holds no data of its own: the Job Tracker Service is the
//! single source of truth, reached via HTTP, and the job list is re-fetched
//! in full after every mutation.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
#[cfg(feature = "registration")]
mod validate;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
