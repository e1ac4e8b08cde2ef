//! API Layer
//!
//! HTTP client for the Job Tracker Service.

pub mod client;

pub use client::*;
