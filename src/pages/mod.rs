//! Pages
//!
//! Top-level page components.

pub mod auth;
pub mod dashboard;

pub use auth::AuthPage;
pub use dashboard::Dashboard;
