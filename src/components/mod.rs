//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod auth_form;
pub mod job_form;
pub mod job_list;
pub mod loading;
pub mod nav;
pub mod status_chart;
pub mod toast;

pub use auth_form::LoginForm;
#[cfg(feature = "registration")]
pub use auth_form::RegisterForm;
pub use job_form::JobForm;
pub use job_list::JobList;
pub use loading::Loading;
pub use nav::Nav;
pub use status_chart::StatusChart;
pub use toast::Toast;
