//! State Management
//!
//! Global application state and session persistence.

pub mod global;
pub mod session;

pub use global::{bucket_counts, provide_global_state, AuthMode, GlobalState, Job, JobStatus};
pub use session::{BrowserTokenStore, Session, TokenStore};
