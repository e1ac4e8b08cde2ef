//! Global Application State
//!
//! Reactive state management using Leptos signals. The job list is always
//! the last full snapshot returned by the service; the only derived data is
//! the per-status bucket counts for the chart.

use leptos::*;

use crate::api;
use crate::state::session::{self, Session, TokenStore};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Current session, if authenticated
    pub session: RwSignal<Option<Session>>,
    /// Which sub-mode the unauthenticated view is in
    pub auth_mode: RwSignal<AuthMode>,
    /// Last full job snapshot from the service
    pub jobs: RwSignal<Vec<Job>>,
    /// Set while a job list refresh is in flight
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Sub-mode of the unauthenticated view.
///
/// Toggling between the two is a pure local transition with no network
/// effect. Successful registration returns to `Login` without
/// authenticating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// A job application record, owned by the service.
///
/// The service emits the identifier as `_id`; everything else arrives under
/// its own name. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub status: JobStatus,
}

/// The four fixed status buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Selected,
    Rejected,
}

impl JobStatus {
    /// All buckets, in chart order
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Selected,
        JobStatus::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Selected => "Selected",
            JobStatus::Rejected => "Rejected",
        }
    }

    /// Chart color for this bucket
    pub fn color(&self) -> &'static str {
        match self {
            JobStatus::Applied => "#3498db",
            JobStatus::Interview => "#f39c12",
            JobStatus::Selected => "#2ecc71",
            JobStatus::Rejected => "#e74c3c",
        }
    }

    /// Parse the value coming back from the status `<select>` control.
    pub fn parse(value: &str) -> Option<JobStatus> {
        JobStatus::ALL.iter().copied().find(|s| s.label() == value)
    }
}

/// Count jobs per status bucket, in chart order.
///
/// Every job falls into exactly one bucket, so the counts always sum to the
/// snapshot length. Zero counts are kept; the chart legend shows all four
/// categories regardless.
pub fn bucket_counts(jobs: &[Job]) -> [(JobStatus, usize); 4] {
    JobStatus::ALL.map(|status| (status, jobs.iter().filter(|j| j.status == status).count()))
}

/// Pre-flight check for the add-job form: both fields must be non-blank.
pub fn can_submit_job(company: &str, role: &str) -> bool {
    !company.trim().is_empty() && !role.trim().is_empty()
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session: create_rw_signal(None),
        auth_mode: create_rw_signal(AuthMode::Login),
        jobs: create_rw_signal(Vec::new()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Re-fetch the full job snapshot from the service.
    ///
    /// Called on login, on session restore, and after every successful
    /// mutation; the list shown is never patched locally.
    pub async fn refresh_jobs(&self) {
        let Some(session) = self.session.get_untracked() else {
            return;
        };

        self.loading.set(true);
        match api::fetch_jobs(&session.token).await {
            Ok(jobs) => {
                self.jobs.set(jobs);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to refresh jobs: {}", e).into());
                self.show_error(&e);
            }
        }
        self.loading.set(false);
    }

    /// Map a mutation outcome onto the shared state. Failures surface on the
    /// error toast; the caller re-syncs the snapshot only on success.
    pub fn apply_mutation_result(&self, result: Result<(), String>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                self.show_error(&e);
                false
            }
        }
    }

    /// Successful registration returns to the login sub-mode without
    /// authenticating.
    pub fn complete_registration(&self) {
        self.show_success("Account created, you can log in now");
        self.auth_mode.set(AuthMode::Login);
    }

    /// Drop the session and all data derived from it.
    pub fn logout(&self, store: &impl TokenStore) {
        session::discard(store);
        self.session.set(None);
        self.jobs.set(Vec::new());
        self.auth_mode.set(AuthMode::Login);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        // Timers only exist in the browser
        #[cfg(target_arch = "wasm32")]
        {
            let success_signal = self.success;
            gloo_timers::callback::Timeout::new(3000, move || {
                success_signal.set(None);
            })
            .forget();
        }
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        // Timers only exist in the browser
        #[cfg(target_arch = "wasm32")]
        {
            let error_signal = self.error;
            gloo_timers::callback::Timeout::new(5000, move || {
                error_signal.set(None);
            })
            .forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::{restore, MemoryTokenStore, Session};

    fn test_state() -> GlobalState {
        GlobalState {
            session: create_rw_signal(None),
            auth_mode: create_rw_signal(AuthMode::Login),
            jobs: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        }
    }

    fn job(id: &str, status: JobStatus) -> Job {
        Job {
            id: id.to_string(),
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            status,
        }
    }

    #[test]
    fn bucket_counts_sum_to_snapshot_length() {
        let jobs = vec![
            job("1", JobStatus::Applied),
            job("2", JobStatus::Applied),
            job("3", JobStatus::Interview),
            job("4", JobStatus::Rejected),
        ];

        let counts = bucket_counts(&jobs);
        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, jobs.len());
        assert_eq!(counts[0], (JobStatus::Applied, 2));
        assert_eq!(counts[1], (JobStatus::Interview, 1));
        assert_eq!(counts[2], (JobStatus::Selected, 0));
        assert_eq!(counts[3], (JobStatus::Rejected, 1));
    }

    #[test]
    fn empty_snapshot_keeps_all_four_buckets() {
        let counts = bucket_counts(&[]);
        assert_eq!(counts.len(), 4);
        assert!(counts.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn blank_fields_block_job_submission() {
        assert!(!can_submit_job("", "Engineer"));
        assert!(!can_submit_job("Acme", ""));
        assert!(!can_submit_job("   ", "Engineer"));
        assert!(can_submit_job("Acme", "Engineer"));
    }

    #[test]
    fn job_deserializes_service_wire_format() {
        let json = r#"{"_id":"65a1","company":"Acme","role":"Engineer","status":"Interview","__v":0}"#;
        let parsed: Job = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, "65a1");
        assert_eq!(parsed.status, JobStatus::Interview);
    }

    #[test]
    fn job_without_status_defaults_to_applied() {
        let json = r#"{"_id":"65a2","company":"Acme","role":"Engineer"}"#;
        let parsed: Job = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.status, JobStatus::Applied);
    }

    #[test]
    fn status_parses_select_values() {
        for status in JobStatus::ALL {
            assert_eq!(JobStatus::parse(status.label()), Some(status));
        }
        assert_eq!(JobStatus::parse("Ghosted"), None);
    }

    #[test]
    fn logout_empties_jobs_and_returns_to_login() {
        let runtime = create_runtime();

        let state = test_state();
        let store = MemoryTokenStore::default();
        store.save("tok-123");
        state.session.set(Some(Session::new("tok-123")));
        state.auth_mode.set(AuthMode::Register);
        state.jobs.set(vec![job("1", JobStatus::Applied)]);

        state.logout(&store);

        assert_eq!(state.session.get_untracked(), None);
        assert!(state.jobs.get_untracked().is_empty());
        assert_eq!(state.auth_mode.get_untracked(), AuthMode::Login);
        assert_eq!(restore(&store), None);

        runtime.dispose();
    }

    #[test]
    fn registration_success_switches_to_login_without_authenticating() {
        let runtime = create_runtime();

        let state = test_state();
        state.auth_mode.set(AuthMode::Register);

        state.complete_registration();

        assert_eq!(state.auth_mode.get_untracked(), AuthMode::Login);
        assert_eq!(state.session.get_untracked(), None);
        assert!(state.success.get_untracked().is_some());

        runtime.dispose();
    }

    #[test]
    fn failed_mutation_surfaces_error_toast() {
        let runtime = create_runtime();

        let state = test_state();
        let ok = state.apply_mutation_result(Err("Network error: timeout".to_string()));

        assert!(!ok);
        assert_eq!(
            state.error.get_untracked(),
            Some("Network error: timeout".to_string())
        );

        assert!(state.apply_mutation_result(Ok(())));

        runtime.dispose();
    }
}
