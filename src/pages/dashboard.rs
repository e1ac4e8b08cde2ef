//! Dashboard Page
//!
//! Authenticated view: status chart, add-job form, and the job list.

use leptos::*;

use crate::components::{JobForm, JobList, Loading, StatusChart};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the initial snapshot on mount. This covers both fresh logins
    // and sessions restored from the token slot at startup.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.refresh_jobs().await;
        });
    });

    let loading = state.loading;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"My Job Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your applications at a glance"</p>
            </div>

            // Status breakdown chart
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Status Breakdown"</h2>

                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <StatusChart /> }.into_view()
                    }
                }}
            </section>

            // Add job
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Add Job"</h2>
                <JobForm />
            </section>

            // Applications
            <section>
                <h2 class="text-xl font-semibold mb-4">"Applications"</h2>
                <JobList />
            </section>
        </div>
    }
}
