//! Job List Component
//!
//! Job cards with a status selector and a delete button. Every mutation
//! re-fetches the full snapshot; nothing is patched locally.

use leptos::*;

use crate::api;
use crate::state::global::{GlobalState, Job, JobStatus};

/// List of job cards for the current snapshot
#[component]
pub fn JobList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let jobs = state.jobs;
    let loading = state.loading;

    view! {
        <div class="space-y-3">
            {move || {
                if loading.get() {
                    view! {
                        <p class="text-gray-400">"Loading jobs..."</p>
                    }.into_view()
                } else if jobs.get().is_empty() {
                    view! {
                        <p class="text-gray-400">"No applications tracked yet."</p>
                    }.into_view()
                } else {
                    jobs.get()
                        .into_iter()
                        .map(|job| view! { <JobCard job=job /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// A single job application card
#[component]
fn JobCard(job: Job) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let status = job.status;
    let id_for_status = job.id.clone();
    let id_for_delete = job.id.clone();

    let state_for_status = state.clone();
    let on_status_change = move |ev: web_sys::Event| {
        // Only the four enum values are representable through the control
        let Some(new_status) = JobStatus::parse(&event_target_value(&ev)) else {
            return;
        };
        let Some(current) = state_for_status.session.get_untracked() else {
            return;
        };

        let id = id_for_status.clone();
        let state_clone = state_for_status.clone();
        spawn_local(async move {
            let result = api::update_status(&current.token, &id, new_status).await;
            if state_clone.apply_mutation_result(result) {
                state_clone.refresh_jobs().await;
            }
        });
    };

    let state_for_delete = state;
    let on_delete = move |_| {
        let Some(current) = state_for_delete.session.get_untracked() else {
            return;
        };

        let id = id_for_delete.clone();
        let state_clone = state_for_delete.clone();
        spawn_local(async move {
            let result = api::delete_job(&current.token, &id).await;
            if state_clone.apply_mutation_result(result) {
                state_clone.refresh_jobs().await;
            }
        });
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between gap-3">
                <div>
                    <h3 class="font-semibold text-lg">{job.company.clone()}</h3>
                    <p class="text-gray-400">{job.role.clone()}</p>
                </div>

                <div class="flex items-center space-x-3">
                    <span
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", status.color())
                    />
                    <select
                        on:change=on_status_change
                        class="bg-gray-700 rounded-lg px-3 py-2 text-white
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {JobStatus::ALL
                            .into_iter()
                            .map(|s| view! {
                                <option value=s.label() selected={s == status}>
                                    {s.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>

                    <button
                        on:click=on_delete
                        class="px-4 py-2 bg-red-600 hover:bg-red-700 rounded-lg
                               text-sm font-medium transition-colors"
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
