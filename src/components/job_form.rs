//! Job Form Component
//!
//! Form for adding a new job application.

use leptos::*;

use crate::api;
use crate::state::global::{can_submit_job, GlobalState};

/// Add-job form. Submitting with a blank company or role is a no-op: no
/// request is issued and the list is untouched.
#[component]
pub fn JobForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (company, set_company) = create_signal(String::new());
    let (role, set_role) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let company_v = company.get();
        let role_v = role.get();

        if !can_submit_job(&company_v, &role_v) {
            return;
        }

        let Some(current) = state.session.get_untracked() else {
            return;
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            let result = api::add_job(&current.token, &company_v, &role_v).await;
            if state_clone.apply_mutation_result(result) {
                set_company.set(String::new());
                set_role.set(String::new());
                state_clone.refresh_jobs().await;
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="grid md:grid-cols-2 gap-4">
                <input
                    type="text"
                    placeholder="Company"
                    prop:value=move || company.get()
                    on:input=move |ev| set_company.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <input
                    type="text"
                    placeholder="Role"
                    prop:value=move || role.get()
                    on:input=move |ev| set_role.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full md:w-auto px-6 bg-primary-600 hover:bg-primary-700
                       disabled:bg-gray-600 disabled:cursor-not-allowed rounded-lg py-3
                       font-semibold transition-colors"
            >
                {move || if submitting.get() { "Adding..." } else { "Add Job" }}
            </button>
        </form>
    }
}
