//! Auth Form Components
//!
//! Login and registration forms for the unauthenticated view. With the
//! `registration` capability enabled, both forms run the pure pre-flight
//! validation before anything is sent, and the password input grows a
//! show/hide toggle.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::session::{self, BrowserTokenStore};

#[cfg(feature = "registration")]
use crate::validate;

/// Login form
#[component]
pub fn LoginForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_v = email.get();
        let password_v = password.get();

        // Pre-flight checks block the call entirely
        #[cfg(feature = "registration")]
        if let Err(msg) = validate::validate_credentials(&email_v, &password_v) {
            state.show_error(&msg);
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::login(&email_v, &password_v).await {
                Ok(token) => {
                    let new_session = session::establish(&BrowserTokenStore, token);
                    state_clone.session.set(Some(new_session));
                    state_clone.refresh_jobs().await;
                }
                Err(_) => {
                    // Generic notice; no detail leaked
                    state_clone.show_error("Invalid email or password");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                <input
                    type="text"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <PasswordField value=password set_value=set_password />

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                {move || if submitting.get() { "Signing in..." } else { "Login" }}
            </button>
        </form>
    }
}

/// Registration form. Success returns to the login sub-mode without
/// authenticating.
#[cfg(feature = "registration")]
#[component]
pub fn RegisterForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name_v = name.get();
        let email_v = email.get();
        let password_v = password.get();

        if let Err(msg) = validate::validate_credentials(&email_v, &password_v) {
            state.show_error(&msg);
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::register(&name_v, &email_v, &password_v).await {
                Ok(()) => {
                    state_clone.complete_registration();
                }
                Err(e) => {
                    // Service-provided message when present
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div>
                <label class="block text-sm text-gray-400 mb-2">"Name"</label>
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <div>
                <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                <input
                    type="text"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            <PasswordField value=password set_value=set_password />

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                {move || if submitting.get() { "Creating account..." } else { "Register" }}
            </button>
        </form>
    }
}

/// Password input with show/hide toggle
#[cfg(feature = "registration")]
#[component]
pub fn PasswordField(value: ReadSignal<String>, set_value: WriteSignal<String>) -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Password"</label>
            <div class="relative">
                <input
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder="Password"
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 pr-16 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="button"
                    on:click=move |_| set_visible.update(|v| *v = !*v)
                    class="absolute inset-y-0 right-0 px-3 text-sm text-gray-400 hover:text-white"
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}

/// Plain password input
#[cfg(not(feature = "registration"))]
#[component]
pub fn PasswordField(value: ReadSignal<String>, set_value: WriteSignal<String>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Password"</label>
            <input
                type="password"
                placeholder="Password"
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}
