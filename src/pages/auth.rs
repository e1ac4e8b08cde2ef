//! Auth Page
//!
//! Unauthenticated view with Login and Register sub-modes. Switching
//! between the two is a pure local transition; registration success also
//! returns here (to Login) without authenticating.

use leptos::*;

use crate::components::LoginForm;
use crate::state::global::{AuthMode, GlobalState};

/// Unauthenticated page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let mode = state.auth_mode;

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <div class="w-full max-w-md bg-gray-800 rounded-xl p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-2xl font-bold">{move || heading(mode.get())}</h1>
                    <p class="text-gray-400 mt-1">"Track your job applications in one place"</p>
                </div>

                {move || match mode.get() {
                    AuthMode::Login => view! { <LoginForm /> }.into_view(),
                    AuthMode::Register => register_form(),
                }}

                {mode_switch()}
            </div>
        </div>
    }
}

fn heading(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Login",
        AuthMode::Register => "Create Account",
    }
}

#[cfg(feature = "registration")]
fn register_form() -> View {
    use crate::components::RegisterForm;

    view! { <RegisterForm /> }.into_view()
}

#[cfg(not(feature = "registration"))]
fn register_form() -> View {
    view! {}.into_view()
}

/// Link toggling between the two sub-modes; no network effect.
#[cfg(feature = "registration")]
fn mode_switch() -> View {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let mode = state.auth_mode;

    view! {
        <div class="text-center text-sm text-gray-400">
            {move || match mode.get() {
                AuthMode::Login => view! {
                    <button
                        on:click=move |_| mode.set(AuthMode::Register)
                        class="text-primary-400 hover:underline"
                    >
                        "Need an account? Register"
                    </button>
                }.into_view(),
                AuthMode::Register => view! {
                    <button
                        on:click=move |_| mode.set(AuthMode::Login)
                        class="text-primary-400 hover:underline"
                    >
                        "Already have an account? Login"
                    </button>
                }.into_view(),
            }}
        </div>
    }
    .into_view()
}

#[cfg(not(feature = "registration"))]
fn mode_switch() -> View {
    view! {}.into_view()
}
