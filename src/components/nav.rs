//! Navigation Component
//!
//! Header bar with brand and, when authenticated, a logout button.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::session::BrowserTokenStore;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"💼"</span>
                        <span class="text-xl font-bold text-white">"JobTrack"</span>
                    </div>

                    {move || {
                        if session.get().is_some() {
                            view! { <LogoutButton /> }.into_view()
                        } else {
                            view! {}.into_view()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Logout: clears the stored token and the in-memory job list. No
/// server-side call is made.
#[component]
fn LogoutButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_click = move |_| {
        state.logout(&BrowserTokenStore);
    };

    view! {
        <button
            on:click=on_click
            class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                   text-sm font-medium transition-colors"
        >
            "Logout"
        </button>
    }
}
