//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{AuthPage, Dashboard};
use crate::state::global::{provide_global_state, GlobalState};
use crate::state::session::{self, BrowserTokenStore};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    // Restore a previously stored session before first render. The token is
    // not validated locally; a stale one surfaces as a failed request.
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    if let Some(existing) = session::restore(&BrowserTokenStore) {
        state.session.set(Some(existing));
    }

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with session status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Root route: auth card when unauthenticated, dashboard otherwise
#[component]
fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;

    view! {
        {move || {
            if session.get().is_some() {
                view! { <Dashboard /> }.into_view()
            } else {
                view! { <AuthPage /> }.into_view()
            }
        }}
    }
}

/// Footer component showing session and loading status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = state.session;
    let loading = state.loading;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                // Session status
                <div class="flex items-center space-x-2">
                    {move || {
                        if session.get().is_some() {
                            view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span>"Signed in"</span>
                                </span>
                            }.into_view()
                        } else {
                            view! {
                                <span class="flex items-center space-x-1 text-gray-400">
                                    <span class="w-2 h-2 bg-gray-400 rounded-full" />
                                    <span>"Signed out"</span>
                                </span>
                            }.into_view()
                        }
                    }}
                </div>

                // Loading indicator
                {move || {
                    if loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-primary-400">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Loading..."</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {}.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
