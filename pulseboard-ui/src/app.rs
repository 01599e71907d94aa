//! App Root Component
//!
//! Owns the dashboard state and switches between tabs.

use leptos::*;

use crate::components::{TabBar, Toast};
use crate::pages::{Reports, Settings};
use crate::state::{provide_dashboard_state, View};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_dashboard_state();

    // Initial fetch
    state.load();

    view! {
        <div class="min-h-screen bg-gray-100 p-8 font-sans">
            <h1 class="text-3xl font-bold text-center mb-8">"Admin Dashboard"</h1>

            <TabBar />

            <main class="container mx-auto">
                {move || match state.view.get() {
                    View::Reports => view! { <Reports /> }.into_view(),
                    View::Settings => view! { <Settings /> }.into_view(),
                }}
            </main>

            <Toast />
        </div>
    }
}
