//! Settings Page
//!
//! Add records or wipe the collection.

use leptos::*;

use crate::components::RecordForm;
use crate::state::use_dashboard_state;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <div class="space-y-4">
            <RecordForm />

            <button
                on:click=move |_| state.reset()
                class="block mx-auto mt-3 p-3 bg-red-600 hover:bg-red-700 text-white rounded-md font-medium"
            >
                "Reset All Data"
            </button>
        </div>
    }
}
