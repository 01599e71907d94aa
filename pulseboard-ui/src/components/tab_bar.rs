//! Tab Bar Component
//!
//! Switches between the Reports and Settings views.

use leptos::*;

use crate::state::{use_dashboard_state, View};

/// Tab bar with one button per view
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <nav class="flex justify-center space-x-4 mb-8">
            {View::ALL.into_iter().map(|tab| view! { <TabButton target=tab /> }).collect_view()}
        </nav>
    }
}

#[component]
fn TabButton(target: View) -> impl IntoView {
    let state = use_dashboard_state();
    let is_active = create_memo(move |_| state.view.get() == target);

    let active_class = match target {
        View::Reports => "bg-[#0088FE]",
        View::Settings => "bg-[#00C49F]",
    };

    view! {
        <button
            on:click=move |_| state.select_view(target)
            class=move || {
                let base = "px-5 py-2 rounded-md text-white font-medium transition-colors";
                if is_active.get() {
                    format!("{} {}", base, active_class)
                } else {
                    format!("{} bg-gray-300 hover:bg-gray-400", base)
                }
            }
        >
            {target.label()}
        </button>
    }
}
