//! Toast Notification Component
//!
//! Shows the dashboard's current notice.

use leptos::*;

use crate::state::dashboard::NoticeKind;
use crate::state::use_dashboard_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50">
            {move || {
                state.notice.get().map(|notice| {
                    let (icon, bg_class) = match notice.kind {
                        NoticeKind::Success => ("✓", "bg-green-600"),
                        NoticeKind::Error => ("✕", "bg-red-600"),
                    };

                    view! {
                        <div class=format!(
                            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg",
                            bg_class
                        )>
                            <span class="text-lg">{icon}</span>
                            <span class="text-sm font-medium">{notice.message}</span>
                            <button
                                on:click=move |_| state.dismiss_notice()
                                class="ml-2 text-white/70 hover:text-white"
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
