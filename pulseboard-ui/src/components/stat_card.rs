//! Stat Card Component
//!
//! Displays one headline number.

use leptos::*;

#[component]
pub fn StatCard(
    /// Caption above the number
    label: &'static str,
    /// Rendered value
    #[prop(into)]
    value: Signal<String>,
    /// CSS color of the number
    #[prop(default = "#0088FE")]
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl shadow-md p-5 m-2 flex-1 min-w-[250px] text-center">
            <h3 class="text-lg font-semibold text-gray-700">{label}</h3>
            <p class="text-3xl font-bold mt-2" style=format!("color: {}", color)>
                {move || value.get()}
            </p>
        </div>
    }
}
