//! Record Form Component
//!
//! Form for adding a single record.

use leptos::*;

use crate::state::use_dashboard_state;

/// Add-record form bound to the dashboard's pending form state
#[component]
pub fn RecordForm() -> impl IntoView {
    let state = use_dashboard_state();
    let form = state.form;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.submit_form();
    };

    view! {
        <form on:submit=on_submit class="flex flex-col max-w-md mx-auto">
            <input
                type="text"
                placeholder="Category"
                prop:value=move || form.with(|f| f.category.clone())
                on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                class="my-1 p-3 rounded-md border border-gray-300 focus:border-[#0088FE] focus:outline-none"
            />
            <input
                type="number"
                placeholder="Value"
                prop:value=move || form.with(|f| f.value.clone())
                on:input=move |ev| form.update(|f| f.value = event_target_value(&ev))
                class="my-1 p-3 rounded-md border border-gray-300 focus:border-[#0088FE] focus:outline-none"
            />
            <button
                type="submit"
                class="mt-3 p-3 bg-[#0088FE] hover:bg-blue-600 text-white rounded-md font-medium transition-colors"
            >
                "Add Data"
            </button>
        </form>
    }
}
