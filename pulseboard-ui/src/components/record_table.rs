//! Record Table Component
//!
//! Lists every record with a delete action per row.

use leptos::*;

use crate::state::use_dashboard_state;

#[component]
pub fn RecordTable() -> impl IntoView {
    let state = use_dashboard_state();

    view! {
        <section class="mt-12">
            <h3 class="text-xl font-semibold mb-3">"Raw Data Table"</h3>
            <table class="w-full bg-white rounded-lg overflow-hidden border-collapse">
                <thead class="bg-gray-100">
                    <tr>
                        <th class="border border-gray-200 p-3">"Category"</th>
                        <th class="border border-gray-200 p-3">"Value"</th>
                        <th class="border border-gray-200 p-3">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || state.records.get()
                        key=|record| record.id.clone()
                        children=move |record| {
                            let id = record.id.clone();
                            view! {
                                <tr class="border-b border-gray-100">
                                    <td class="p-3">{record.category}</td>
                                    <td class="p-3">{record.value}</td>
                                    <td class="p-3 text-center">
                                        <button
                                            on:click=move |_| state.delete(id.clone())
                                            class="px-3 py-1 bg-red-600 hover:bg-red-700 text-white rounded-md"
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
