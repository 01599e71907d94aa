//! Reports Page
//!
//! Summary cards, charts and the raw record table.

use leptos::*;

use crate::components::{Chart, ChartKind, RecordTable, StatCard};
use crate::state::use_dashboard_state;

/// Reports page component
#[component]
pub fn Reports() -> impl IntoView {
    let state = use_dashboard_state();

    let record_count = Signal::derive(move || state.records.with(Vec::len).to_string());
    let total = Signal::derive(move || state.total_value().to_string());

    view! {
        <div>
            // Top stats
            <div class="flex flex-wrap justify-around">
                <StatCard label="Total Categories" value=record_count />
                <StatCard label="Total Value" value=total color="#00C49F" />
            </div>

            // Charts
            <div class="flex flex-wrap justify-around mt-10">
                <Chart kind=ChartKind::Bar />
                <Chart kind=ChartKind::Line />
                <Chart kind=ChartKind::Pie />
            </div>

            <RecordTable />
        </div>
    }
}
