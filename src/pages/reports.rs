//! Reports. Admin only.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[component]
pub fn ReportsPage() -> impl IntoView {
    view! {
        <PageHeader title="Reports" description="Occupancy, fee collection, and complaint summaries."/>
        <section class="page-body page-body--reports">
            <p class="page-body__empty">"No records to display."</p>
        </section>
    }
}
