//! Visitor log. Admin only.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[component]
pub fn VisitorsPage() -> impl IntoView {
    view! {
        <PageHeader title="Visitors" description="Visitor log with check-in and check-out times."/>
        <section class="page-body page-body--visitors">
            <p class="page-body__empty">"No records to display."</p>
        </section>
    }
}
