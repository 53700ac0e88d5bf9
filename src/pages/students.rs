//! Resident directory. Admin only.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! {
        <PageHeader title="Students" description="Manage hostel residents and their room assignments."/>
        <section class="page-body page-body--students">
            <p class="page-body__empty">"No records to display."</p>
        </section>
    }
}
