//! Room inventory. Admin only.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;

#[component]
pub fn RoomsPage() -> impl IntoView {
    view! {
        <PageHeader title="Rooms" description="Room inventory, capacity, and occupancy."/>
        <section class="page-body page-body--rooms">
            <p class="page-body__empty">"No records to display."</p>
        </section>
    }
}
