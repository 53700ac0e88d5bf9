//! Notices screen; the default landing page for students.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::state::session::use_session;

#[component]
pub fn NoticesPage() -> impl IntoView {
    let session = use_session();
    let description = Signal::derive(move || {
        let text = if session.get().is_admin() {
            "Post announcements for all residents."
        } else {
            "Announcements from the hostel office."
        };
        text.to_owned()
    });

    view! {
        <PageHeader title="Notices" description=description/>
        <section class="page-body page-body--notices">
            <p class="page-body__empty">"No notices have been posted."</p>
        </section>
    }
}
