//! Complaints screen. Students submit and follow their own complaints;
//! admins triage all of them.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::routing::nav::screen_title;
use crate::routing::table::COMPLAINTS;
use crate::state::session::use_session;

pub const COMPLAINT_STATUSES: [&str; 3] = ["Pending", "In Progress", "Resolved"];

#[component]
pub fn ComplaintsPage() -> impl IntoView {
    let session = use_session();
    let is_admin = move || session.get().is_admin();
    let title = Signal::derive(move || {
        screen_title(&session.get(), COMPLAINTS)
            .unwrap_or("Complaints")
            .to_owned()
    });
    let description = Signal::derive(move || {
        let text = if is_admin() {
            "Review and resolve resident complaints."
        } else {
            "Submit a complaint and follow its status."
        };
        text.to_owned()
    });

    view! {
        <PageHeader title=title description=description/>
        <ul class="status-legend">
            {COMPLAINT_STATUSES
                .iter()
                .map(|status| view! { <li class="status-legend__item">{*status}</li> })
                .collect_view()}
        </ul>
        <section class="page-body page-body--complaints">
            <p class="page-body__empty">
                {move || if is_admin() { "No open complaints." } else { "You have not filed any complaints." }}
            </p>
        </section>
    }
}
