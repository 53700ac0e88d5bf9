//! Fees screen. Admins see every ledger; students see their own statement
//! under the "My Fees" label.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::routing::nav::screen_title;
use crate::routing::table::FEES;
use crate::state::session::use_session;

/// Payment states a fee record can be in.
pub const FEE_STATUSES: [&str; 3] = ["Paid", "Partial", "Unpaid"];

#[component]
pub fn FeesPage() -> impl IntoView {
    let session = use_session();
    let title = Signal::derive(move || screen_title(&session.get(), FEES).unwrap_or("Fees").to_owned());
    let description = Signal::derive(move || {
        let text = if session.get().is_admin() {
            "Record payments and track outstanding balances."
        } else {
            "Your fee statement: total, paid, and balance."
        };
        text.to_owned()
    });

    view! {
        <PageHeader title=title description=description/>
        <ul class="status-legend">
            {FEE_STATUSES
                .iter()
                .map(|status| view! { <li class="status-legend__item">{*status}</li> })
                .collect_view()}
        </ul>
        <section class="page-body page-body--fees">
            <p class="page-body__empty">"No fee records yet."</p>
        </section>
    }
}
