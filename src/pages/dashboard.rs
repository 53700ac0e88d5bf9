//! Admin dashboard: the admin landing page, linking every management screen.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::routing::nav::ADMIN_NAV;
use crate::routing::table::DASHBOARD;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let cards = ADMIN_NAV
        .iter()
        .filter(|entry| entry.path != DASHBOARD)
        .map(|entry| {
            let icon_class = format!("nav-icon nav-icon--{}", entry.icon);
            view! {
                <a href=entry.path class="dashboard-card">
                    <span class=icon_class></span>
                    <span class="dashboard-card__label">{entry.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <PageHeader title="Dashboard" description="Overview of hostel operations."/>
        <section class="dashboard-grid">{cards}</section>
    }
}
