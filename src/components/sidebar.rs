//! Sidebar with the viewer's navigation menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entries come from [`nav_entries`]; hiding an entry is cosmetic, the route
//! gate still guards direct path entry.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routing::nav::{brand_path, is_active, nav_entries};
use crate::state::session::use_session;
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let collapsed = move || ui.get().sidebar_collapsed;
    let aside_class = move || if collapsed() { "sidebar sidebar--collapsed" } else { "sidebar" };
    let brand_href = move || brand_path(&session.get());

    let entries = move || {
        let current = location.pathname.get();
        nav_entries(&session.get())
            .iter()
            .map(|entry| {
                let active = is_active(entry, &current);
                let link_class = if active { "sidebar__link sidebar__link--active" } else { "sidebar__link" };
                let aria_current = active.then_some("page");
                let icon_class = format!("nav-icon nav-icon--{}", entry.icon);
                view! {
                    <a
                        href=entry.path
                        class=link_class
                        title=entry.label
                        aria-current=aria_current
                    >
                        <span class=icon_class></span>
                        <Show when=move || !collapsed()>
                            <span class="sidebar__label">{entry.label}</span>
                        </Show>
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <aside class=aside_class>
            <div class="sidebar__brand">
                <a href=brand_href class="sidebar__brand-link">
                    <span class="nav-icon nav-icon--building"></span>
                    <Show when=move || !collapsed()>
                        <span>"HMS"</span>
                    </Show>
                </a>
            </div>
            <nav class="sidebar__nav">{entries}</nav>
        </aside>
    }
}
