//! Application layout: sidebar, top bar, and the screen content.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;
use crate::state::ui::UiState;

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class=move || layout_class(ui.get().sidebar_collapsed)>
            <Sidebar/>
            <div class="app-layout__main">
                <Topbar/>
                <main class="app-layout__content">{children()}</main>
            </div>
        </div>
    }
}

fn layout_class(collapsed: bool) -> &'static str {
    if collapsed { "app-layout app-layout--collapsed" } else { "app-layout" }
}
