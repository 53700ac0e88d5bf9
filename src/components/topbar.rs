//! Top bar: sidebar toggle, screen title, viewer badge, theme toggle, sign-out.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::auth::AuthClient;
use crate::routing::nav::screen_title;
use crate::routing::table::PROFILE;
use crate::state::session::use_session;
use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn Topbar() -> impl IntoView {
    let session = use_session();
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<AuthClient>();
    let location = use_location();

    let title = move || screen_title(&session.get(), &location.pathname.get()).unwrap_or_default();
    let user_name = move || session.get().display_name().unwrap_or_default().to_owned();
    let role_badge = move || session.get().role.map(|role| role.as_str()).unwrap_or_default();

    let on_toggle_sidebar = move |_| ui.update(UiState::toggle_sidebar);
    let on_toggle_theme = move |_| {
        ui.update(UiState::cycle_theme);
        theme::save_preference(ui.get_untracked().theme);
    };
    let theme_label = move || ui.get().theme.label();

    let signing_out = RwSignal::new(false);
    let on_sign_out = move |_| {
        if signing_out.get() {
            return;
        }
        signing_out.set(true);
        let auth = auth.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // Success publishes `SignedOut` and the gate leaves this layout.
            if let Err(e) = auth.sign_out().await {
                log::warn!("sign out failed: {e}");
                signing_out.set(false);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    };

    view! {
        <header class="topbar">
            <button class="topbar__toggle" title="Toggle sidebar" on:click=on_toggle_sidebar>
                <span class="nav-icon nav-icon--menu"></span>
            </button>
            <h2 class="topbar__title">{title}</h2>
            <div class="topbar__spacer"></div>
            <button class="topbar__theme" title="Toggle theme" on:click=on_toggle_theme>
                {theme_label}
            </button>
            <a href=PROFILE class="topbar__user">
                <span class="topbar__name">{user_name}</span>
                <span class="topbar__role">{role_badge}</span>
            </a>
            <button class="topbar__sign-out" on:click=on_sign_out disabled=move || signing_out.get()>
                "Sign out"
            </button>
        </header>
    }
}
