//! Applies the navigation guard to every route change.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the router's `Routes`. Re-evaluates [`decide`] whenever the session
//! or the location changes and renders children only when the decision is
//! `Allow`; redirects replace the history entry.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routing::guard::{Decision, decide};
use crate::state::session::use_session;

#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| decide(&session.get(), &location.pathname.get()));

    Effect::new(move || {
        if let Decision::Redirect(target) = decision.get() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show
            when=move || decision.get() == Decision::Allow
            fallback=|| view! {
                <div class="route-loading" aria-busy="true">
                    <span class="route-loading__spinner"></span>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
