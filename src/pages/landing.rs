//! Public landing page.

use leptos::prelude::*;

use crate::routing::table::{LOGIN, SIGNUP};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <header class="landing-page__nav">
                <span class="landing-page__brand">"Hostel Management System"</span>
                <a href=LOGIN class="button button--ghost">"Login"</a>
            </header>
            <section class="landing-page__hero">
                <h1>"Run your residence from one place"</h1>
                <p>
                    "Track students and room allocations, collect fees, log visitors, "
                    "and keep residents informed with notices and complaint tracking."
                </p>
                <div class="landing-page__actions">
                    <a href=SIGNUP class="button">"Get started"</a>
                    <a href=LOGIN class="button button--ghost">"Sign in"</a>
                </div>
            </section>
            <footer class="landing-page__footer">
                "Hostel Management System. All rights reserved."
            </footer>
        </div>
    }
}
