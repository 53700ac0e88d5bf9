//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_layout::AppLayout;
use crate::components::route_gate::RouteGate;
use crate::config::AuthConfig;
use crate::net::auth::AuthClient;
use crate::pages::{
    complaints::ComplaintsPage, dashboard::DashboardPage, fees::FeesPage, landing::LandingPage, login::LoginPage,
    notices::NoticesPage, profile::ProfilePage, reports::ReportsPage, rooms::RoomsPage, signup::SignUpPage,
    students::StudentsPage, visitors::VisitorsPage,
};
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::util::theme;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store, starts the session resolver in the browser, and
/// wraps every route in the route gate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    let auth = AuthClient::new(AuthConfig::from_build_env());
    let ui = RwSignal::new(UiState::with_theme(theme::read_preference()));

    provide_context(store.clone());
    provide_context(auth.clone());
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        let resolver = crate::state::session::SessionResolver::new(store, auth);
        leptos::task::spawn_local(async move {
            resolver.initialize().await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, auth);
    }

    Effect::new(move || theme::apply(ui.get().theme));

    view! {
        <Stylesheet id="leptos" href="/pkg/hostel-client.css"/>
        <Title text="Hostel Management System"/>

        <Router>
            <RouteGate>
                <Routes fallback=|| view! { <div class="route-loading"></div> }>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! { <AppLayout><DashboardPage/></AppLayout> }
                    />
                    <Route path=StaticSegment("students") view=|| view! { <AppLayout><StudentsPage/></AppLayout> }/>
                    <Route path=StaticSegment("rooms") view=|| view! { <AppLayout><RoomsPage/></AppLayout> }/>
                    <Route path=StaticSegment("fees") view=|| view! { <AppLayout><FeesPage/></AppLayout> }/>
                    <Route path=StaticSegment("visitors") view=|| view! { <AppLayout><VisitorsPage/></AppLayout> }/>
                    <Route
                        path=StaticSegment("complaints")
                        view=|| view! { <AppLayout><ComplaintsPage/></AppLayout> }
                    />
                    <Route path=StaticSegment("notices") view=|| view! { <AppLayout><NoticesPage/></AppLayout> }/>
                    <Route path=StaticSegment("reports") view=|| view! { <AppLayout><ReportsPage/></AppLayout> }/>
                    <Route path=StaticSegment("profile") view=|| view! { <AppLayout><ProfilePage/></AppLayout> }/>
                </Routes>
            </RouteGate>
        </Router>
    }
}
