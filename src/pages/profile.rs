//! Profile screen showing the signed-in identity and role.

use leptos::prelude::*;

use crate::components::page_header::PageHeader;
use crate::state::session::use_session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    let name = move || session.get().display_name().unwrap_or_default().to_owned();
    let email = move || {
        session
            .get()
            .identity
            .and_then(|identity| identity.email)
            .unwrap_or_default()
    };
    let user_id = move || session.get().identity.map(|identity| identity.id).unwrap_or_default();
    let role = move || session.get().role.map(|role| role.as_str()).unwrap_or_default();

    view! {
        <PageHeader title="Profile" description="Your account details."/>
        <dl class="profile">
            <dt>"Name"</dt>
            <dd>{name}</dd>
            <dt>"Email"</dt>
            <dd>{email}</dd>
            <dt>"Role"</dt>
            <dd class="profile__role">{role}</dd>
            <dt>"User ID"</dt>
            <dd class="profile__id">{user_id}</dd>
        </dl>
    }
}
