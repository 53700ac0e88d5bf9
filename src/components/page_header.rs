//! Title block shared by the screens inside the application layout.

use leptos::prelude::*;

#[component]
pub fn PageHeader(#[prop(into)] title: Signal<String>, #[prop(into)] description: Signal<String>) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{move || title.get()}</h1>
            <p class="page-header__description">{move || description.get()}</p>
        </header>
    }
}
