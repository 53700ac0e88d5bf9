//! Sign-up page. Every self-registered account is a student; admins are
//! provisioned on the backend.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use super::login::login_after_sign_up_path;
use super::login::{MISSING_EMAIL, looks_like_email};
use crate::net::auth::AuthClient;
use crate::routing::table::LOGIN;

pub(crate) const MIN_NAME_CHARS: usize = 2;
pub(crate) const MIN_PASSWORD_CHARS: usize = 8;
pub(crate) const NAME_TOO_SHORT: &str = "Full name is required.";
pub(crate) const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SignUpInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_sign_up_input(full_name: &str, email: &str, password: &str) -> Result<SignUpInput, &'static str> {
    let full_name = full_name.trim();
    if full_name.chars().count() < MIN_NAME_CHARS {
        return Err(NAME_TOO_SHORT);
    }
    let email = email.trim();
    if !looks_like_email(email) {
        return Err(MISSING_EMAIL);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PASSWORD_TOO_SHORT);
    }
    Ok(SignUpInput {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<AuthClient>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_sign_up_input(&full_name.get(), &email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.sign_up(&input.full_name, &input.email, &input.password).await {
                    Ok(()) => navigate(&login_after_sign_up_path(), NavigateOptions::default()),
                    Err(e) => {
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &navigate, input);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign Up"</h1>
                <p class="auth-card__subtitle">"Enter your information to create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-label" for="full-name">"Full name"</label>
                    <input
                        id="full-name"
                        class="auth-input"
                        type="text"
                        placeholder="Jane Doe"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <label class="auth-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="m@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="button" type="submit" disabled=move || busy.get()>
                        "Create an account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
