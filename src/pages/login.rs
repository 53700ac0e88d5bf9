//! Login page: email + password against the hosted auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful sign-in emits `SignedIn`, the session store updates, and the
//! page navigates to the dashboard; the route gate then re-routes students to
//! their own landing page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::auth::AuthClient;
use crate::routing::table::{LOGIN, SIGNUP};
#[cfg(feature = "hydrate")]
use crate::routing::table::DASHBOARD;

pub(crate) const MISSING_EMAIL: &str = "Enter a valid email address.";
pub(crate) const MISSING_PASSWORD: &str = "Password is required.";
pub(crate) const REGISTERED_PARAM: &str = "registered";
pub(crate) const SIGN_UP_DONE: &str = "Account created. Check your email to verify your account.";

/// Where the sign-up page sends a freshly registered user.
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub(crate) fn login_after_sign_up_path() -> String {
    format!("{LOGIN}?{REGISTERED_PARAM}=1")
}

/// E-mail shape check: a non-empty local part and a dotted domain with no
/// empty labels.
pub(crate) fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Trim and check login input; the password is passed through untouched.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if !looks_like_email(email) {
        return Err(MISSING_EMAIL);
    }
    if password.is_empty() {
        return Err(MISSING_PASSWORD);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthClient>();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let message = move || {
        let text = info.get();
        if text.is_empty() && query.get().get(REGISTERED_PARAM).is_some() {
            SIGN_UP_DONE.to_owned()
        } else {
            text
        }
    };
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // On success the gate unmounts this page, so signals are only
                // touched on failure.
                match auth.sign_in_with_password(&email_value, &password_value).await {
                    Ok(_) => navigate(DASHBOARD, NavigateOptions::default()),
                    Err(e) => {
                        info.set(e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, &navigate, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <p class="auth-card__subtitle">"Enter your credentials to access your account"</p>
                <form class="auth-form" on:submit=on_submit>
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
                        "Login"
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <p class="auth-message">{message}</p>
                </Show>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href=SIGNUP>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
