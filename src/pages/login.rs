//! Login page: email + password against the API.
//!
//! On success the returned identity is handed to the session setter, which
//! persists it and flips the app to `Authenticated`, then the user is sent
//! to the routine overview.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::config::AppConfig;
use crate::routes::AppRoute;
use crate::session::{Session, SessionState};

pub(crate) const MISSING_FIELDS: &str = "Email and password are required.";

/// Trim the email and require both fields.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage(session: ReadSignal<SessionState>, set_session: Callback<Session>) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&config, &email_value, &password_value).await {
                    Ok(session) => {
                        set_session.run(session);
                        navigate(AppRoute::RoutineOverview.path(), NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, email_value, password_value, &set_session);
            info.set(crate::net::api::UNAVAILABLE.to_owned());
            busy.set(false);
        }
    };

    let signed_in_as = move || {
        session.with(|s| s.session().map(|user| format!("Signed in as {}.", user.display_name())))
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log In"</h1>
                <Show when=move || session.with(SessionState::is_authenticated)>
                    <p class="login-message">{signed_in_as}</p>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Log In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <A href=AppRoute::Signup.path()>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
