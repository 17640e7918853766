//! Logout page. Ends the session as soon as it mounts.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::AppConfig;
use crate::routes::AppRoute;

#[component]
pub fn LogoutPage(on_logout: Callback<()>) -> impl IntoView {
    let config = expect_context::<AppConfig>();

    // No tracked reads, so this runs once after mount.
    Effect::new(move || {
        on_logout.run(());
        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move { crate::net::api::logout(&config).await });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &config;
        }
    });

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Logged Out"</h1>
                <p class="login-message">"You have been logged out."</p>
                <A href=AppRoute::Login.path()>"Log in again"</A>
            </div>
        </div>
    }
}
