//! Placeholder for screens that are not built yet.

use leptos::prelude::*;

#[component]
pub fn ComingSoonPage(endpoint: &'static str) -> impl IntoView {
    view! {
        <section class="coming-soon">
            <h2>"Coming Soon"</h2>
            <p>"The " <code>{endpoint}</code> " page is under construction."</p>
        </section>
    }
}
