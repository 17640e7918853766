//! Account screen: the signed-in user's profile as held in the session.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;

use crate::session::SessionState;

const NOT_SET: &str = "Not set";

/// Label/value rows for the profile table; empty when anonymous.
pub(crate) fn account_rows(state: &SessionState) -> Vec<(&'static str, String)> {
    let Some(session) = state.session() else {
        return Vec::new();
    };
    vec![
        ("Name", session.name().unwrap_or(NOT_SET).to_owned()),
        ("Email", session.email().unwrap_or(NOT_SET).to_owned()),
    ]
}

#[component]
pub fn AccountPage(session: ReadSignal<SessionState>) -> impl IntoView {
    let rows = move || {
        session
            .with(account_rows)
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <tr>
                        <th>{label}</th>
                        <td>{value}</td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="account">
            <h2>"Account"</h2>
            <table class="account__details">
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
