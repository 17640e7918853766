//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::{LoggedIn, RouteGate};
use crate::config::AppConfig;
use crate::pages::{
    account::AccountPage, coming_soon::ComingSoonPage, edit_routine::EditRoutinePage, login::LoginPage,
    logout::LogoutPage, not_found::NotFoundPage, routines::RoutineOverviewPage, signup::SignupPage,
};
use crate::routes::AppRoute;
use crate::session::SessionContext;

/// Root application component.
///
/// Restores the session once, provides it and the config as context, and
/// maps every entry of the route table to its gated screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    let session = SessionContext::from_config(&config);
    provide_context(config);
    provide_context(session);

    let state = session.state();

    view! {
        <Title text="Routine Tracker"/>
        <header class="app-header">
            <h1>"Routine Tracker"</h1>
        </header>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment(AppRoute::RoutineOverview.segment())
                    view=move || view! {
                        <LoggedIn route=AppRoute::RoutineOverview>
                            <RoutineOverviewPage session=state/>
                        </LoggedIn>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::Account.segment())
                    view=move || view! {
                        <LoggedIn route=AppRoute::Account>
                            <AccountPage session=state/>
                        </LoggedIn>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::EditRoutine.segment())
                    view=move || view! {
                        <LoggedIn route=AppRoute::EditRoutine>
                            <EditRoutinePage session=state/>
                        </LoggedIn>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::Exercises.segment())
                    view=|| view! {
                        <LoggedIn route=AppRoute::Exercises>
                            <ComingSoonPage endpoint="exercises"/>
                        </LoggedIn>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::Login.segment())
                    view=move || view! {
                        <RouteGate route=AppRoute::Login>
                            <LoginPage session=state set_session=session.setter()/>
                        </RouteGate>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::Logout.segment())
                    view=move || view! {
                        <RouteGate route=AppRoute::Logout>
                            <LogoutPage on_logout=session.logout_action()/>
                        </RouteGate>
                    }
                />
                <Route
                    path=StaticSegment(AppRoute::Signup.segment())
                    view=|| view! {
                        <RouteGate route=AppRoute::Signup>
                            <SignupPage/>
                        </RouteGate>
                    }
                />
            </Routes>
        </Router>
    }
}
