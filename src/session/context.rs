//! Reactive session handle shared with the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds exactly one `SessionContext` and provides it via context.
//! The controller lives in a `StoredValue`; its state is mirrored into an
//! `RwSignal` so route gates and screens re-render on every transition.
//! Consumers get a read-only signal plus the two mutation entry points.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use super::controller::SessionController;
use super::model::{Persistence, Session, SessionState};
use super::store::{DefaultBackend, SessionStore};
use crate::config::AppConfig;

#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    controller: StoredValue<SessionController<DefaultBackend>>,
}

impl SessionContext {
    /// Build the controller over `store` and restore synchronously.
    pub fn new(store: SessionStore<DefaultBackend>) -> Self {
        let mut controller = SessionController::new(store);
        let restored = controller.initialize().clone();
        Self { state: RwSignal::new(restored), controller: StoredValue::new(controller) }
    }

    /// Context over the platform backend with the configured slot names.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(SessionStore::new(DefaultBackend::default(), config.storage_keys.clone()))
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn persistence(&self) -> Persistence {
        self.controller.with_value(SessionController::persistence)
    }

    /// Transition to `Authenticated` after a successful login.
    pub fn set_session(&self, session: Session) -> Persistence {
        let outcome = self.controller.try_update_value(|controller| {
            let persistence = controller.login(session);
            (controller.state().clone(), persistence)
        });
        let Some((next, persistence)) = outcome else {
            log::warn!("session context disposed; login dropped");
            return Persistence::Volatile;
        };
        self.state.set(next);
        persistence
    }

    /// Transition to `Anonymous`. Safe to call repeatedly.
    pub fn logout(&self) {
        let next = self.controller.try_update_value(|controller| {
            controller.logout();
            controller.state().clone()
        });
        if let Some(next) = next {
            if self.state.get_untracked() != next {
                self.state.set(next);
            }
        }
    }

    /// Setter handed to the login screen.
    pub fn setter(self) -> Callback<Session> {
        Callback::new(move |session: Session| {
            let id = session.id().clone();
            if self.set_session(session) == Persistence::Volatile {
                log::debug!("session for user {id} kept in memory only");
            }
        })
    }

    /// Zero-argument logout handed to the logout screen.
    pub fn logout_action(self) -> Callback<()> {
        Callback::new(move |()| self.logout())
    }
}
