//! Session state machine: `Anonymous` <-> `Authenticated`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller is the only writer of in-memory session state. It restores
//! once from the store at initialization, accepts sessions from the login
//! screen, and tears them down on logout. Storage failures are absorbed here
//! so callers only ever see a well-formed `SessionState`.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use super::model::{Persistence, Session, SessionState};
use super::store::{SessionStore, StorageBackend};

#[derive(Clone, Debug)]
pub struct SessionController<B> {
    store: SessionStore<B>,
    state: SessionState,
    persistence: Persistence,
    restored: bool,
}

impl<B: StorageBackend> SessionController<B> {
    /// New controller in the `Anonymous` state. Nothing is read yet.
    pub fn new(store: SessionStore<B>) -> Self {
        Self { store, state: SessionState::Anonymous, persistence: Persistence::Durable, restored: false }
    }

    /// Restore the session from the store. Only the first call reads.
    pub fn initialize(&mut self) -> &SessionState {
        if self.restored {
            return &self.state;
        }
        self.restored = true;
        match self.store.read() {
            SessionState::Authenticated(session) => {
                log::info!("restored session for user {}", session.id());
                self.state = SessionState::Authenticated(session);
            }
            SessionState::Anonymous => log::debug!("no stored session; starting anonymous"),
        }
        &self.state
    }

    /// Accept a session from a successful login.
    ///
    /// If storage rejects the write the session still applies for this page
    /// lifetime and is reported as [`Persistence::Volatile`]. The store is
    /// then cleared so a reload cannot restore the user this login replaced.
    pub fn login(&mut self, session: Session) -> Persistence {
        self.persistence = match self.store.write(&session) {
            Ok(()) => Persistence::Durable,
            Err(err) => {
                log::warn!("session for user {} not persisted: {err}", session.id());
                if let Err(err) = self.store.clear() {
                    log::warn!("failed to clear previous session: {err}");
                }
                Persistence::Volatile
            }
        };
        log::info!("user {} logged in", session.id());
        self.state = SessionState::Authenticated(session);
        self.persistence
    }

    /// Drop the current session. A no-op when already anonymous.
    pub fn logout(&mut self) {
        if self.state.is_anonymous() {
            return;
        }
        if let Err(err) = self.store.clear() {
            log::warn!("stored session not cleared: {err}");
        }
        self.state = SessionState::Anonymous;
        self.persistence = Persistence::Durable;
        log::info!("logged out");
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    pub fn store(&self) -> &SessionStore<B> {
        &self.store
    }
}
