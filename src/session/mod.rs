//! Session identity, persistence, and lifecycle.
//!
//! DESIGN
//! ======
//! Layered leaf-first: `model` (types) <- `store` (durable slots) <-
//! `controller` (state machine) <- `context` (reactive handle shared with
//! the UI). Only `context` depends on Leptos.

pub mod context;
pub mod controller;
pub mod model;
pub mod store;

pub use context::SessionContext;
pub use controller::SessionController;
pub use model::{Persistence, Session, SessionState, UserId};
pub use store::{DefaultBackend, MemoryBackend, SessionStore, StorageBackend, StorageKeys, StoreError};
