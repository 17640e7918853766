//! Shared UI components.
//!
//! ARCHITECTURE
//! ============
//! `route_gate` enforces access for routed screens; `nav_bar` is the
//! logged-in chrome the gate wraps around protected screens.

pub mod nav_bar;
pub mod route_gate;
