//! Network layer: REST helpers and their wire types.

pub mod api;
pub mod types;
