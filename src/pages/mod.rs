//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages only read the session they are given. Mutation goes through the
//! callbacks handed to `login` and `logout`; access is enforced by the
//! route gate that wraps each page, never by the page itself.

pub mod account;
pub mod coming_soon;
pub mod edit_routine;
pub mod login;
pub mod logout;
pub mod not_found;
pub mod routines;
pub mod signup;
