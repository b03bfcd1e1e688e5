//! Shared client-side state.
//!
//! DESIGN
//! ======
//! `session` holds the pure authentication store and its persistence rules;
//! `session_context` binds it to a reactive signal for components. `notice`
//! carries transient user-facing messages.

pub mod notice;
pub mod session;
pub mod session_context;
