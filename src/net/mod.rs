//! Networking modules for the remote auth, content, and AI services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies their failures, and
//! `types` defines the shared JSON schema.

pub mod api;
pub mod error;
pub mod types;
