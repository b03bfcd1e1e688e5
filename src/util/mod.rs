//! Browser-facing helpers: durable storage, route guarding, and the debug
//! console hooks.

pub mod debug;
pub mod route_guard;
pub mod storage;
