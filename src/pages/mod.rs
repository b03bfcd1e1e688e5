//! Top-level routed screens.

pub mod admin_uploads;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod rubric_generator;
