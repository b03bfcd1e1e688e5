//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, notices, form inputs) while
//! reading session and notice state from Leptos context providers.

pub mod dashboard_shell;
pub mod form_field;
pub mod notice_banner;
pub mod sidebar;
