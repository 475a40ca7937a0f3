//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submitting,
//! navigating) and delegates rendering details to `components`. Admin pages
//! are mounted under `AdminGuard` in `app.rs` and never check roles
//! themselves.

pub mod admin_dashboard;
pub mod admin_properties;
pub mod forgot_password;
pub mod home;
pub mod login;
pub mod property_detail;
pub mod property_editor;
pub mod register;
pub mod reset_password;
