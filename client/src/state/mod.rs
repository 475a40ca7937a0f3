//! Application state held in Leptos signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the token and identity, `actions` are the only code paths
//! that sign a user in, and `listings` holds search and property form data.

pub mod actions;
pub mod listings;
pub mod session;
