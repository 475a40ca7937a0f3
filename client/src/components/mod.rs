//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and listing surfaces while reading the
//! session signal from Leptos context.

pub mod admin_sidebar;
pub mod chat_assistant;
pub mod footer;
pub mod navbar;
pub mod property_card;
pub mod property_form;
