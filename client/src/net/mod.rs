//! Networking modules for the property backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and reply classification, and `types` defines the
//! wire schema shared by auth and listing endpoints.

pub mod api;
pub mod types;
