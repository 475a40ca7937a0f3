//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and routing policy from page and
//! component logic so both can be tested without a DOM.

pub mod guard;
pub mod storage;
