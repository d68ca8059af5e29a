//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, downloads)
//! and formatting from page and workflow logic.

pub mod currency;
pub mod receipt;
pub mod schedule;
