//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation shell and form chrome shared across
//! pages, reading auth state from Leptos context.

pub mod form_feedback;
pub mod nav_bar;
