//! Networking modules for the donation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends raw HTTP requests, `api` maps them to typed operations
//! with a uniform error taxonomy, and `types` defines the wire schema.

pub mod api;
pub mod transport;
pub mod types;
