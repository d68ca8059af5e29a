//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates workflow logic to
//! `state` and shared chrome to `components`.

pub mod about;
pub mod animal_donation;
pub mod auth;
pub mod child_donation;
pub mod contact;
pub mod history;
pub mod home;
pub mod logout;
pub mod profile;
