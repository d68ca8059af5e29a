//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `form` is the workflow every backend form runs on and `forms` defines the
//! five concrete forms. `account` and `logout` cover the authenticated pages
//! that load data or end the session rather than submit fields.

pub mod account;
pub mod auth;
pub mod form;
pub mod forms;
pub mod logout;
