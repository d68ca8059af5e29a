//! Client-held session lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` persists the bearer token and cached identity, `token` decides
//! expiry from the unverified payload, `guard` combines the two in front of
//! every authenticated call, and `navigation` performs the redirects those
//! decisions require. `clock` supplies wall-clock seconds.

pub mod clock;
pub mod guard;
pub mod navigation;
pub mod store;
pub mod token;
