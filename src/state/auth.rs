//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navigation shell to show who is signed in. Refreshed from the
//! token store when the app mounts; pages that change the session navigate
//! with a full reload, so no other refresh path is needed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::session::store::Session;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl AuthState {
    pub fn from_session(session: Option<&Session>) -> Self {
        session.map_or_else(Self::default, |s| Self {
            email: Some(s.subject_email.clone()),
            name: s.user_name.clone(),
        })
    }

    pub fn is_signed_in(&self) -> bool {
        self.email.is_some()
    }

    /// Name to show in the navigation bar.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.email.as_deref())
    }
}
