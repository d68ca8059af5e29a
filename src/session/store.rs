//! Durable storage of the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser store writes to `localStorage` under fixed keys so a session
//! survives reloads. Nothing sweeps expired entries; expiry is enforced when
//! the guard reads the session back.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::token::{self, TokenError};

pub const TOKEN_KEY: &str = "authToken";
pub const EMAIL_KEY: &str = "userEmail";
pub const USER_ID_KEY: &str = "userId";
pub const USER_NAME_KEY: &str = "userName";

/// Every key a session may occupy. `clear` removes all of them.
pub const SESSION_KEYS: [&str; 4] = [TOKEN_KEY, EMAIL_KEY, USER_ID_KEY, USER_NAME_KEY];

/// A fully populated client session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub subject_email: String,
    /// Token expiry in seconds since the Unix epoch.
    pub expires_at: i64,
    pub user_id: Option<String>,
    pub user_name: Option<String>,
}

impl Session {
    /// Build a session from a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns the token decode error when the expiry cannot be read; a token
    /// with unknown expiry never becomes a session.
    pub fn from_token(token: impl Into<String>, subject_email: impl Into<String>) -> Result<Self, TokenError> {
        let token = token.into();
        let payload = token::decode_payload(&token)?;
        Ok(Self {
            expires_at: payload.expires_at(),
            token,
            subject_email: subject_email.into(),
            user_id: None,
            user_name: None,
        })
    }

    /// Attach cached identity fields returned alongside the token.
    #[must_use]
    pub fn with_identity(mut self, user_id: Option<String>, user_name: Option<String>) -> Self {
        self.user_id = user_id;
        self.user_name = user_name;
        self
    }
}

/// Persistence seam for the session.
pub trait TokenStore {
    fn save(&self, session: &Session);
    fn load(&self) -> Option<Session>;
    /// Remove the session keys. Used on expiry.
    fn clear(&self);
    /// Remove the session keys and any per-tab scratch state. Used on an
    /// explicit sign-out.
    fn wipe(&self) {
        self.clear();
    }
}

fn session_entries(session: &Session) -> Vec<(&'static str, &str)> {
    let mut entries = vec![(TOKEN_KEY, session.token.as_str()), (EMAIL_KEY, session.subject_email.as_str())];
    if let Some(id) = &session.user_id {
        entries.push((USER_ID_KEY, id.as_str()));
    }
    if let Some(name) = &session.user_name {
        entries.push((USER_NAME_KEY, name.as_str()));
    }
    entries
}

/// Rebuild a session from stored entries. Partial state yields `None`.
fn session_from_entries(get: impl Fn(&str) -> Option<String>) -> Option<Session> {
    let token = get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let email = get(EMAIL_KEY).filter(|e| !e.is_empty())?;
    let session = Session::from_token(token, email).ok()?;
    Some(session.with_identity(get(USER_ID_KEY), get(USER_NAME_KEY)))
}

/// `localStorage`-backed store. Outside the browser every call is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn save(&self, session: &Session) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; session not persisted");
                return;
            };
            for key in SESSION_KEYS {
                let _ = storage.remove_item(key);
            }
            for (key, value) in session_entries(session) {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    }

    fn load(&self) -> Option<Session> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            session_from_entries(|key| storage.get_item(key).ok().flatten())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                for key in SESSION_KEYS {
                    let _ = storage.remove_item(key);
                }
            }
        }
    }

    fn wipe(&self) {
        self.clear();
        #[cfg(feature = "hydrate")]
        {
            if let Some(session_storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
                let _ = session_storage.clear();
            }
        }
    }
}

/// In-memory store with the same key layout as the browser store.
/// `tab_entries` stands in for `sessionStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    tab_entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryTokenStore {
    /// Raw value stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Write a raw entry, bypassing session validation.
    pub fn set_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    #[must_use]
    pub fn tab_raw(&self, key: &str) -> Option<String> {
        self.tab_entries.borrow().get(key).cloned()
    }

    pub fn set_tab_raw(&self, key: &str, value: &str) {
        self.tab_entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, session: &Session) {
        let mut entries = self.entries.borrow_mut();
        for key in SESSION_KEYS {
            entries.remove(key);
        }
        for (key, value) in session_entries(session) {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn load(&self) -> Option<Session> {
        let entries = self.entries.borrow();
        session_from_entries(|key| entries.get(key).cloned())
    }

    fn clear(&self) {
        let mut entries = self.entries.borrow_mut();
        for key in SESSION_KEYS {
            entries.remove(key);
        }
    }

    fn wipe(&self) {
        self.clear();
        self.tab_entries.borrow_mut().clear();
    }
}
