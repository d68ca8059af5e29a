//! Single source of truth for "may this authenticated call go ahead?".
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated request passes through [`SessionGuard::authorized`]:
//! the stored session is checked for client-side expiry before the call, and
//! a 401 from the server after the call is handled the same way. Both paths
//! clear the store and redirect to sign-in.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::future::Future;

use super::clock::{Clock, SystemClock};
use super::navigation::{Navigator, SIGN_IN_PATH};
use super::store::{Session, TokenStore};
use super::token;
use crate::net::api::{ApiError, ApiResult};

/// Returned by [`SessionGuard::ensure`] after it has already cleared the
/// session and redirected. The caller must abort its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("session missing or expired")]
pub struct SessionExpired;

#[derive(Clone, Debug)]
pub struct SessionGuard<S, N, C = SystemClock> {
    store: S,
    navigator: N,
    clock: C,
}

impl<S, N, C> SessionGuard<S, N, C>
where
    S: TokenStore,
    N: Navigator,
    C: Clock,
{
    pub fn new(store: S, navigator: N, clock: C) -> Self {
        Self { store, navigator, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Stored session, if any, without checking expiry or redirecting.
    pub fn current(&self) -> Option<Session> {
        self.store.load()
    }

    /// Return a valid session, or clear + redirect and report expiry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionExpired`] when no session is stored or its token is
    /// expired or undecodable.
    pub fn ensure(&self) -> Result<Session, SessionExpired> {
        match self.store.load() {
            Some(session) if !token::is_expired(&session.token, &self.clock) => Ok(session),
            _ => {
                self.expire();
                Err(SessionExpired)
            }
        }
    }

    /// Persist a session issued by a successful sign-in.
    pub fn establish(&self, session: &Session) {
        self.store.save(session);
    }

    /// Drop the session and per-tab state without navigating.
    pub fn sign_out(&self) {
        self.store.wipe();
    }

    /// Drop the session and force the user back to sign-in.
    pub fn expire(&self) {
        leptos::logging::warn!("session expired; redirecting to {SIGN_IN_PATH}");
        self.store.clear();
        self.navigator.go_to(SIGN_IN_PATH);
    }

    /// Treat a server-side 401 as expiry. The result passes through unchanged.
    pub fn intercept<T>(&self, result: ApiResult<T>) -> ApiResult<T> {
        if matches!(result, Err(ApiError::Unauthenticated)) {
            self.expire();
        }
        result
    }

    /// Run an authenticated call: check the session first, then intercept a
    /// 401 from the response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthenticated`] when the session was missing or
    /// expired (the redirect has already happened), or the call's own error.
    pub async fn authorized<T, F, Fut>(&self, call: F) -> ApiResult<T>
    where
        F: FnOnce(Session) -> Fut,
        Fut: Future<Output = ApiResult<T>>,
    {
        let session = self.ensure()?;
        self.intercept(call(session).await)
    }
}
