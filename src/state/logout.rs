//! Sign-out flow.
//!
//! The server call is best effort: whatever it returns, local session data is
//! cleared and the user is sent to sign-in with the history entry replaced.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use std::time::Duration;

use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::session::clock::Clock;
use crate::session::guard::SessionGuard;
use crate::session::navigation::{Navigator, SIGN_IN_PATH};
use crate::session::store::TokenStore;
use crate::util::schedule::Scheduler;

/// Time the logout status stays visible before the redirect.
pub const LOGOUT_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub const LOGOUT_SUCCESS: &str = "Logout successful";
pub const LOGOUT_COMPLETED: &str = "Logout completed";

/// Leave for sign-in so that Back cannot return to an authenticated page.
pub fn redirect_to_sign_in(navigator: &impl Navigator) {
    navigator.replace_history_and_go_to(SIGN_IN_PATH);
}

/// Tell the server, clear the session, and schedule the redirect.
/// Returns the status line to display.
pub async fn perform_logout<S, N, C, T, D>(guard: &SessionGuard<S, N, C>, api: &ApiClient<T>, scheduler: &D) -> String
where
    S: TokenStore,
    N: Navigator + Clone + 'static,
    C: Clock,
    T: Transport,
    D: Scheduler,
{
    let status = match guard.current() {
        Some(session) => match api.logout(&session).await {
            Ok(confirmation) => confirmation.message.unwrap_or_else(|| LOGOUT_SUCCESS.to_owned()),
            Err(e) => {
                leptos::logging::warn!("logout request failed: {e:?}");
                LOGOUT_COMPLETED.to_owned()
            }
        },
        None => LOGOUT_COMPLETED.to_owned(),
    };

    guard.sign_out();
    let navigator = guard.navigator().clone();
    scheduler.after(LOGOUT_REDIRECT_DELAY, Box::new(move || redirect_to_sign_in(&navigator)));
    status
}
