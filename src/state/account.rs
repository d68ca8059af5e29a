//! Profile and donation-history loading for the account pages.
//!
//! DESIGN
//! ======
//! Loads go through the session guard, so an expired session redirects
//! before the request and a 401 redirects after it. A redirect yields `None`
//! and the page keeps showing its loading state until navigation happens.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::net::api::{ApiClient, ApiError, ApiResult};
use crate::net::transport::Transport;
use crate::net::types::{DonationRecord, ProfileSummary};
use crate::session::clock::Clock;
use crate::session::guard::SessionGuard;
use crate::session::navigation::Navigator;
use crate::session::store::TokenStore;
use crate::util::receipt;

pub const PROFILE_LOAD_FAILED: &str = "Failed to fetch profile data. Please try again.";
pub const HISTORY_LOAD_FAILED: &str = "Failed to fetch donation history. Please try again.";
pub const RECEIPT_FAILED: &str = "Failed to download receipt. Please try again.";
pub const RECEIPT_MISSING: &str = "No receipt is available for this donation.";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

fn settle<T>(result: ApiResult<T>, failure: &str) -> Option<Loadable<T>> {
    match result {
        Ok(value) => Some(Loadable::Ready(value)),
        Err(ApiError::Unauthenticated) => None,
        Err(e) => {
            leptos::logging::warn!("account load failed: {e:?}");
            Some(Loadable::Failed(failure.to_owned()))
        }
    }
}

pub async fn load_profile<S, N, C, T>(guard: &SessionGuard<S, N, C>, api: &ApiClient<T>) -> Option<Loadable<ProfileSummary>>
where
    S: TokenStore,
    N: Navigator,
    C: Clock,
    T: Transport,
{
    let result = guard.authorized(|session| async move { api.profile(&session).await }).await;
    settle(result, PROFILE_LOAD_FAILED)
}

pub async fn load_history<S, N, C, T>(
    guard: &SessionGuard<S, N, C>,
    api: &ApiClient<T>,
) -> Option<Loadable<Vec<DonationRecord>>>
where
    S: TokenStore,
    N: Navigator,
    C: Clock,
    T: Transport,
{
    let result = guard.authorized(|session| async move { api.history(&session).await }).await;
    settle(result, HISTORY_LOAD_FAILED)
}

/// Fetch a receipt through the guard. `Ok(None)` means the guard redirected.
///
/// # Errors
///
/// Returns the message to show when the record has no receipt or the
/// download failed.
pub async fn fetch_receipt<S, N, C, T>(
    guard: &SessionGuard<S, N, C>,
    api: &ApiClient<T>,
    record: &DonationRecord,
) -> Result<Option<Vec<u8>>, &'static str>
where
    S: TokenStore,
    N: Navigator,
    C: Clock,
    T: Transport,
{
    let url = record.receipt_url.as_deref().ok_or(RECEIPT_MISSING)?;
    match guard.authorized(|session| async move { api.receipt(&session, url).await }).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(ApiError::Unauthenticated) => Ok(None),
        Err(e) => {
            leptos::logging::warn!("receipt download failed: {e:?}");
            Err(RECEIPT_FAILED)
        }
    }
}

/// Fetch a receipt and hand it to the browser as a file download.
///
/// # Errors
///
/// Returns the message to show when fetching or saving fails.
pub async fn download_receipt<S, N, C, T>(
    guard: &SessionGuard<S, N, C>,
    api: &ApiClient<T>,
    record: &DonationRecord,
) -> Result<(), &'static str>
where
    S: TokenStore,
    N: Navigator,
    C: Clock,
    T: Transport,
{
    let Some(bytes) = fetch_receipt(guard, api, record).await? else {
        return Ok(());
    };
    receipt::save_pdf(&bytes, &record.receipt_file_name()).map_err(|e| {
        leptos::logging::warn!("receipt save failed: {e}");
        RECEIPT_FAILED
    })
}
