//! Bearer token inspection.
//!
//! DESIGN
//! ======
//! Expiry is read from the unverified payload segment only to avoid sending
//! requests that are certain to fail. The server verifies signatures on every
//! call; nothing here is a security boundary.
//!
//! Every decoding failure is reported as expired (fail-closed).

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde_json::Value;

use super::clock::Clock;

/// Why a token payload could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token has {0} segments, expected 3")]
    SegmentCount(usize),
    #[error("token payload is not valid base64url")]
    Base64,
    #[error("token payload is not JSON: {0}")]
    Json(String),
    #[error("token payload has no numeric exp claim")]
    MissingExp,
}

/// Claims read from the middle segment of a token.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPayload {
    /// Expiry in seconds since the Unix epoch.
    pub exp: f64,
    /// Subject claim, usually the account email.
    pub subject: Option<String>,
}

impl TokenPayload {
    /// Expiry truncated to whole seconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn expires_at(&self) -> i64 {
        self.exp.floor() as i64
    }
}

/// Decode the payload segment of `token` without verifying its signature.
///
/// # Errors
///
/// Returns a [`TokenError`] naming the first step that failed.
pub fn decode_payload(token: &str) -> Result<TokenPayload, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::SegmentCount(segments.len()));
    }

    let raw = segments[1].trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(raw)
        .or_else(|_| STANDARD_NO_PAD.decode(raw))
        .map_err(|_| TokenError::Base64)?;
    let value: Value = serde_json::from_slice(&bytes).map_err(|e| TokenError::Json(e.to_string()))?;

    let exp = value
        .get("exp")
        .and_then(Value::as_f64)
        .ok_or(TokenError::MissingExp)?;
    let subject = value.get("sub").and_then(Value::as_str).map(str::to_owned);
    Ok(TokenPayload { exp, subject })
}

/// Whether `token` is expired at `now_secs`. Undecodable tokens are expired.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn is_expired_at(token: &str, now_secs: i64) -> bool {
    decode_payload(token).map_or(true, |payload| payload.exp <= now_secs as f64)
}

/// Whether `token` is expired according to `clock`.
pub fn is_expired(token: &str, clock: &impl Clock) -> bool {
    is_expired_at(token, clock.now_secs())
}
