//! Typed operations against the donation backend.
//!
//! ERROR HANDLING
//! ==============
//! Every operation resolves to an [`ApiResult`]; nothing panics past this
//! boundary. No response is `Unreachable`, a 401 on an authenticated call is
//! `Unauthenticated` (the session guard turns it into a sign-in redirect),
//! any other non-2xx is `Rejected` with the server's message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::{ApiRequest, ApiResponse, BrowserTransport, Method, Transport};
use super::types::{
    ContactRequest, DonationKind, DonationRecord, DonationRequest, LoginRequest, LoginResponse, ProfileSummary,
    RegisterRequest,
};
use crate::config::ApiConfig;
use crate::session::guard::SessionExpired;
use crate::session::store::Session;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response: network down or server not running.
    #[error("Server is unreachable.")]
    Unreachable { detail: String },
    /// The server rejected the bearer token.
    #[error("Your session has expired. Please sign in again.")]
    Unauthenticated,
    /// Any other non-2xx response.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// A 2xx response whose body could not be read.
    #[error("Unexpected response from server.")]
    InvalidResponse(String),
}

impl From<SessionExpired> for ApiError {
    fn from(_: SessionExpired) -> Self {
        Self::Unauthenticated
    }
}

/// Optional human-readable text from a 2xx confirmation body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Confirmation {
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Server-provided `message`, else the status text, else a generic line.
fn rejection_message(response: &ApiResponse) -> String {
    serde_json::from_slice::<MessageBody>(&response.body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(response.status_text.clone()).filter(|t| !t.trim().is_empty()))
        .unwrap_or_else(|| request_failed_message(response.status))
}

/// Map a raw response onto the error taxonomy.
///
/// A 401 only signals session expiry when a bearer token was sent; on an
/// anonymous call (sign-in) it means the credentials were refused.
fn classify(response: ApiResponse, authenticated: bool) -> ApiResult<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }
    if response.status == 401 && authenticated {
        return Err(ApiError::Unauthenticated);
    }
    Err(ApiError::Rejected {
        status: response.status,
        message: rejection_message(&response),
    })
}

/// Text of a confirmation body: a JSON `message`, a JSON string, or plain text.
fn body_text(body: &[u8]) -> Option<String> {
    let text = match serde_json::from_slice::<Value>(body) {
        Ok(Value::String(s)) => s,
        Ok(Value::Object(map)) => map.get("message")?.as_str()?.to_owned(),
        Ok(_) => return None,
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn parse_json<T: DeserializeOwned>(response: &ApiResponse) -> ApiResult<T> {
    serde_json::from_slice(&response.body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

fn to_json_body<T: serde::Serialize>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    config: ApiConfig,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn execute(
        &self,
        method: Method,
        url: String,
        session: Option<&Session>,
        body: Option<Value>,
    ) -> ApiResult<ApiResponse> {
        let authenticated = session.is_some();
        let request = ApiRequest {
            method,
            url,
            bearer: session.map(|s| s.token.clone()),
            body,
        };
        let response = self.transport.send(request).await.map_err(|e| {
            leptos::logging::warn!("api request failed: {e}");
            ApiError::Unreachable { detail: e.0 }
        })?;
        classify(response, authenticated)
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Refused credentials are `Rejected`, not `Unauthenticated`.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let body = to_json_body(request)?;
        let response = self
            .execute(Method::Post, self.config.endpoint("/login"), None, Some(body))
            .await?;
        parse_json(&response)
    }

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// A 409, or a 2xx whose body reports the email as already registered,
    /// is `Rejected` with the server's text.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<Confirmation> {
        let body = to_json_body(request)?;
        let response = self
            .execute(Method::Post, self.config.endpoint("/register"), None, Some(body))
            .await?;
        let message = body_text(&response.body);
        if let Some(text) = message.as_deref() {
            if text.to_lowercase().contains("already") {
                return Err(ApiError::Rejected {
                    status: 409,
                    message: text.to_owned(),
                });
            }
        }
        Ok(Confirmation { message })
    }

    /// `POST /donate/animal` or `POST /donate/child`.
    ///
    /// # Errors
    ///
    /// Returns the classified error for any non-2xx or transport failure.
    pub async fn donate(
        &self,
        session: &Session,
        kind: DonationKind,
        request: &DonationRequest,
    ) -> ApiResult<Confirmation> {
        let body = to_json_body(request)?;
        let url = self.config.endpoint(&format!("/donate/{}", kind.path_segment()));
        let response = self.execute(Method::Post, url, Some(session), Some(body)).await?;
        Ok(Confirmation { message: body_text(&response.body) })
    }

    /// `POST /contact`.
    ///
    /// # Errors
    ///
    /// Returns the classified error for any non-2xx or transport failure.
    pub async fn contact(&self, request: &ContactRequest) -> ApiResult<Confirmation> {
        let body = to_json_body(request)?;
        let response = self
            .execute(Method::Post, self.config.endpoint("/contact"), None, Some(body))
            .await?;
        Ok(Confirmation { message: body_text(&response.body) })
    }

    /// `GET /profile`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` if the body is not a profile summary.
    pub async fn profile(&self, session: &Session) -> ApiResult<ProfileSummary> {
        let response = self
            .execute(Method::Get, self.config.endpoint("/profile"), Some(session), None)
            .await?;
        parse_json(&response)
    }

    /// `GET /donations/history`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` if the body is not a list of records.
    pub async fn history(&self, session: &Session) -> ApiResult<Vec<DonationRecord>> {
        let response = self
            .execute(Method::Get, self.config.endpoint("/donations/history"), Some(session), None)
            .await?;
        parse_json(&response)
    }

    /// `GET` a server-supplied receipt URL; returns the PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidResponse` without sending anything when the link
    /// points off the API origin, else the classified error for any non-2xx
    /// or transport failure.
    pub async fn receipt(&self, session: &Session, receipt_url: &str) -> ApiResult<Vec<u8>> {
        let url = self.config.resolve(receipt_url).ok_or_else(|| {
            leptos::logging::warn!("refusing receipt link outside the api origin: {receipt_url}");
            ApiError::InvalidResponse(format!("receipt link outside the api origin: {receipt_url}"))
        })?;
        let response = self.execute(Method::Get, url, Some(session), None).await?;
        Ok(response.body)
    }

    /// `POST /logout`.
    ///
    /// # Errors
    ///
    /// Returns the classified error for any non-2xx or transport failure.
    pub async fn logout(&self, session: &Session) -> ApiResult<Confirmation> {
        let response = self
            .execute(Method::Post, self.config.endpoint("/logout"), Some(session), None)
            .await?;
        Ok(Confirmation { message: body_text(&response.body) })
    }
}
