//! Raw HTTP transport.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every send fails as unreachable since the backend is
//! only called from the browser.

#![allow(clippy::unused_async)]

use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully resolved outbound request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Bearer token sent as `Authorization: Bearer <token>`.
    pub bearer: Option<String>,
    /// JSON body; sets `Content-Type: application/json`.
    pub body: Option<Value>,
}

/// Any HTTP response, successful or not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl ApiResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send `request` and return whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no response arrived.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            };
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let sent = match (&request.body, request.method) {
                (Some(body), _) => {
                    builder
                        .json(body)
                        .map_err(|e| TransportError(e.to_string()))?
                        .send()
                        .await
                }
                (None, Method::Post) => builder.header("Content-Type", "application/json").send().await,
                (None, Method::Get) => builder.send().await,
            };
            let resp = sent.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let status_text = resp.status_text();
            let body = resp.binary().await.map_err(|e| TransportError(e.to_string()))?;
            Ok(ApiResponse { status, status_text, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(TransportError("not available on server".to_owned()))
        }
    }
}
