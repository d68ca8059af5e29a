//! Client and host configuration.
//!
//! The API origin is fixed at build time (`DONATION_API_ORIGIN`) because the
//! WASM bundle has no process environment. The SSR host reads `PORT` at start.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8081";
pub const API_PREFIX: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("api origin must start with http:// or https://, got {0:?}")]
    InvalidOrigin(String),
}

/// Where the backend API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { origin: DEFAULT_API_ORIGIN.to_owned() }
    }
}

impl ApiConfig {
    /// Resolve from the build-time `DONATION_API_ORIGIN`, falling back to the
    /// default origin when unset or invalid.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::parse(option_env!("DONATION_API_ORIGIN")).unwrap_or_else(|e| {
            leptos::logging::warn!("{e}; using {DEFAULT_API_ORIGIN}");
            Self::default()
        })
    }

    /// Normalise an origin string. `None` or blank selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrigin`] when the scheme is not HTTP(S).
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
            return Ok(Self::default());
        };
        if !(raw.starts_with("http://") || raw.starts_with("https://")) {
            return Err(ConfigError::InvalidOrigin(raw.to_owned()));
        }
        Ok(Self { origin: raw.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Absolute URL of an API path, e.g. `/login` -> `{origin}/api/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.origin)
    }

    /// Absolute URL for a server-supplied link. Relative links are joined
    /// onto the API origin; an absolute link is accepted only when it points
    /// at that same origin, so the bearer token never leaves it.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<String> {
        if url.starts_with("http://") || url.starts_with("https://") {
            self.is_same_origin(url).then(|| url.to_owned())
        } else if url.starts_with("//") {
            None
        } else if url.starts_with('/') {
            Some(format!("{}{url}", self.origin))
        } else {
            Some(format!("{}/{url}", self.origin))
        }
    }

    fn is_same_origin(&self, url: &str) -> bool {
        url.strip_prefix(self.origin.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?', '#']))
    }
}

/// SSR host settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostConfig {
    /// Overrides the port from the Leptos site address.
    pub port: Option<u16>,
}

impl HostConfig {
    /// Load from `PORT`. Unset or unparsable values keep the Leptos default.
    #[must_use]
    pub fn from_env() -> Self {
        Self { port: env_parse_u16("PORT") }
    }

    #[must_use]
    pub fn bind_addr(&self, site_addr: SocketAddr) -> SocketAddr {
        self.port.map_or(site_addr, |port| SocketAddr::new(site_addr.ip(), port))
    }
}

fn env_parse_u16(key: &str) -> Option<u16> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<u16>().ok())
}
