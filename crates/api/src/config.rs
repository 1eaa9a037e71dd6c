// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client configuration.

use crate::error::ApiError;
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

/// Request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// How long the room type catalogue is served from cache.
pub const DEFAULT_INVENTORY_TTL: Duration = Duration::from_secs(3 * 60);

/// Hotel used when none is configured.
pub const DEFAULT_HOTEL_ID: &str = "1";

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "AUBERGE_API_URL";

/// Environment variable holding the hotel identifier.
pub const HOTEL_ID_VAR: &str = "AUBERGE_HOTEL_ID";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "AUBERGE_TIMEOUT_SECS";

/// Connection settings for `HotelApiClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the booking API. Always ends with `/`.
    pub base_url: Url,
    /// Hotel whose inventory is queried.
    pub hotel_id: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Cache lifetime of the room type catalogue.
    pub inventory_ttl: Duration,
}

impl ClientConfig {
    /// Creates a configuration with default hotel, timeout and TTL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if `base_url` is not an absolute
    /// http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            hotel_id: String::from(DEFAULT_HOTEL_ID),
            timeout: DEFAULT_TIMEOUT,
            inventory_ttl: DEFAULT_INVENTORY_TTL,
        })
    }

    /// Sets the hotel identifier.
    #[must_use]
    pub fn with_hotel_id(mut self, hotel_id: impl Into<String>) -> Self {
        self.hotel_id = hotel_id.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the inventory cache lifetime.
    #[must_use]
    pub const fn with_inventory_ttl(mut self, ttl: Duration) -> Self {
        self.inventory_ttl = ttl;
        self
    }

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if `AUBERGE_API_URL` is missing or
    /// malformed, or if `AUBERGE_TIMEOUT_SECS` is not a positive integer.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url: String = lookup(API_URL_VAR)
            .ok_or_else(|| ApiError::InvalidConfig(format!("{API_URL_VAR} is not set")))?;
        let mut config: Self = Self::new(&base_url)?;

        match lookup(HOTEL_ID_VAR) {
            Some(hotel_id) if !hotel_id.trim().is_empty() => {
                config.hotel_id = hotel_id.trim().to_string();
            }
            _ => info!("{HOTEL_ID_VAR} not set, using default: {DEFAULT_HOTEL_ID}"),
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let seconds: u64 = raw.trim().parse().map_err(|e| {
                warn!("Invalid {TIMEOUT_VAR} value: {e}");
                ApiError::InvalidConfig(format!("{TIMEOUT_VAR} must be a number of seconds"))
            })?;
            if seconds == 0 {
                return Err(ApiError::InvalidConfig(format!(
                    "{TIMEOUT_VAR} must be greater than zero"
                )));
            }
            config.timeout = Duration::from_secs(seconds);
        }

        Ok(config)
    }

    /// Resolves a path relative to the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::InvalidConfig(format!("Invalid endpoint '{path}': {e}")))
    }

    /// Resolves a path below the configured hotel.
    pub(crate) fn hotel_endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.endpoint(&format!("hotels/{}/{path}", self.hotel_id))
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let raw: &str = raw.trim();
    // Url::join replaces the last segment unless the base ends with '/'.
    let normalized: String = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };

    let url: Url = Url::parse(&normalized)
        .map_err(|e| ApiError::InvalidConfig(format!("Invalid base URL '{raw}': {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::InvalidConfig(format!(
            "Unsupported URL scheme '{other}'"
        ))),
    }
}
