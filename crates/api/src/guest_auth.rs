// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Guest token handling.
//!
//! Writes to the review API need a guest token. The token is JWT-shaped;
//! only its payload claims are read here, the signature is the server's
//! business. A token is reused while it is a guest token with more than
//! `EXPIRY_MARGIN_SECS` left before expiry.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

/// Seconds before expiry at which a token is considered stale.
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// Token type accepted for guest writes.
pub const GUEST_TOKEN_TYPE: &str = "guest";

/// Payload claims of a guest token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (guest session identifier).
    pub sub: String,
    /// Token type.
    #[serde(rename = "type")]
    pub token_type: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl TokenClaims {
    /// Returns true if these claims allow a guest write at `now_unix`.
    #[must_use]
    pub fn is_valid_at(&self, now_unix: i64) -> bool {
        self.token_type == GUEST_TOKEN_TYPE
            && self.exp.saturating_sub(now_unix) > EXPIRY_MARGIN_SECS
    }
}

/// Reads the payload claims of `token`, `None` if it is not JWT-shaped.
#[must_use]
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }
    let bytes: Vec<u8> = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Returns true if `token` can be reused at `now_unix`.
#[must_use]
pub fn is_token_valid(token: &str, now_unix: i64) -> bool {
    decode_claims(token).is_some_and(|claims| claims.is_valid_at(now_unix))
}

/// Current Unix time in seconds.
#[must_use]
pub fn unix_now() -> i64 {
    time::OffsetDateTime::now_utc().unix_timestamp()
}

/// The cached guest token.
///
/// The lock is held across provisioning so concurrent writers share one
/// handshake.
#[derive(Debug, Default)]
pub struct TokenCache {
    token: Mutex<Option<String>>,
}

impl TokenCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token if it is still valid at `now_unix`,
    /// otherwise runs `provision` and caches its result.
    ///
    /// # Errors
    ///
    /// Returns the error from `provision`.
    pub async fn get_or_provision<F, Fut, E>(
        &self,
        now_unix: i64,
        provision: F,
    ) -> Result<String, E>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<String, E>> + Send,
        E: Send,
    {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref().filter(|t| is_token_valid(t, now_unix)) {
            return Ok(token.clone());
        }

        debug!(had_token = slot.is_some(), "Provisioning guest token");
        let token: String = provision().await?;
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Drops the cached token so the next call provisions a new one.
    pub async fn invalidate(&self) {
        self.token.lock().await.take();
    }

    /// Returns the cached token without checking validity.
    pub async fn peek(&self) -> Option<String> {
        self.token.lock().await.clone()
    }
}

/// Builds an unsigned guest token with the given claims.
#[cfg(test)]
pub(crate) fn encode_test_token(sub: &str, token_type: &str, exp: i64) -> String {
    let claims: TokenClaims = TokenClaims {
        sub: sub.to_string(),
        token_type: token_type.to_string(),
        exp,
    };
    let payload: Vec<u8> = serde_json::to_vec(&claims).unwrap_or_default();
    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload)
    )
}
