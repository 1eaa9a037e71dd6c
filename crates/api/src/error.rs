// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API client.
//!
//! Every failure is classified into one of the closed `ErrorKind`s by
//! inspecting the transport error and the HTTP status, never the message
//! text.

use crate::request_response::ErrorBody;
use auberge::{Action, CoreError, Resource};
use auberge_domain::{DomainError, ErrorKind};
use std::time::Duration;
use thiserror::Error;

/// Message shown while the backend cannot be reached.
pub const MAINTENANCE_MESSAGE: &str =
    "The service is temporarily unavailable. Please try again in a few moments.";

/// API client errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The backend could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend did not answer in time.
    #[error("Request timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    /// The guest token was refused.
    #[error("Authentication rejected with HTTP {status}")]
    Auth { status: u16 },

    /// The backend refused the request with a message for the guest.
    #[error("{message}")]
    Application { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Data sent or received broke a domain rule.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// The booking wizard refused the operation.
    #[error(transparent)]
    Flow(#[from] CoreError),

    /// The client is misconfigured.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Classifies a transport failure.
    #[must_use]
    pub fn from_transport(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return Self::Timeout(timeout);
        }
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        Self::Network(err.to_string())
    }

    /// Classifies a failure while reading a response body. Decoding
    /// happens after the read, so any failure here is a transport one.
    #[must_use]
    pub fn from_body_read(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return Self::Timeout(timeout);
        }
        Self::Network(err.to_string())
    }

    /// Classifies a non-success HTTP response from its status and body.
    ///
    /// Gateway failures mean the backend behind the proxy is down and are
    /// treated as network errors.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Auth { status },
            502..=504 => Self::Network(format!("Backend unavailable (HTTP {status})")),
            _ => {
                let message: String = serde_json::from_str::<ErrorBody>(body)
                    .map(|b| b.message)
                    .ok()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| format!("Request failed with HTTP {status}"));
                Self::Application { status, message }
            }
        }
    }

    /// Returns the closed error kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) | Self::Timeout(_) => ErrorKind::Network,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Application { .. } | Self::Decode(_) => ErrorKind::Application,
            Self::Validation(_) | Self::Flow(_) | Self::InvalidConfig(_) => ErrorKind::Validation,
        }
    }

    /// Returns the text to show the guest.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Timeout(_) => String::from(MAINTENANCE_MESSAGE),
            Self::Auth { .. } => String::from("Your session has expired. Please try again."),
            Self::Application { message, .. } => message.clone(),
            Self::Decode(_) => String::from("The server sent an unexpected response."),
            Self::Validation(err) => err.to_string(),
            Self::Flow(err) => err.to_string(),
            Self::InvalidConfig(msg) => msg.clone(),
        }
    }

    /// Converts the failure into store state for `resource`.
    #[must_use]
    pub fn to_action(&self, resource: Resource) -> Action {
        Action::RequestFailed {
            resource,
            kind: self.kind(),
            message: self.user_message(),
        }
    }
}
