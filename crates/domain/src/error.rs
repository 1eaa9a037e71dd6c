// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The closed set of failure kinds surfaced to a guest.
///
/// Every error raised anywhere in the booking engine maps onto exactly one
/// of these kinds. The UI layer decides what to show from the kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A form field is missing or malformed. Shown inline, blocks "continue".
    Validation,
    /// The backend is unreachable or timed out. Shown as a maintenance banner.
    Network,
    /// The guest token was rejected. Handled by re-provisioning.
    Auth,
    /// The backend answered with an error message. Shown verbatim.
    Application,
}

impl ErrorKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Network => "network",
            Self::Auth => "auth",
            Self::Application => "application",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A required field was left empty.
    MissingField(&'static str),
    /// Failed to parse a calendar date.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Check-out is not strictly after check-in.
    InvalidStayRange {
        /// The check-in date.
        check_in: time::Date,
        /// The check-out date.
        check_out: time::Date,
    },
    /// A monetary amount was negative or not a finite number.
    NegativeAmount {
        /// The field holding the amount.
        field: String,
        /// The rejected value.
        value: f64,
    },
    /// A tax rate was negative or not a finite number.
    InvalidTaxRate {
        /// The tax name.
        name: String,
        /// The rejected rate.
        rate: f64,
    },
    /// Availability counters do not add up.
    InconsistentAvailability {
        /// The room type of the record.
        room_type: String,
        /// Total rooms of this type.
        total: u32,
        /// Rooms still available.
        available: u32,
        /// Rooms already reserved.
        reserved: u32,
    },
    /// A field failed its shape check.
    InvalidField {
        /// The field name.
        field: &'static str,
        /// A human-readable description of the problem.
        reason: String,
    },
    /// Party size is outside the accepted range.
    InvalidPartySize {
        /// The requested party size.
        size: u32,
        /// The largest accepted party size.
        max: u32,
    },
    /// A flow that needs at least one service was submitted without any.
    NoServicesSelected,
}

impl DomainError {
    /// Every domain error is a validation failure from the guest's point of view.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing required field: {field}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidStayRange {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date {check_out} must be after check-in date {check_in}"
                )
            }
            Self::NegativeAmount { field, value } => {
                write!(f, "Amount for '{field}' must be a non-negative number, got {value}")
            }
            Self::InvalidTaxRate { name, rate } => {
                write!(f, "Tax rate for '{name}' must be a non-negative number, got {rate}")
            }
            Self::InconsistentAvailability {
                room_type,
                total,
                available,
                reserved,
            } => {
                write!(
                    f,
                    "Availability for '{room_type}' is inconsistent: {available} available + {reserved} reserved != {total} total"
                )
            }
            Self::InvalidField { field, reason } => {
                write!(f, "Invalid {field}: {reason}")
            }
            Self::InvalidPartySize { size, max } => {
                write!(f, "Invalid party size: {size}. Must be between 1 and {max}")
            }
            Self::NoServicesSelected => write!(f, "At least one service must be selected"),
        }
    }
}

impl std::error::Error for DomainError {}
