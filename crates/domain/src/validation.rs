// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-step field validation.
//!
//! These are input-shape checks for the booking forms. They decide whether
//! a wizard step may advance; they are not a security boundary.

use crate::error::DomainError;
use crate::stay::{StayRange, parse_stay_date};
use crate::types::{CardDetails, GuestDetails};
use regex::Regex;
use std::sync::LazyLock;

/// Largest party accepted by the restaurant.
pub const MAX_PARTY_SIZE: u32 = 20;

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

static TIME_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$"));

fn matches_pattern(
    pattern: &LazyLock<Result<Regex, regex::Error>>,
    field: &'static str,
    value: &str,
) -> Result<bool, DomainError> {
    pattern
        .as_ref()
        .map(|re| re.is_match(value))
        .map_err(|e| DomainError::InvalidField {
            field,
            reason: e.to_string(),
        })
}

fn require(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(())
}

/// Validates the "dates" step of a room booking.
///
/// # Errors
///
/// Returns an error if either date is missing or malformed, or if check-out
/// is not strictly after check-in.
pub fn validate_stay_dates(check_in: &str, check_out: &str) -> Result<StayRange, DomainError> {
    StayRange::parse(check_in, check_out)
}

/// Validates the "guest info" step shared by every flow.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The email is empty or does not look like an email address
/// - The phone number is empty
pub fn validate_guest_details(guest: &GuestDetails) -> Result<(), DomainError> {
    require("name", &guest.name)?;
    require("email", &guest.email)?;

    if !matches_pattern(&EMAIL_PATTERN, "email", guest.email.trim())? {
        return Err(DomainError::InvalidField {
            field: "email",
            reason: String::from("not a valid email address"),
        });
    }

    require("phone", &guest.phone)?;
    Ok(())
}

/// Validates the shape of the payment fields.
///
/// # Errors
///
/// Returns an error if:
/// - The card number is not 16 digits (spaces are ignored)
/// - The card holder is empty
/// - The expiry is not `MM/YY` with a month between 01 and 12
/// - The CVC is not 3 digits
pub fn validate_card_details(card: &CardDetails) -> Result<(), DomainError> {
    let digits: String = card.number.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidField {
            field: "card_number",
            reason: String::from("must be 16 digits"),
        });
    }

    require("card_holder", &card.holder)?;
    validate_expiry(&card.expiry)?;

    if card.cvc.len() != 3 || !card.cvc.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidField {
            field: "cvc",
            reason: String::from("must be 3 digits"),
        });
    }

    Ok(())
}

fn validate_expiry(expiry: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidField {
        field: "expiry",
        reason: format!("'{expiry}' is not in MM/YY format"),
    };

    if expiry.len() != 5 {
        return Err(invalid());
    }
    let (month, year) = expiry.split_once('/').ok_or_else(invalid)?;
    if month.len() != 2 || year.len() != 2 {
        return Err(invalid());
    }
    if !month.chars().chain(year.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let month: u8 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok(())
}

/// Validates the restaurant "details" step.
///
/// # Errors
///
/// Returns an error if the date is missing or malformed, the time is not
/// `HH:MM`, or the party size is outside `1..=MAX_PARTY_SIZE`.
pub fn validate_table_request(
    date: &str,
    time: &str,
    party_size: u32,
) -> Result<(), DomainError> {
    parse_stay_date(date)?;

    require("time", time)?;
    if !matches_pattern(&TIME_PATTERN, "time", time.trim())? {
        return Err(DomainError::InvalidField {
            field: "time",
            reason: format!("'{time}' is not in HH:MM format"),
        });
    }

    if !(1..=MAX_PARTY_SIZE).contains(&party_size) {
        return Err(DomainError::InvalidPartySize {
            size: party_size,
            max: MAX_PARTY_SIZE,
        });
    }

    Ok(())
}

/// Validates a review before it is posted.
///
/// # Errors
///
/// Returns an error if the rating is outside 1 to 5 or the comment is empty.
pub fn validate_review(rating: u8, comment: &str) -> Result<(), DomainError> {
    if !(1..=5).contains(&rating) {
        return Err(DomainError::InvalidField {
            field: "rating",
            reason: format!("must be between 1 and 5, got {rating}"),
        });
    }
    require("comment", comment)
}
