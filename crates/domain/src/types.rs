// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Contact details collected by the "guest info" step of every flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDetails {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number, free-form.
    pub phone: String,
}

impl GuestDetails {
    /// Creates guest details.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

/// Card fields collected by the payment step.
///
/// These fields are shape-checked only. Charge authorization belongs to the
/// payment processor, never to this crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    /// Card number, 16 digits, spaces allowed.
    pub number: String,
    /// Name printed on the card.
    pub holder: String,
    /// Expiry as `MM/YY`.
    pub expiry: String,
    /// 3-digit security code.
    pub cvc: String,
}

impl CardDetails {
    /// Creates card details.
    #[must_use]
    pub fn new(
        number: impl Into<String>,
        holder: impl Into<String>,
        expiry: impl Into<String>,
        cvc: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            holder: holder.into(),
            expiry: expiry.into(),
            cvc: cvc.into(),
        }
    }

    /// The last four digits, for receipts and confirmation screens.
    #[must_use]
    pub fn last_four(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(char::is_ascii_digit).collect();
        let start: usize = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }
}

/// A bookable room category as listed by the inventory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    /// Stable room type code (e.g. `DELUXE`).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Price per night before tax.
    pub nightly_rate: f64,
    /// Maximum number of guests.
    pub capacity: u32,
}

/// An add-on service offered with a stay (spa, breakfast, parking).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price of one unit before tax.
    pub unit_price: f64,
}

/// A guest review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Review identifier. Locally generated while the review is pending.
    pub id: String,
    /// Display name of the author.
    pub author: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review body.
    pub comment: String,
    /// Number of "helpful" votes.
    pub helpful_count: u32,
    /// True while the review has been submitted but not yet acknowledged.
    #[serde(default)]
    pub pending: bool,
}

/// Aggregate review statistics for the hotel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Mean rating.
    pub average: f64,
    /// Number of reviews.
    pub count: u32,
}

impl ReviewStats {
    /// Returns the stats after one more review with `rating`.
    #[must_use]
    pub fn with_added(self, rating: u8) -> Self {
        let total: f64 = self.average * f64::from(self.count) + f64::from(rating);
        let count: u32 = self.count.saturating_add(1);
        Self {
            average: total / f64::from(count),
            count,
        }
    }

    /// Returns the stats after withdrawing one review with `rating`.
    #[must_use]
    pub fn with_removed(self, rating: u8) -> Self {
        if self.count <= 1 {
            return Self::default();
        }
        let total: f64 = self.average * f64::from(self.count) - f64::from(rating);
        let count: u32 = self.count - 1;
        Self {
            average: total / f64::from(count),
            count,
        }
    }
}
