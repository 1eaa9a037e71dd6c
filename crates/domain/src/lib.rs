// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod error;
mod pricing;
mod stay;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{
    AvailabilityGate, AvailabilitySource, AvailabilityTier, GateDecision, LOW_STOCK_THRESHOLD,
    OccupancyBand, RoomTypeAvailability,
};
pub use error::{DomainError, ErrorKind};
pub use pricing::{
    LineItem, PriceBreakdown, TaxLine, TaxRate, TaxSchedule, aggregate, format_amount,
    round_to_cents, subtotal_of,
};
pub use stay::{StayRange, nights_between, parse_stay_date};
pub use types::{CardDetails, GuestDetails, Review, ReviewStats, RoomType, Service};
pub use validation::{
    MAX_PARTY_SIZE, validate_card_details, validate_guest_details, validate_stay_dates,
    validate_review, validate_table_request,
};
