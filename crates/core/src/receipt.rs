// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reservation receipts.
//!
//! A receipt is a cosmetic export of a confirmed reservation. It is not a
//! system-of-record document; the booking API owns the reservation.

use crate::error::CoreError;
use crate::flows::RoomBookingForm;
use auberge_domain::{
    GuestDetails, LineItem, PriceBreakdown, StayRange, TaxSchedule, format_amount,
    validate_stay_dates,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const RECEIPT_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:short] [year]");

const RULE: &str = "----------------------------------------";

/// Everything printed on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationData {
    /// Reservation number assigned by the booking API.
    pub reservation_number: String,
    /// The guest.
    pub client: GuestDetails,
    /// Room type display name.
    pub room_name: String,
    /// Room number assigned by the booking API, if any.
    pub room_number: Option<String>,
    /// The stay.
    pub stay: StayRange,
    /// Number of guests.
    pub guests: u32,
    /// Room price per night.
    pub nightly_rate: f64,
    /// Add-on services.
    pub services: Vec<LineItem>,
    /// Price breakdown as quoted.
    pub breakdown: PriceBreakdown,
    /// Date the receipt was issued.
    pub issued_on: Date,
}

impl ReservationData {
    /// Builds receipt data from a completed room booking form.
    ///
    /// # Errors
    ///
    /// Returns an error if the form's dates or prices are invalid.
    pub fn from_room_form(
        form: &RoomBookingForm,
        reservation_number: impl Into<String>,
        room_number: Option<String>,
        schedule: &TaxSchedule,
        issued_on: Date,
    ) -> Result<Self, CoreError> {
        let stay: StayRange = validate_stay_dates(&form.check_in, &form.check_out)?;
        let breakdown: PriceBreakdown = form.quote(schedule)?;

        Ok(Self {
            reservation_number: reservation_number.into(),
            client: form.guest.clone(),
            room_name: form.room_type.clone(),
            room_number,
            stay,
            guests: form.guests,
            nightly_rate: form.nightly_rate,
            services: form.add_ons.clone(),
            breakdown,
            issued_on,
        })
    }
}

fn format_date(date: Date) -> String {
    date.format(RECEIPT_DATE)
        .unwrap_or_else(|_| date.to_string())
}

fn format_rate(rate: f64) -> String {
    let percent: String = format!("{:.3}", rate * 100.0);
    percent.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Renders a plain-text receipt. Amounts are rounded to cents here and
/// nowhere earlier.
#[must_use]
pub fn render_receipt(data: &ReservationData) -> String {
    let mut out: String = String::new();
    let nights: u32 = data.stay.nights();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Reservation {}", data.reservation_number);
    let _ = writeln!(out, "Issued {}", format_date(data.issued_on));
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Guest:     {}", data.client.name);
    let _ = writeln!(out, "Email:     {}", data.client.email);
    let _ = writeln!(out, "Phone:     {}", data.client.phone);
    let _ = writeln!(out, "{RULE}");
    match &data.room_number {
        Some(number) => {
            let _ = writeln!(out, "Room:      {} (no. {number})", data.room_name);
        }
        None => {
            let _ = writeln!(out, "Room:      {}", data.room_name);
        }
    }
    let _ = writeln!(out, "Check-in:  {}", format_date(data.stay.check_in()));
    let _ = writeln!(out, "Check-out: {}", format_date(data.stay.check_out()));
    let _ = writeln!(out, "Guests:    {}", data.guests);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "{nights} night(s) x {:>10} {:>12}",
        format_amount(data.nightly_rate),
        format_amount(data.nightly_rate * f64::from(nights))
    );
    for service in &data.services {
        let _ = writeln!(
            out,
            "{} x{} {:>12}",
            service.label,
            service.quantity,
            format_amount(service.amount())
        );
    }
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Subtotal {:>12}", format_amount(data.breakdown.subtotal));
    for tax in &data.breakdown.taxes {
        let _ = writeln!(
            out,
            "{} ({}%) {:>12}",
            tax.name,
            format_rate(tax.rate),
            format_amount(tax.amount)
        );
    }
    let _ = writeln!(out, "Total {:>12}", format_amount(data.breakdown.total));

    out
}
