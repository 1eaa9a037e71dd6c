// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking flows.
//!
//! Every booking page runs the same `Wizard`, configured here with its own
//! form data and step list:
//!
//! - Room: dates, add-ons, guest info, payment, confirmation
//! - Restaurant: details, guest info, payment, confirmation
//! - Spa: services, guest info, confirmation

use crate::error::CoreError;
use crate::wizard::{Step, StepId, Wizard};
use auberge_domain::{
    CardDetails, DomainError, GuestDetails, LineItem, PriceBreakdown, TaxSchedule, aggregate,
    nights_between, parse_stay_date, subtotal_of, validate_card_details, validate_guest_details,
    validate_stay_dates, validate_table_request,
};
use serde::{Deserialize, Serialize};

/// Form data for a room reservation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomBookingForm {
    /// Room type code.
    pub room_type: String,
    /// Nightly rate of the chosen room type.
    pub nightly_rate: f64,
    /// Check-in date, ISO 8601. Empty until chosen.
    pub check_in: String,
    /// Check-out date, ISO 8601. Empty until chosen.
    pub check_out: String,
    /// Number of guests.
    pub guests: u32,
    /// Selected add-on services.
    pub add_ons: Vec<LineItem>,
    /// Guest contact details.
    pub guest: GuestDetails,
    /// Card guaranteeing the reservation.
    pub card: CardDetails,
}

impl RoomBookingForm {
    /// Starts a form for a room type at its nightly rate.
    #[must_use]
    pub fn new(room_type: impl Into<String>, nightly_rate: f64) -> Self {
        Self {
            room_type: room_type.into(),
            nightly_rate,
            guests: 1,
            ..Self::default()
        }
    }

    /// Nights currently selected, `0` while dates are incomplete.
    #[must_use]
    pub fn nights(&self) -> u32 {
        nights_between(&self.check_in, &self.check_out)
    }

    /// Live price breakdown for the current selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate or any add-on price is negative.
    pub fn quote(&self, schedule: &TaxSchedule) -> Result<PriceBreakdown, DomainError> {
        aggregate(self.nightly_rate, self.nights(), &self.add_ons, schedule)
    }
}

fn validate_room_dates(form: &RoomBookingForm) -> Result<(), DomainError> {
    validate_stay_dates(&form.check_in, &form.check_out)?;
    if form.guests == 0 {
        return Err(DomainError::InvalidField {
            field: "guests",
            reason: String::from("at least one guest is required"),
        });
    }
    Ok(())
}

fn validate_room_add_ons(form: &RoomBookingForm) -> Result<(), DomainError> {
    subtotal_of(&form.add_ons).map(|_| ())
}

fn validate_room_guest(form: &RoomBookingForm) -> Result<(), DomainError> {
    validate_guest_details(&form.guest)
}

fn validate_room_payment(form: &RoomBookingForm) -> Result<(), DomainError> {
    validate_card_details(&form.card)
}

/// Builds the room reservation wizard.
///
/// # Errors
///
/// Returns an error only if the step list is malformed.
pub fn room_flow(form: RoomBookingForm) -> Result<Wizard<RoomBookingForm>, CoreError> {
    Wizard::new(
        vec![
            Step::new(StepId::Dates, validate_room_dates),
            Step::new(StepId::AddOns, validate_room_add_ons),
            Step::new(StepId::GuestInfo, validate_room_guest),
            Step::new(StepId::Payment, validate_room_payment),
        ],
        form,
    )
}

/// Form data for a restaurant table reservation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantBookingForm {
    /// Reservation date, ISO 8601.
    pub date: String,
    /// Seating time, `HH:MM`.
    pub time: String,
    /// Number of diners.
    pub party_size: u32,
    /// Free-form requests (allergies, occasion).
    pub special_requests: Option<String>,
    /// Guest contact details.
    pub guest: GuestDetails,
    /// Card used to hold the table.
    pub card: CardDetails,
}

fn validate_restaurant_details(form: &RestaurantBookingForm) -> Result<(), DomainError> {
    validate_table_request(&form.date, &form.time, form.party_size)
}

fn validate_restaurant_guest(form: &RestaurantBookingForm) -> Result<(), DomainError> {
    validate_guest_details(&form.guest)
}

fn validate_restaurant_payment(form: &RestaurantBookingForm) -> Result<(), DomainError> {
    validate_card_details(&form.card)
}

/// Builds the restaurant reservation wizard.
///
/// # Errors
///
/// Returns an error only if the step list is malformed.
pub fn restaurant_flow(
    form: RestaurantBookingForm,
) -> Result<Wizard<RestaurantBookingForm>, CoreError> {
    Wizard::new(
        vec![
            Step::new(StepId::Details, validate_restaurant_details),
            Step::new(StepId::GuestInfo, validate_restaurant_guest),
            Step::new(StepId::Payment, validate_restaurant_payment),
        ],
        form,
    )
}

/// Form data for a spa booking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpaBookingForm {
    /// Appointment date, ISO 8601.
    pub date: String,
    /// Selected treatments.
    pub services: Vec<LineItem>,
    /// Guest contact details.
    pub guest: GuestDetails,
}

impl SpaBookingForm {
    /// Live price breakdown for the selected treatments.
    ///
    /// # Errors
    ///
    /// Returns an error if any treatment price is negative.
    pub fn quote(&self, schedule: &TaxSchedule) -> Result<PriceBreakdown, DomainError> {
        aggregate(0.0, 0, &self.services, schedule)
    }
}

fn validate_spa_services(form: &SpaBookingForm) -> Result<(), DomainError> {
    parse_stay_date(&form.date)?;
    if !form.services.iter().any(|service| service.quantity > 0) {
        return Err(DomainError::NoServicesSelected);
    }
    subtotal_of(&form.services).map(|_| ())
}

fn validate_spa_guest(form: &SpaBookingForm) -> Result<(), DomainError> {
    validate_guest_details(&form.guest)
}

/// Builds the spa booking wizard.
///
/// # Errors
///
/// Returns an error only if the step list is malformed.
pub fn spa_flow(form: SpaBookingForm) -> Result<Wizard<SpaBookingForm>, CoreError> {
    Wizard::new(
        vec![
            Step::new(StepId::Services, validate_spa_services),
            Step::new(StepId::GuestInfo, validate_spa_guest),
        ],
        form,
    )
}
