// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire request and response types.

use crate::error::ApiError;
use auberge::RoomBookingForm;
use auberge_domain::{
    DomainError, GuestDetails, PriceBreakdown, Review, ReviewStats, RoomTypeAvailability,
    StayRange, TaxSchedule, validate_guest_details, validate_review,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error body returned by the API on refusal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Message meant for the guest.
    pub message: String,
}

/// Availability record as sent by the inventory API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// Room type identifier.
    pub room_type: String,
    /// Total rooms of this type.
    pub total: u32,
    /// Rooms still available.
    pub available: u32,
    /// Rooms reserved.
    pub reserved: u32,
    /// Occupancy percentage as computed by the server.
    #[serde(default)]
    pub percentage: Option<f64>,
}

impl TryFrom<AvailabilityRecord> for RoomTypeAvailability {
    type Error = DomainError;

    fn try_from(record: AvailabilityRecord) -> Result<Self, Self::Error> {
        let availability: Self = Self::new(
            record.room_type,
            record.total,
            record.available,
            record.reserved,
        )?;
        let local: f64 = availability.occupancy_rate();
        if let Some(percentage) = record.percentage.filter(|p| (p - local).abs() > 0.5) {
            debug!(
                room_type = availability.room_type(),
                server = percentage,
                local,
                "Server occupancy differs from counters, using counters"
            );
        }
        Ok(availability)
    }
}

/// An add-on line on a reservation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnRequest {
    /// Service name.
    pub label: String,
    /// Number of units.
    pub quantity: u32,
}

/// Request to create a room reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRequest {
    /// Room type code.
    pub room_type: String,
    /// Check-in date, `YYYY-MM-DD`.
    pub check_in: String,
    /// Check-out date, `YYYY-MM-DD`.
    pub check_out: String,
    /// Number of guests.
    pub guests: u32,
    /// Guest contact details.
    pub guest: GuestDetails,
    /// Selected add-ons.
    pub add_ons: Vec<AddOnRequest>,
    /// Total shown to the guest, for server-side cross-checking.
    pub quoted_total: f64,
}

impl ReservationRequest {
    /// Builds a request from a completed room booking form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the dates, guest details or prices
    /// are invalid.
    pub fn from_form(form: &RoomBookingForm, schedule: &TaxSchedule) -> Result<Self, ApiError> {
        let stay: StayRange = StayRange::parse(&form.check_in, &form.check_out)?;
        validate_guest_details(&form.guest)?;
        let breakdown: PriceBreakdown = form.quote(schedule)?;

        Ok(Self {
            room_type: form.room_type.clone(),
            check_in: stay.check_in().to_string(),
            check_out: stay.check_out().to_string(),
            guests: form.guests,
            guest: form.guest.clone(),
            add_ons: form
                .add_ons
                .iter()
                .map(|item| AddOnRequest {
                    label: item.label.clone(),
                    quantity: item.quantity,
                })
                .collect(),
            quoted_total: breakdown.total,
        })
    }
}

/// Response to a successful reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationConfirmation {
    /// Reservation number.
    pub reservation_number: String,
    /// Assigned room, if the hotel assigns at booking time.
    #[serde(default)]
    pub room_number: Option<String>,
    /// Total charged.
    pub total: f64,
}

/// Reviews with their aggregate statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewsPage {
    /// Reviews, newest first.
    pub reviews: Vec<Review>,
    /// Aggregate statistics.
    pub stats: ReviewStats,
}

/// Request to post a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReviewRequest {
    /// Display name of the author.
    pub author: String,
    /// Rating from 1 to 5.
    pub rating: u8,
    /// Review text.
    pub comment: String,
}

impl NewReviewRequest {
    /// Creates a validated review request.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Validation` if the rating or comment is invalid.
    pub fn new(
        author: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let comment: String = comment.into();
        validate_review(rating, &comment)?;
        Ok(Self {
            author: author.into(),
            rating,
            comment,
        })
    }

    /// Builds the optimistic local copy shown while the post is in flight.
    #[must_use]
    pub fn to_pending_review(&self, local_id: impl Into<String>) -> Review {
        Review {
            id: local_id.into(),
            author: self.author.clone(),
            rating: self.rating,
            comment: self.comment.clone(),
            helpful_count: 0,
            pending: true,
        }
    }
}

/// Response to a helpful vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpfulResponse {
    /// Updated vote count.
    pub helpful_count: u32,
}

/// Response to the guest auth handshake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestTokenResponse {
    /// The guest token.
    pub token: String,
}

/// Request to open a support conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartConversationRequest {
    /// Name the guest gave in the chat widget.
    pub name: String,
}

/// A support conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation identifier.
    pub id: String,
}

/// Request to send a chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    /// Message text.
    pub body: String,
}

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAuthor {
    /// The guest.
    Guest,
    /// Hotel staff.
    Staff,
}

/// A chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonic message identifier, used as the poll cursor.
    pub id: u64,
    /// Who wrote it.
    pub author: ChatAuthor,
    /// Message text.
    pub body: String,
    /// Server timestamp, ISO 8601.
    pub sent_at: String,
}
