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

mod cache;
mod chat;
mod client;
mod config;
mod error;
mod guest_auth;
mod loader;
mod request_response;

#[cfg(test)]
mod tests;

pub use cache::TtlCache;
pub use chat::{ChatPoller, DEFAULT_POLL_INTERVAL, MIN_POLL_INTERVAL};
pub use client::HotelApiClient;
pub use config::{
    API_URL_VAR, ClientConfig, DEFAULT_HOTEL_ID, DEFAULT_INVENTORY_TTL, DEFAULT_TIMEOUT,
    HOTEL_ID_VAR, TIMEOUT_VAR,
};
pub use error::{ApiError, MAINTENANCE_MESSAGE};
pub use guest_auth::{
    EXPIRY_MARGIN_SECS, GUEST_TOKEN_TYPE, TokenCache, TokenClaims, decode_claims, is_token_valid,
    unix_now,
};
pub use loader::{
    load_availability, load_reviews, load_room_types, load_services, submit_review,
    submit_room_booking, vote_helpful,
};
pub use request_response::{
    AddOnRequest, AvailabilityRecord, ChatAuthor, ChatMessage, Conversation, ErrorBody,
    GuestTokenResponse, HelpfulResponse, NewReviewRequest, ReservationConfirmation,
    ReservationRequest, ReviewsPage, SendMessageRequest, StartConversationRequest,
};
