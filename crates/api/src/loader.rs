// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Glue between the API client, the application store and the wizards.
//!
//! Every remote call here is bracketed by store actions: a
//! `RequestStarted` before, then either the loaded data or a
//! `RequestFailed` carrying the classified error. Failures become state
//! and are also returned to the caller.

use crate::client::HotelApiClient;
use crate::error::ApiError;
use crate::request_response::{NewReviewRequest, ReservationConfirmation, ReservationRequest};
use auberge::{Action, Resource, RoomBookingForm, Store, Wizard};
use auberge_domain::{Review, StayRange, TaxSchedule};
use tracing::warn;

fn record_failure(store: &mut Store, resource: Resource, err: &ApiError) {
    warn!(?resource, kind = %err.kind(), error = %err, "Request failed");
    store.dispatch(err.to_action(resource));
}

/// Loads the room type catalogue into the store.
///
/// # Errors
///
/// Returns the request error after recording it in the store.
pub async fn load_room_types(client: &HotelApiClient, store: &mut Store) -> Result<(), ApiError> {
    store.dispatch(Action::RequestStarted(Resource::RoomTypes));
    match client.room_types().await {
        Ok(room_types) => {
            store.dispatch(Action::RoomTypesLoaded(room_types));
            Ok(())
        }
        Err(e) => {
            record_failure(store, Resource::RoomTypes, &e);
            Err(e)
        }
    }
}

/// Loads availability for `stay` into the store.
///
/// # Errors
///
/// Returns the request error after recording it in the store.
pub async fn load_availability(
    client: &HotelApiClient,
    store: &mut Store,
    stay: &StayRange,
) -> Result<(), ApiError> {
    store.dispatch(Action::RequestStarted(Resource::Availability));
    match client.availability(stay).await {
        Ok(records) => {
            store.dispatch(Action::AvailabilityLoaded(records));
            Ok(())
        }
        Err(e) => {
            record_failure(store, Resource::Availability, &e);
            Err(e)
        }
    }
}

/// Loads the add-on service catalogue into the store.
///
/// # Errors
///
/// Returns the request error after recording it in the store.
pub async fn load_services(client: &HotelApiClient, store: &mut Store) -> Result<(), ApiError> {
    store.dispatch(Action::RequestStarted(Resource::Services));
    match client.services().await {
        Ok(services) => {
            store.dispatch(Action::ServicesLoaded(services));
            Ok(())
        }
        Err(e) => {
            record_failure(store, Resource::Services, &e);
            Err(e)
        }
    }
}

/// Loads reviews and their statistics into the store.
///
/// # Errors
///
/// Returns the request error after recording it in the store.
pub async fn load_reviews(client: &HotelApiClient, store: &mut Store) -> Result<(), ApiError> {
    store.dispatch(Action::RequestStarted(Resource::Reviews));
    match client.reviews().await {
        Ok(page) => {
            store.dispatch(Action::ReviewsLoaded {
                reviews: page.reviews,
                stats: page.stats,
            });
            Ok(())
        }
        Err(e) => {
            record_failure(store, Resource::Reviews, &e);
            Err(e)
        }
    }
}

/// Posts a review, showing it immediately and rolling it back if the
/// server refuses it.
///
/// # Errors
///
/// Returns the request error after the rollback.
pub async fn submit_review(
    client: &HotelApiClient,
    store: &mut Store,
    request: &NewReviewRequest,
) -> Result<Review, ApiError> {
    let local_id: String = format!("pending-{}", store.version());
    store.dispatch(Action::ReviewSubmitted(request.to_pending_review(&local_id)));

    match client.post_review(request).await {
        Ok(review) => {
            store.dispatch(Action::ReviewConfirmed {
                local_id,
                review: review.clone(),
            });
            Ok(review)
        }
        Err(e) => {
            store.dispatch(Action::ReviewRejected { local_id });
            record_failure(store, Resource::Reviews, &e);
            Err(e)
        }
    }
}

/// Records a helpful vote.
///
/// # Errors
///
/// Returns the request error after recording it in the store.
pub async fn vote_helpful(
    client: &HotelApiClient,
    store: &mut Store,
    review_id: &str,
) -> Result<(), ApiError> {
    match client.mark_helpful(review_id).await {
        Ok(_) => {
            store.dispatch(Action::HelpfulVoted {
                review_id: review_id.to_string(),
            });
            Ok(())
        }
        Err(e) => {
            record_failure(store, Resource::Reviews, &e);
            Err(e)
        }
    }
}

/// Submits a room booking from the last input step.
///
/// Navigation stays locked while the request is in flight. On success the
/// wizard moves to its confirmation step; on failure it unlocks on the
/// same step so the guest can correct and retry.
///
/// # Errors
///
/// Returns `ApiError::Flow` if the wizard is not ready to submit, or the
/// request error after recording it in the store.
pub async fn submit_room_booking(
    client: &HotelApiClient,
    store: &mut Store,
    wizard: &mut Wizard<RoomBookingForm>,
    schedule: &TaxSchedule,
) -> Result<ReservationConfirmation, ApiError> {
    wizard.begin_submission()?;

    let outcome: Result<ReservationConfirmation, ApiError> =
        match ReservationRequest::from_form(wizard.data(), schedule) {
            Ok(request) => {
                store.dispatch(Action::RequestStarted(Resource::Reservation));
                client.create_reservation(&request).await
            }
            Err(e) => Err(e),
        };

    match outcome {
        Ok(confirmation) => {
            store.dispatch(Action::RequestSucceeded(Resource::Reservation));
            wizard.complete_submission()?;
            Ok(confirmation)
        }
        Err(e) => {
            wizard.abort_submission()?;
            record_failure(store, Resource::Reservation, &e);
            Err(e)
        }
    }
}
