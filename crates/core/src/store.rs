// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Application store.
//!
//! Server-derived data (inventory, availability, services, reviews) is held
//! in one typed state container and shared across pages without
//! re-fetching. The store is single-writer: every change goes through
//! `Store::dispatch`, which runs the pure `reduce` function.

use auberge_domain::{
    AvailabilityGate, ErrorKind, GateDecision, Review, ReviewStats, RoomType,
    RoomTypeAvailability, Service,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Remote resources whose loading state is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    /// Room type catalogue.
    RoomTypes,
    /// Availability for a date range.
    Availability,
    /// Add-on service catalogue.
    Services,
    /// Reviews and review statistics.
    Reviews,
    /// Reservation submission.
    Reservation,
}

/// A message shown to the guest after a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// The failure kind.
    pub kind: ErrorKind,
    /// The resource whose request failed.
    pub resource: Resource,
    /// The message to display.
    pub message: String,
}

/// Everything the pages read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Room type catalogue.
    pub room_types: Vec<RoomType>,
    /// Latest availability records.
    pub availability: Vec<RoomTypeAvailability>,
    /// Add-on services.
    pub services: Vec<Service>,
    /// Reviews, newest first. Pending reviews are included.
    pub reviews: Vec<Review>,
    /// Aggregate review statistics.
    pub review_stats: ReviewStats,
    /// Resources with a request in flight.
    pub loading: Vec<Resource>,
    /// Error banner, if any.
    pub banner: Option<Banner>,
    /// True when the backend is unreachable and the maintenance page shows.
    pub maintenance: bool,
}

/// A request for a state change.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A request for `Resource` was sent.
    RequestStarted(Resource),
    /// A request for `Resource` failed.
    RequestFailed {
        /// The resource requested.
        resource: Resource,
        /// The failure kind.
        kind: ErrorKind,
        /// The message to show.
        message: String,
    },
    /// A request for `Resource` succeeded without data for the store.
    RequestSucceeded(Resource),
    /// The room type catalogue arrived.
    RoomTypesLoaded(Vec<RoomType>),
    /// Availability arrived.
    AvailabilityLoaded(Vec<RoomTypeAvailability>),
    /// The service catalogue arrived.
    ServicesLoaded(Vec<Service>),
    /// Reviews and stats arrived.
    ReviewsLoaded {
        /// Reviews, newest first.
        reviews: Vec<Review>,
        /// Aggregate statistics.
        stats: ReviewStats,
    },
    /// A review was posted; show it immediately as pending.
    ReviewSubmitted(Review),
    /// The server accepted the pending review with id `local_id`.
    ReviewConfirmed {
        /// The locally generated id of the pending review.
        local_id: String,
        /// The stored review.
        review: Review,
    },
    /// The server refused the pending review with id `local_id`.
    ReviewRejected {
        /// The locally generated id of the pending review.
        local_id: String,
    },
    /// A helpful vote was recorded.
    HelpfulVoted {
        /// The review voted on.
        review_id: String,
    },
    /// The guest dismissed the banner or pressed "retry".
    DismissBanner,
}

fn finish(state: &mut AppState, resource: Resource) {
    state.loading.retain(|r| *r != resource);
}

fn clear_failure(state: &mut AppState, resource: Resource) {
    finish(state, resource);
    if state
        .banner
        .as_ref()
        .is_some_and(|banner| banner.resource == resource)
    {
        state.banner = None;
    }
    state.maintenance = false;
}

/// Applies an action to the state, producing the next state.
///
/// This function is pure: the same state and action always produce the
/// same result.
#[must_use]
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next: AppState = state.clone();

    match action {
        Action::RequestStarted(resource) => {
            if !next.loading.contains(&resource) {
                next.loading.push(resource);
            }
        }
        Action::RequestFailed {
            resource,
            kind,
            message,
        } => {
            finish(&mut next, resource);
            if kind == ErrorKind::Network {
                next.maintenance = true;
            }
            next.banner = Some(Banner {
                kind,
                resource,
                message,
            });
        }
        Action::RequestSucceeded(resource) => clear_failure(&mut next, resource),
        Action::RoomTypesLoaded(room_types) => {
            next.room_types = room_types;
            clear_failure(&mut next, Resource::RoomTypes);
        }
        Action::AvailabilityLoaded(records) => {
            next.availability = records;
            clear_failure(&mut next, Resource::Availability);
        }
        Action::ServicesLoaded(services) => {
            next.services = services;
            clear_failure(&mut next, Resource::Services);
        }
        Action::ReviewsLoaded { reviews, stats } => {
            // Keep pending reviews the server does not know about yet.
            let pending: Vec<Review> = std::mem::take(&mut next.reviews)
                .into_iter()
                .filter(|r| r.pending)
                .collect();
            next.review_stats = pending
                .iter()
                .fold(stats, |acc, review| acc.with_added(review.rating));
            next.reviews = pending.into_iter().chain(reviews).collect();
            clear_failure(&mut next, Resource::Reviews);
        }
        Action::ReviewSubmitted(mut review) => {
            review.pending = true;
            next.review_stats = next.review_stats.with_added(review.rating);
            next.reviews.insert(0, review);
        }
        Action::ReviewConfirmed {
            local_id,
            mut review,
        } => {
            review.pending = false;
            if let Some(slot) = next.reviews.iter_mut().find(|r| r.id == local_id) {
                if slot.rating != review.rating {
                    next.review_stats = next
                        .review_stats
                        .with_removed(slot.rating)
                        .with_added(review.rating);
                }
                *slot = review;
            } else {
                warn!(%local_id, "Confirmed review was not pending");
            }
        }
        Action::ReviewRejected { local_id } => {
            if let Some(index) = next.reviews.iter().position(|r| r.id == local_id) {
                let removed: Review = next.reviews.remove(index);
                next.review_stats = next.review_stats.with_removed(removed.rating);
            }
        }
        Action::HelpfulVoted { review_id } => {
            if let Some(review) = next.reviews.iter_mut().find(|r| r.id == review_id) {
                review.helpful_count = review.helpful_count.saturating_add(1);
            }
        }
        Action::DismissBanner => {
            next.banner = None;
            next.maintenance = false;
        }
    }

    next
}

/// Single-writer container around `AppState`.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
    version: u64,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an action and returns the new state.
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        self.state = reduce(&self.state, action);
        self.version += 1;
        debug!(version = self.version, "State updated");
        &self.state
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Number of actions applied so far.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Looks up a room type by code.
    #[must_use]
    pub fn room_type(&self, code: &str) -> Option<&RoomType> {
        self.state.room_types.iter().find(|room| room.code == code)
    }

    /// Looks up the live availability record for a room type.
    #[must_use]
    pub fn availability_for(&self, code: &str) -> Option<&RoomTypeAvailability> {
        self.state
            .availability
            .iter()
            .find(|record| record.room_type() == code)
    }

    /// Runs the availability gate against the stored records.
    #[must_use]
    pub fn gate(&self, gate: &AvailabilityGate, code: &str) -> GateDecision {
        gate.evaluate(code, &self.state.availability)
    }

    /// Returns true while a request for `resource` is in flight.
    #[must_use]
    pub fn is_loading(&self, resource: Resource) -> bool {
        self.state.loading.contains(&resource)
    }

    /// Mean review rating, `None` when there are no reviews.
    #[must_use]
    pub fn average_rating(&self) -> Option<f64> {
        (self.state.review_stats.count > 0).then_some(self.state.review_stats.average)
    }
}
