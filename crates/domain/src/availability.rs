// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability gating.
//!
//! This module turns inventory counts fetched from the booking API into a
//! booking decision per room type: whether booking is enabled, which
//! availability tier applies, and which occupancy band to display.
//!
//! Evaluation is read-only and deterministic: the same inputs always produce
//! the same decision.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Largest remaining count still classified as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Inventory counters for one room type over a date range.
///
/// Invariant: `available + reserved == total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomTypeAvailability {
    room_type: String,
    total: u32,
    available: u32,
    reserved: u32,
}

impl RoomTypeAvailability {
    /// Creates a validated availability record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InconsistentAvailability` if
    /// `available + reserved != total`.
    pub fn new(
        room_type: impl Into<String>,
        total: u32,
        available: u32,
        reserved: u32,
    ) -> Result<Self, DomainError> {
        let room_type: String = room_type.into();
        if available.checked_add(reserved) != Some(total) {
            return Err(DomainError::InconsistentAvailability {
                room_type,
                total,
                available,
                reserved,
            });
        }
        Ok(Self {
            room_type,
            total,
            available,
            reserved,
        })
    }

    /// Returns the room type identifier.
    #[must_use]
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    /// Returns the total number of rooms of this type.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Returns the number of rooms still available.
    #[must_use]
    pub const fn available(&self) -> u32 {
        self.available
    }

    /// Returns the number of rooms already reserved.
    #[must_use]
    pub const fn reserved(&self) -> u32 {
        self.reserved
    }

    /// Percentage of rooms reserved, `0.0` when the type has no rooms.
    #[must_use]
    pub fn occupancy_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.reserved) / f64::from(self.total) * 100.0
    }

    /// The availability tier for the remaining count.
    #[must_use]
    pub const fn tier(&self) -> AvailabilityTier {
        AvailabilityTier::classify(self.available)
    }
}

/// Coarse classification of the remaining room count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityTier {
    /// No rooms left. Booking is disabled.
    SoldOut,
    /// Between 1 and 5 rooms left. Booking stays enabled with a warning badge.
    LowStock,
    /// More than 5 rooms left.
    Available,
}

impl AvailabilityTier {
    /// Classifies a remaining room count.
    #[must_use]
    pub const fn classify(available: u32) -> Self {
        match available {
            0 => Self::SoldOut,
            1..=LOW_STOCK_THRESHOLD => Self::LowStock,
            _ => Self::Available,
        }
    }

    /// Returns true if booking actions are enabled for this tier.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        !matches!(self, Self::SoldOut)
    }

    /// Returns the string representation of the tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SoldOut => "sold_out",
            Self::LowStock => "low_stock",
            Self::Available => "available",
        }
    }
}

/// Display band for an occupancy percentage. Never gates booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyBand {
    /// At least 80% reserved.
    High,
    /// At least 60% reserved.
    Popular,
    /// Below 60% reserved.
    Normal,
}

impl OccupancyBand {
    /// Classifies an occupancy percentage (0 to 100).
    #[must_use]
    pub fn classify(rate: f64) -> Self {
        if rate >= 80.0 {
            Self::High
        } else if rate >= 60.0 {
            Self::Popular
        } else {
            Self::Normal
        }
    }

    /// Badge label shown to guests.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "très demandée",
            Self::Popular => "populaire",
            Self::Normal => "disponible",
        }
    }
}

/// Where a gate decision came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilitySource {
    /// A live record from the inventory API.
    Live,
    /// The locally cached static flag. Possibly stale.
    StaticFallback,
    /// Nothing known about this room type.
    Unknown,
}

/// The booking decision for one room type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateDecision {
    /// The room type evaluated.
    pub room_type: String,
    /// The availability tier.
    pub tier: AvailabilityTier,
    /// Whether booking actions are enabled.
    pub bookable: bool,
    /// Rooms remaining, when known from a live record.
    pub remaining: Option<u32>,
    /// Occupancy percentage, when known from a live record.
    pub occupancy_rate: Option<f64>,
    /// Occupancy display band, when known from a live record.
    pub occupancy_band: Option<OccupancyBand>,
    /// Where the decision came from.
    pub source: AvailabilitySource,
}

impl GateDecision {
    /// Returns true if the decision is based on stale or missing data and
    /// the UI should show a non-blocking warning.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        !matches!(self.source, AvailabilitySource::Live)
    }
}

/// Decides whether booking is enabled per room type.
///
/// Live records win. When a room type is missing from the live data the
/// gate falls back to a locally cached static flag, and when that is
/// missing too booking stays enabled rather than blocking the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityGate {
    fallback: HashMap<String, bool>,
}

impl AvailabilityGate {
    /// Creates a gate with no static fallback data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gate with a static availability flag per room type.
    #[must_use]
    pub fn with_fallback<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        Self {
            fallback: flags
                .into_iter()
                .map(|(room_type, flag)| (room_type.into(), flag))
                .collect(),
        }
    }

    /// Records the static availability flag for a room type.
    pub fn set_fallback(&mut self, room_type: impl Into<String>, available: bool) {
        self.fallback.insert(room_type.into(), available);
    }

    /// Evaluates a room type against the live records.
    #[must_use]
    pub fn evaluate(&self, room_type: &str, records: &[RoomTypeAvailability]) -> GateDecision {
        if let Some(record) = records.iter().find(|r| r.room_type == room_type) {
            let tier: AvailabilityTier = record.tier();
            let occupancy_rate: f64 = record.occupancy_rate();
            debug!(
                room_type,
                available = record.available,
                tier = tier.as_str(),
                "Availability from live record"
            );
            return GateDecision {
                room_type: room_type.to_string(),
                tier,
                bookable: tier.is_bookable(),
                remaining: Some(record.available),
                occupancy_rate: Some(occupancy_rate),
                occupancy_band: Some(OccupancyBand::classify(occupancy_rate)),
                source: AvailabilitySource::Live,
            };
        }

        match self.fallback.get(room_type) {
            Some(&flag) => {
                warn!(room_type, flag, "No live availability, using static flag");
                let tier: AvailabilityTier = if flag {
                    AvailabilityTier::Available
                } else {
                    AvailabilityTier::SoldOut
                };
                GateDecision {
                    room_type: room_type.to_string(),
                    tier,
                    bookable: flag,
                    remaining: None,
                    occupancy_rate: None,
                    occupancy_band: None,
                    source: AvailabilitySource::StaticFallback,
                }
            }
            None => {
                warn!(room_type, "No availability data at all, leaving booking enabled");
                GateDecision {
                    room_type: room_type.to_string(),
                    tier: AvailabilityTier::Available,
                    bookable: true,
                    remaining: None,
                    occupancy_rate: None,
                    occupancy_band: None,
                    source: AvailabilitySource::Unknown,
                }
            }
        }
    }
}
