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

mod error;
mod flows;
mod receipt;
mod store;
mod wizard;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::CoreError;
pub use flows::{
    RestaurantBookingForm, RoomBookingForm, SpaBookingForm, restaurant_flow, room_flow, spa_flow,
};
pub use receipt::{ReservationData, render_receipt};
pub use store::{Action, AppState, Banner, Resource, Store, reduce};
pub use wizard::{Step, StepId, StepValidator, Transition, Wizard};
