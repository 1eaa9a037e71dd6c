// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RestaurantBookingForm, RoomBookingForm, SpaBookingForm};
use auberge_domain::{CardDetails, GuestDetails, LineItem, Review};

pub fn create_test_guest() -> GuestDetails {
    GuestDetails::new("Marie Tremblay", "marie@example.com", "+1 514 555 0199")
}

pub fn create_test_card() -> CardDetails {
    CardDetails::new("4242 4242 4242 4242", "Marie Tremblay", "09/27", "123")
}

/// A room form with every step filled in.
pub fn create_complete_room_form() -> RoomBookingForm {
    let mut form: RoomBookingForm = RoomBookingForm::new("DELUXE", 200.0);
    form.check_in = String::from("2025-03-10");
    form.check_out = String::from("2025-03-13");
    form.guests = 2;
    form.guest = create_test_guest();
    form.card = create_test_card();
    form
}

pub fn create_complete_restaurant_form() -> RestaurantBookingForm {
    RestaurantBookingForm {
        date: String::from("2025-03-10"),
        time: String::from("19:30"),
        party_size: 4,
        special_requests: Some(String::from("Window table")),
        guest: create_test_guest(),
        card: create_test_card(),
    }
}

pub fn create_complete_spa_form() -> SpaBookingForm {
    SpaBookingForm {
        date: String::from("2025-03-11"),
        services: vec![
            LineItem::new("Massage 60 min", 120.0, 1).unwrap(),
            LineItem::new("Sauna pass", 30.0, 2).unwrap(),
        ],
        guest: create_test_guest(),
    }
}

pub fn create_test_review(id: &str, rating: u8) -> Review {
    Review {
        id: String::from(id),
        author: String::from("Marie"),
        rating,
        comment: String::from("Très beau séjour"),
        helpful_count: 0,
        pending: false,
    }
}
