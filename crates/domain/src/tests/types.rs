// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CardDetails, GuestDetails, LineItem, ReviewStats};

#[test]
fn test_card_last_four_ignores_spaces() {
    let card: CardDetails = CardDetails::new("4242 4242 4242 1234", "A. Guest", "09/27", "123");
    assert_eq!(card.last_four(), "1234");
}

#[test]
fn test_card_last_four_short_number() {
    let card: CardDetails = CardDetails::new("12", "A. Guest", "09/27", "123");
    assert_eq!(card.last_four(), "12");
}

#[test]
fn test_guest_details_default_is_empty() {
    let guest: GuestDetails = GuestDetails::default();
    assert!(guest.name.is_empty());
    assert!(guest.email.is_empty());
    assert!(guest.phone.is_empty());
}

#[test]
fn test_line_item_amount() {
    let item: LineItem = LineItem::new("Champagne", 95.0, 2).unwrap();
    assert!((item.amount() - 190.0).abs() < f64::EPSILON);

    let none: LineItem = LineItem::new("Champagne", 95.0, 0).unwrap();
    assert!(none.amount().abs() < f64::EPSILON);
}

#[test]
fn test_review_stats_add_and_remove() {
    let stats: ReviewStats = ReviewStats {
        average: 4.0,
        count: 3,
    };

    let added: ReviewStats = stats.with_added(2);
    assert_eq!(added.count, 4);
    assert!((added.average - 3.5).abs() < 1e-9);

    let removed: ReviewStats = added.with_removed(2);
    assert_eq!(removed.count, 3);
    assert!((removed.average - 4.0).abs() < 1e-9);
}

#[test]
fn test_review_stats_remove_last_review() {
    let stats: ReviewStats = ReviewStats::default().with_added(5);
    assert_eq!(stats.count, 1);
    assert_eq!(stats.with_removed(5), ReviewStats::default());
}
