// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CardDetails, DomainError, GuestDetails, MAX_PARTY_SIZE, validate_card_details,
    validate_guest_details, validate_review, validate_stay_dates, validate_table_request,
};

fn create_test_guest() -> GuestDetails {
    GuestDetails::new("Marie Tremblay", "marie@example.com", "+1 514 555 0199")
}

fn create_test_card() -> CardDetails {
    CardDetails::new("4242 4242 4242 4242", "Marie Tremblay", "09/27", "123")
}

#[test]
fn test_validate_stay_dates_accepts_forward_range() {
    let stay = validate_stay_dates("2025-03-10", "2025-03-13").unwrap();
    assert_eq!(stay.nights(), 3);
}

#[test]
fn test_validate_stay_dates_rejects_missing_check_out() {
    let result = validate_stay_dates("2025-03-10", "");
    assert_eq!(result, Err(DomainError::MissingField("check_out")));
}

#[test]
fn test_validate_stay_dates_rejects_same_day() {
    let result = validate_stay_dates("2025-03-10", "2025-03-10");
    assert!(matches!(result, Err(DomainError::InvalidStayRange { .. })));
}

#[test]
fn test_validate_stay_dates_rejects_garbage() {
    let result = validate_stay_dates("10/03/2025", "2025-03-13");
    assert!(matches!(result, Err(DomainError::DateParseError { .. })));
}

#[test]
fn test_validate_guest_details_accepts_valid_guest() {
    assert!(validate_guest_details(&create_test_guest()).is_ok());
}

#[test]
fn test_validate_guest_details_rejects_empty_name() {
    let mut guest: GuestDetails = create_test_guest();
    guest.name = String::from("   ");

    let result: Result<(), DomainError> = validate_guest_details(&guest);
    assert_eq!(result, Err(DomainError::MissingField("name")));
}

#[test]
fn test_validate_guest_details_rejects_malformed_email() {
    for email in ["marie", "marie@", "marie@example", "ma rie@example.com", "@example.com"] {
        let mut guest: GuestDetails = create_test_guest();
        guest.email = String::from(email);

        let result: Result<(), DomainError> = validate_guest_details(&guest);
        assert!(
            matches!(result, Err(DomainError::InvalidField { field: "email", .. })),
            "expected {email} to be rejected"
        );
    }
}

#[test]
fn test_validate_guest_details_rejects_empty_phone() {
    let mut guest: GuestDetails = create_test_guest();
    guest.phone = String::new();

    let result: Result<(), DomainError> = validate_guest_details(&guest);
    assert_eq!(result, Err(DomainError::MissingField("phone")));
}

#[test]
fn test_validate_card_details_accepts_valid_card() {
    assert!(validate_card_details(&create_test_card()).is_ok());

    let mut compact: CardDetails = create_test_card();
    compact.number = String::from("4242424242424242");
    assert!(validate_card_details(&compact).is_ok());
}

#[test]
fn test_validate_card_details_rejects_short_number() {
    let mut card: CardDetails = create_test_card();
    card.number = String::from("4242 4242 4242 424");

    let result: Result<(), DomainError> = validate_card_details(&card);
    assert!(matches!(
        result,
        Err(DomainError::InvalidField {
            field: "card_number",
            ..
        })
    ));
}

#[test]
fn test_validate_card_details_rejects_letters_in_number() {
    let mut card: CardDetails = create_test_card();
    card.number = String::from("4242 4242 4242 42AB");

    assert!(validate_card_details(&card).is_err());
}

#[test]
fn test_validate_card_details_rejects_empty_holder() {
    let mut card: CardDetails = create_test_card();
    card.holder = String::new();

    let result: Result<(), DomainError> = validate_card_details(&card);
    assert_eq!(result, Err(DomainError::MissingField("card_holder")));
}

#[test]
fn test_validate_card_details_rejects_bad_expiry() {
    for expiry in ["9/27", "13/27", "00/27", "09-27", "09/2027", "ab/cd", "09/2x"] {
        let mut card: CardDetails = create_test_card();
        card.expiry = String::from(expiry);

        let result: Result<(), DomainError> = validate_card_details(&card);
        assert!(
            matches!(result, Err(DomainError::InvalidField { field: "expiry", .. })),
            "expected {expiry} to be rejected"
        );
    }
}

#[test]
fn test_validate_card_details_rejects_bad_cvc() {
    for cvc in ["12", "1234", "12a", ""] {
        let mut card: CardDetails = create_test_card();
        card.cvc = String::from(cvc);

        let result: Result<(), DomainError> = validate_card_details(&card);
        assert!(
            matches!(result, Err(DomainError::InvalidField { field: "cvc", .. })),
            "expected {cvc:?} to be rejected"
        );
    }
}

#[test]
fn test_validate_table_request_accepts_valid_request() {
    assert!(validate_table_request("2025-03-10", "19:30", 4).is_ok());
    assert!(validate_table_request("2025-03-10", "00:00", 1).is_ok());
    assert!(validate_table_request("2025-03-10", "23:59", MAX_PARTY_SIZE).is_ok());
}

#[test]
fn test_validate_table_request_rejects_bad_time() {
    for time in ["7:30", "24:00", "19h30", "19:60"] {
        let result = validate_table_request("2025-03-10", time, 2);
        assert!(
            matches!(result, Err(DomainError::InvalidField { field: "time", .. })),
            "expected {time} to be rejected"
        );
    }
}

#[test]
fn test_validate_table_request_rejects_party_size() {
    let result = validate_table_request("2025-03-10", "19:30", 0);
    assert!(matches!(result, Err(DomainError::InvalidPartySize { .. })));

    let result = validate_table_request("2025-03-10", "19:30", MAX_PARTY_SIZE + 1);
    assert!(matches!(result, Err(DomainError::InvalidPartySize { .. })));
}

#[test]
fn test_validate_table_request_rejects_missing_date() {
    let result = validate_table_request("", "19:30", 2);
    assert_eq!(result, Err(DomainError::MissingField("date")));
}

#[test]
fn test_validate_review() {
    assert!(validate_review(5, "Superbe séjour").is_ok());
    assert!(validate_review(1, "Bruyant").is_ok());
    assert!(matches!(
        validate_review(0, "text"),
        Err(DomainError::InvalidField { field: "rating", .. })
    ));
    assert!(validate_review(6, "text").is_err());
    assert_eq!(
        validate_review(4, "  "),
        Err(DomainError::MissingField("comment"))
    );
}
