// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{LOCKED_REVIEW, MockBackend, create_test_client, spawn_mock_backend};
use crate::{
    ApiError, HelpfulResponse, HotelApiClient, NewReviewRequest, is_token_valid, unix_now,
};
use auberge_domain::{ErrorKind, Review};
use std::sync::atomic::Ordering;

fn create_test_review_request() -> NewReviewRequest {
    NewReviewRequest::new("Marie", 5, "Séjour parfait").unwrap()
}

#[tokio::test]
async fn test_guest_token_is_reused() {
    let (addr, backend) = spawn_mock_backend().await;
    let client: HotelApiClient = create_test_client(addr);

    let first: String = client.guest_token().await.unwrap();
    let second: String = client.guest_token().await.unwrap();

    assert_eq!(first, second);
    assert!(is_token_valid(&first, unix_now()));
    assert_eq!(MockBackend::count(&backend.tokens_issued), 1);
}

#[tokio::test]
async fn test_review_posted_with_token() {
    let (addr, backend) = spawn_mock_backend().await;
    let client: HotelApiClient = create_test_client(addr);

    let review: Review = client
        .post_review(&create_test_review_request())
        .await
        .unwrap();
    client
        .post_review(&create_test_review_request())
        .await
        .unwrap();

    assert_eq!(review.id, "42");
    assert_eq!(review.rating, 5);
    assert_eq!(MockBackend::count(&backend.tokens_issued), 1);
    assert_eq!(MockBackend::count(&backend.review_posts), 2);
}

#[tokio::test]
async fn test_refused_token_is_replaced_and_retried_once() {
    let (addr, backend) = spawn_mock_backend().await;
    let client: HotelApiClient = create_test_client(addr);
    backend.reject_next_review.store(true, Ordering::SeqCst);

    let review: Review = client
        .post_review(&create_test_review_request())
        .await
        .unwrap();

    assert_eq!(review.id, "42");
    assert_eq!(MockBackend::count(&backend.review_posts), 2);
    assert_eq!(MockBackend::count(&backend.tokens_issued), 2);
}

#[tokio::test]
async fn test_second_refusal_is_surfaced() {
    let (addr, backend) = spawn_mock_backend().await;
    let client: HotelApiClient = create_test_client(addr);

    let err: ApiError = client.mark_helpful(LOCKED_REVIEW).await.unwrap_err();

    assert_eq!(err, ApiError::Auth { status: 403 });
    assert_eq!(err.kind(), ErrorKind::Auth);
    assert_eq!(MockBackend::count(&backend.helpful_posts), 2);
    assert_eq!(MockBackend::count(&backend.tokens_issued), 2);
}

#[tokio::test]
async fn test_helpful_vote() {
    let (addr, _backend) = spawn_mock_backend().await;
    let client: HotelApiClient = create_test_client(addr);

    let response: HelpfulResponse = client.mark_helpful("1").await.unwrap();

    assert_eq!(response.helpful_count, 3);
}

#[test]
fn test_review_request_is_validated() {
    assert!(matches!(
        NewReviewRequest::new("Marie", 0, "Bien"),
        Err(ApiError::Validation(_))
    ));
    assert!(matches!(
        NewReviewRequest::new("Marie", 4, "  "),
        Err(ApiError::Validation(_))
    ));
}
