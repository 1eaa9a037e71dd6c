// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-process mock of the hotel backend.

use crate::guest_auth::{encode_test_token, is_token_valid, unix_now};
use crate::{ClientConfig, HotelApiClient};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header::AUTHORIZATION};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

/// Hotel whose inventory endpoint never answers in time.
pub const SLOW_HOTEL: &str = "slow";

/// Hotel whose availability counters do not add up.
pub const BROKEN_HOTEL: &str = "broken";

/// Conversation whose message endpoint always fails.
pub const FLAKY_CONVERSATION: &str = "flaky";

/// Review id whose helpful endpoint always refuses the token.
pub const LOCKED_REVIEW: &str = "locked";

#[derive(Debug, Default)]
pub struct MockBackend {
    pub room_type_hits: AtomicUsize,
    pub tokens_issued: AtomicUsize,
    pub review_posts: AtomicUsize,
    pub helpful_posts: AtomicUsize,
    pub chat_polls: AtomicUsize,
    pub reject_next_review: AtomicBool,
}

impl MockBackend {
    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

type Backend = State<Arc<MockBackend>>;

fn refuse(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn has_guest_token(headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| is_token_valid(token, unix_now()))
}

async fn room_types(State(backend): Backend, Path(hotel): Path<String>) -> Response {
    backend.room_type_hits.fetch_add(1, Ordering::SeqCst);
    if hotel == SLOW_HOTEL {
        tokio::time::sleep(Duration::from_secs(2)).await;
    }
    Json(json!([
        { "code": "STANDARD", "name": "Chambre Standard", "nightly_rate": 140.0, "capacity": 2 },
        { "code": "DELUXE", "name": "Chambre Deluxe", "nightly_rate": 200.0, "capacity": 3 },
    ]))
    .into_response()
}

async fn availability(
    Path(hotel): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !params.contains_key("check_in") || !params.contains_key("check_out") {
        return refuse(StatusCode::BAD_REQUEST, "check_in and check_out are required");
    }
    if hotel == BROKEN_HOTEL {
        return Json(json!([
            { "room_type": "DELUXE", "total": 10, "available": 3, "reserved": 5 },
        ]))
        .into_response();
    }
    Json(json!([
        { "room_type": "DELUXE", "total": 10, "available": 3, "reserved": 7, "percentage": 70.0 },
        { "room_type": "SUITE", "total": 4, "available": 0, "reserved": 4, "percentage": 100.0 },
    ]))
    .into_response()
}

async fn services() -> Response {
    Json(json!([
        { "id": "breakfast", "name": "Petit-déjeuner", "unit_price": 25.0 },
        { "id": "parking", "name": "Stationnement", "unit_price": 15.0 },
    ]))
    .into_response()
}

async fn reservations(Json(body): Json<Value>) -> Response {
    if body["guests"].as_u64().unwrap_or(0) > 6 {
        return refuse(
            StatusCode::CONFLICT,
            "Aucune chambre disponible pour ce nombre de personnes",
        );
    }
    Json(json!({
        "reservation_number": "R-1042",
        "room_number": "312",
        "total": body["quoted_total"],
    }))
    .into_response()
}

async fn reviews() -> Response {
    Json(json!({
        "reviews": [
            { "id": "1", "author": "Luc", "rating": 4, "comment": "Très bon accueil", "helpful_count": 2 },
        ],
        "stats": { "average": 4.0, "count": 1 },
    }))
    .into_response()
}

async fn post_review(
    State(backend): Backend,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    backend.review_posts.fetch_add(1, Ordering::SeqCst);
    if !has_guest_token(&headers) || backend.reject_next_review.swap(false, Ordering::SeqCst) {
        return refuse(StatusCode::UNAUTHORIZED, "Invalid token");
    }
    if body["comment"] == "spam" {
        return refuse(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Review rejected by moderation",
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "id": "42",
            "author": body["author"],
            "rating": body["rating"],
            "comment": body["comment"],
            "helpful_count": 0,
        })),
    )
        .into_response()
}

async fn helpful(State(backend): Backend, Path(id): Path<String>, headers: HeaderMap) -> Response {
    backend.helpful_posts.fetch_add(1, Ordering::SeqCst);
    if id == LOCKED_REVIEW || !has_guest_token(&headers) {
        return refuse(StatusCode::FORBIDDEN, "Forbidden");
    }
    Json(json!({ "helpful_count": 3 })).into_response()
}

async fn guest_auth(State(backend): Backend) -> Response {
    let issued: usize = backend.tokens_issued.fetch_add(1, Ordering::SeqCst) + 1;
    let token: String = encode_test_token(&format!("guest-{issued}"), "guest", unix_now() + 3600);
    Json(json!({ "token": token })).into_response()
}

async fn start_conversation() -> Response {
    (StatusCode::CREATED, Json(json!({ "id": "c-1" }))).into_response()
}

async fn send_message(Json(body): Json<Value>) -> Response {
    Json(json!({
        "id": 3,
        "author": "guest",
        "body": body["body"],
        "sent_at": "2025-03-10T10:02:00Z",
    }))
    .into_response()
}

async fn messages(
    State(backend): Backend,
    Path(conversation): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    backend.chat_polls.fetch_add(1, Ordering::SeqCst);
    if conversation == FLAKY_CONVERSATION {
        return refuse(StatusCode::INTERNAL_SERVER_ERROR, "Chat unavailable");
    }
    let after: u64 = params
        .get("after")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);
    let all: [Value; 2] = [
        json!({ "id": 1, "author": "staff", "body": "Bonjour!", "sent_at": "2025-03-10T10:00:00Z" }),
        json!({ "id": 2, "author": "staff", "body": "Comment puis-je aider?", "sent_at": "2025-03-10T10:00:05Z" }),
    ];
    let newer: Vec<Value> = all
        .into_iter()
        .filter(|m| m["id"].as_u64().unwrap_or(0) > after)
        .collect();
    Json(Value::Array(newer)).into_response()
}

/// Starts the mock backend on an ephemeral port.
pub async fn spawn_mock_backend() -> (SocketAddr, Arc<MockBackend>) {
    let backend: Arc<MockBackend> = Arc::new(MockBackend::default());
    let app: Router = Router::new()
        .route("/hotels/{hotel}/room-types", get(room_types))
        .route("/hotels/{hotel}/availability", get(availability))
        .route("/hotels/{hotel}/services", get(services))
        .route("/hotels/{hotel}/reservations", post(reservations))
        .route("/hotels/{hotel}/reviews", get(reviews).post(post_review))
        .route("/reviews/{id}/helpful", post(helpful))
        .route("/auth/guest", post(guest_auth))
        .route("/chat/conversations", post(start_conversation))
        .route(
            "/chat/conversations/{id}/messages",
            get(messages).post(send_message),
        )
        .with_state(Arc::clone(&backend));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve mock") });

    (addr, backend)
}

pub fn create_test_config(addr: SocketAddr, hotel_id: &str) -> ClientConfig {
    ClientConfig::new(&format!("http://{addr}"))
        .expect("valid config")
        .with_hotel_id(hotel_id)
        .with_timeout(Duration::from_millis(500))
}

pub fn create_test_client(addr: SocketAddr) -> HotelApiClient {
    HotelApiClient::new(create_test_config(addr, "1")).expect("client")
}
