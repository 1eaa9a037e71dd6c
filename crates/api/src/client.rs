// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP client for the hotel booking API.
//!
//! One client serves every page: inventory and availability for the room
//! flow, reservations, reviews, the support chat and the guest auth
//! handshake. Calls are never retried, except a write refused for auth
//! reasons, which is retried once with a freshly provisioned guest token.

use crate::cache::TtlCache;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::guest_auth::{TokenCache, unix_now};
use crate::request_response::{
    AvailabilityRecord, ChatMessage, Conversation, GuestTokenResponse, HelpfulResponse,
    NewReviewRequest, ReservationConfirmation, ReservationRequest, ReviewsPage,
    SendMessageRequest, StartConversationRequest,
};
use auberge_domain::{Review, RoomType, RoomTypeAvailability, Service, StayRange};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Typed client for the remote collaborators.
#[derive(Debug)]
pub struct HotelApiClient {
    http: Client,
    config: ClientConfig,
    token: TokenCache,
    room_types: Mutex<TtlCache<String, Vec<RoomType>>>,
}

impl HotelApiClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfig` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http: Client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

        info!(
            base_url = %config.base_url,
            hotel_id = %config.hotel_id,
            timeout_secs = config.timeout.as_secs(),
            "Hotel API client ready"
        );

        Ok(Self {
            http,
            room_types: Mutex::new(TtlCache::new(config.inventory_ttl)),
            config,
            token: TokenCache::new(),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the room type catalogue, served from cache for the inventory
    /// TTL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn room_types(&self) -> Result<Vec<RoomType>, ApiError> {
        let key: String = self.config.hotel_id.clone();
        if let Some(cached) = self.room_types.lock().await.get(&key, Instant::now()) {
            debug!(hotel_id = %key, "Room types served from cache");
            return Ok(cached);
        }

        let url = self.config.hotel_endpoint("room-types")?;
        let room_types: Vec<RoomType> = self.send_json(self.http.get(url)).await?;

        let mut cache = self.room_types.lock().await;
        debug!(hotel_id = %key, ttl_secs = cache.ttl().as_secs(), "Room types cached");
        cache.insert(key, room_types.clone(), Instant::now());
        drop(cache);
        Ok(room_types)
    }

    /// Drops the cached room type catalogue.
    pub async fn invalidate_room_types(&self) {
        self.room_types.lock().await.clear();
    }

    /// Fetches availability for every room type over `stay`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, or `ApiError::Validation` if a
    /// record's counters are inconsistent.
    pub async fn availability(
        &self,
        stay: &StayRange,
    ) -> Result<Vec<RoomTypeAvailability>, ApiError> {
        let url = self.config.hotel_endpoint("availability")?;
        let request: RequestBuilder = self.http.get(url).query(&[
            ("check_in", stay.check_in().to_string()),
            ("check_out", stay.check_out().to_string()),
        ]);

        let records: Vec<AvailabilityRecord> = self.send_json(request).await?;
        records
            .into_iter()
            .map(|record| RoomTypeAvailability::try_from(record).map_err(ApiError::from))
            .collect()
    }

    /// Fetches the add-on service catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn services(&self) -> Result<Vec<Service>, ApiError> {
        let url = self.config.hotel_endpoint("services")?;
        self.send_json(self.http.get(url)).await
    }

    /// Creates a room reservation.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Application` with the server's message if the
    /// reservation is refused.
    pub async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationConfirmation, ApiError> {
        let url = self.config.hotel_endpoint("reservations")?;
        let confirmation: ReservationConfirmation =
            self.send_json(self.http.post(url).json(request)).await?;
        info!(
            reservation_number = %confirmation.reservation_number,
            room_type = %request.room_type,
            "Reservation created"
        );
        Ok(confirmation)
    }

    /// Fetches reviews and their statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn reviews(&self) -> Result<ReviewsPage, ApiError> {
        let url = self.config.hotel_endpoint("reviews")?;
        self.send_json(self.http.get(url)).await
    }

    /// Posts a review as the guest.
    ///
    /// # Errors
    ///
    /// Returns an error if the guest token cannot be provisioned or the
    /// review is refused.
    pub async fn post_review(&self, review: &NewReviewRequest) -> Result<Review, ApiError> {
        let url = self.config.hotel_endpoint("reviews")?;
        self.send_authorized(|token| self.http.post(url.clone()).bearer_auth(token).json(review))
            .await
    }

    /// Records a helpful vote on a review.
    ///
    /// # Errors
    ///
    /// Returns an error if the guest token cannot be provisioned or the vote
    /// is refused.
    pub async fn mark_helpful(&self, review_id: &str) -> Result<HelpfulResponse, ApiError> {
        let url = self
            .config
            .endpoint(&format!("reviews/{review_id}/helpful"))?;
        self.send_authorized(|token| self.http.post(url.clone()).bearer_auth(token))
            .await
    }

    /// Opens a support conversation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn start_conversation(&self, name: &str) -> Result<Conversation, ApiError> {
        let url = self.config.endpoint("chat/conversations")?;
        let body: StartConversationRequest = StartConversationRequest {
            name: name.to_string(),
        };
        self.send_json(self.http.post(url).json(&body)).await
    }

    /// Sends a chat message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        body: &str,
    ) -> Result<ChatMessage, ApiError> {
        let url = self
            .config
            .endpoint(&format!("chat/conversations/{conversation_id}/messages"))?;
        let message: SendMessageRequest = SendMessageRequest {
            body: body.to_string(),
        };
        self.send_json(self.http.post(url).json(&message)).await
    }

    /// Fetches messages newer than `after`, or all messages when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn messages_after(
        &self,
        conversation_id: &str,
        after: Option<u64>,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        let url = self
            .config
            .endpoint(&format!("chat/conversations/{conversation_id}/messages"))?;
        let mut request: RequestBuilder = self.http.get(url);
        if let Some(after) = after {
            request = request.query(&[("after", after)]);
        }
        self.send_json(request).await
    }

    /// Returns a valid guest token, provisioning one if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the auth handshake fails.
    pub async fn guest_token(&self) -> Result<String, ApiError> {
        self.token
            .get_or_provision(unix_now(), || self.provision_token())
            .await
    }

    async fn provision_token(&self) -> Result<String, ApiError> {
        let url = self.config.endpoint("auth/guest")?;
        let response: GuestTokenResponse = self.send_json(self.http.post(url)).await?;
        info!("Guest token provisioned");
        Ok(response.token)
    }

    async fn send_authorized<T, F>(&self, build: F) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
        F: Fn(&str) -> RequestBuilder + Sync,
    {
        let token: String = self.guest_token().await?;
        match self.send_json(build(&token)).await {
            Err(ApiError::Auth { status }) => {
                warn!(status, "Guest token refused, re-provisioning and retrying once");
                self.token.invalidate().await;
                let token: String = self.guest_token().await?;
                self.send_json(build(&token)).await
            }
            other => other,
        }
    }

    async fn send_json<T>(&self, request: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        let response: Response = request
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let url: String = response.url().path().to_string();
        // The client timeout also covers reading the body.
        let body = response.bytes().await.map_err(|e| {
            let classified: ApiError = ApiError::from_body_read(&e, self.config.timeout);
            warn!(%url, error = %e, kind = %classified.kind(), "Response body read failed");
            classified
        })?;

        if !status.is_success() {
            let err: ApiError =
                ApiError::from_status(status.as_u16(), &String::from_utf8_lossy(&body));
            warn!(%url, status = status.as_u16(), kind = %err.kind(), "Request refused");
            return Err(err);
        }

        debug!(%url, status = status.as_u16(), "Request succeeded");
        serde_json::from_slice::<T>(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn transport_error(&self, err: &reqwest::Error) -> ApiError {
        let classified: ApiError = ApiError::from_transport(err, self.config.timeout);
        warn!(error = %err, kind = %classified.kind(), "Request failed");
        classified
    }
}
