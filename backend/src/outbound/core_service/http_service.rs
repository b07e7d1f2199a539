//! Reqwest-backed core service adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, Url};

use crate::domain::ports::{CoreService, DownstreamError};
use crate::domain::{EventId, ReservationResult, ValidationOutcome};
use crate::outbound::downstream::DownstreamClient;

const VALIDATE_PATH: &str = "validate/{userToken}/{cardId}";
const RESERVE_PATH: &str = "reserve/{eventId}/{seatId}/{cardId}";

/// Core service adapter issuing one HTTP call per port method.
#[derive(Debug, Clone)]
pub struct HttpCoreService {
    client: DownstreamClient,
}

impl HttpCoreService {
    /// Build an adapter rooted at the core service's base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: DownstreamClient::new("core", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl CoreService for HttpCoreService {
    async fn validate(
        &self,
        user_token: &str,
        card_id: &str,
    ) -> Result<ValidationOutcome, DownstreamError> {
        self.client
            .call::<bool>(
                Method::GET,
                VALIDATE_PATH,
                &[("userToken", user_token), ("cardId", card_id)],
            )
            .await
            .map(ValidationOutcome::from)
    }

    async fn reserve(
        &self,
        event_id: EventId,
        seat_id: &str,
        card_id: &str,
    ) -> Result<ReservationResult, DownstreamError> {
        let event_id = event_id.to_string();
        self.client
            .call::<i64>(
                Method::POST,
                RESERVE_PATH,
                &[
                    ("eventId", event_id.as_str()),
                    ("seatId", seat_id),
                    ("cardId", card_id),
                ],
            )
            .await
            .map(ReservationResult::new)
    }
}
