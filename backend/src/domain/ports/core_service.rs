//! Driven port for the core service: token/card validation and seat
//! reservation.

use async_trait::async_trait;

use super::DownstreamError;
use crate::domain::{EventId, ReservationResult, ValidationOutcome};

/// Port for the two core service calls the payment flow depends on.
///
/// Implementations perform exactly one downstream call per method and never
/// interpret non-2xx bodies; they surface them as [`DownstreamError::Status`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CoreService: Send + Sync {
    /// Ask whether `user_token` is currently bound to `card_id`.
    async fn validate(
        &self,
        user_token: &str,
        card_id: &str,
    ) -> Result<ValidationOutcome, DownstreamError>;

    /// Reserve `seat_id` on `event_id`, paying with `card_id`.
    async fn reserve(
        &self,
        event_id: EventId,
        seat_id: &str,
        card_id: &str,
    ) -> Result<ReservationResult, DownstreamError>;
}
