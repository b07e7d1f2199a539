//! Payment orchestration: validate the user token against the card, then
//! reserve the seat.
//!
//! The flow is strictly sequential and returns early on the first failure.
//! A rejection from the validator guarantees the reserve call was never
//! issued. Nothing is cached or deduplicated between invocations.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{CoreService, DownstreamError, PaymentCommand, PaymentError};
use crate::domain::{DomainError, ReservationRequest, ReservationResult};

/// Payment service implementing the [`PaymentCommand`] driving port.
#[derive(Clone)]
pub struct PaymentService<C> {
    core: Arc<C>,
}

impl<C> PaymentService<C> {
    /// Create a service backed by the given core service port.
    pub fn new(core: Arc<C>) -> Self {
        Self { core }
    }
}

/// Split a downstream failure into a business rejection or a transport
/// failure. Only a parseable `{errorCode, message}` body becomes a rejection.
fn classify(error: DownstreamError, rejected: fn(DomainError) -> PaymentError) -> PaymentError {
    match error.into_rejection() {
        Ok(rejection) => {
            warn!(
                error_code = rejection.error_code(),
                message = rejection.message(),
                "core service rejected the request"
            );
            rejected(rejection)
        }
        Err(transport) => {
            warn!(error = %transport, "core service call failed");
            PaymentError::Transport(transport)
        }
    }
}

#[async_trait]
impl<C> PaymentCommand for PaymentService<C>
where
    C: CoreService,
{
    async fn pay(&self, request: &ReservationRequest) -> Result<ReservationResult, PaymentError> {
        info!(
            event_id = request.event_id(),
            card_id = request.card_id(),
            "sending user token and card validation request to core service"
        );
        let outcome = self
            .core
            .validate(request.user_token(), request.card_id())
            .await
            .map_err(|err| classify(err, PaymentError::ValidationRejected))?;

        if !outcome.is_valid() {
            warn!(card_id = request.card_id(), "user token is not bound to the card");
            return Err(PaymentError::TokenRejected);
        }
        info!(card_id = request.card_id(), "user token with card successfully validated");

        info!(
            event_id = request.event_id(),
            seat_id = request.seat_id(),
            "sending seat reservation request to core service"
        );
        let result = self
            .core
            .reserve(request.event_id(), request.seat_id(), request.card_id())
            .await
            .map_err(|err| classify(err, PaymentError::ReservationRejected))?;

        info!(
            reservation_id = result.reservation_id(),
            "seat successfully reserved"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "payment_service_tests.rs"]
mod tests;
