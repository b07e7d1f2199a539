//! Reservation request and outcome types for the payment flow.

use std::fmt;

use thiserror::Error;

use super::EventId;

/// Validation errors raised when constructing a [`ReservationRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReservationRequestValidationError {
    /// Event identifiers start at one.
    #[error("event id must be a positive integer")]
    NonPositiveEventId,
    /// Seat identifier was empty after trimming.
    #[error("seat id must not be blank")]
    BlankSeatId,
    /// Card identifier was empty after trimming.
    #[error("card id must not be blank")]
    BlankCardId,
    /// User token was empty after trimming.
    #[error("user token must not be blank")]
    BlankUserToken,
}

/// Everything the payment flow needs to validate and reserve one seat.
///
/// ## Invariants
/// - `event_id` is positive.
/// - `seat_id`, `card_id` and `user_token` are non-blank. Seat and card ids
///   are opaque and forwarded byte-for-byte.
///
/// # Examples
/// ```
/// use ticket_gateway::domain::ReservationRequest;
///
/// let request = ReservationRequest::new(42, "A-12", "card-7", "token-abc").expect("valid");
/// assert_eq!(request.seat_id(), "A-12");
/// assert!(ReservationRequest::new(42, "A-12", " ", "token-abc").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    event_id: EventId,
    seat_id: String,
    card_id: String,
    user_token: String,
}

impl ReservationRequest {
    /// Validate and build a request.
    pub fn new(
        event_id: EventId,
        seat_id: impl Into<String>,
        card_id: impl Into<String>,
        user_token: impl Into<String>,
    ) -> Result<Self, ReservationRequestValidationError> {
        let (seat_id, card_id, user_token) = (seat_id.into(), card_id.into(), user_token.into());
        if event_id < 1 {
            return Err(ReservationRequestValidationError::NonPositiveEventId);
        }
        if seat_id.trim().is_empty() {
            return Err(ReservationRequestValidationError::BlankSeatId);
        }
        if card_id.trim().is_empty() {
            return Err(ReservationRequestValidationError::BlankCardId);
        }
        if user_token.trim().is_empty() {
            return Err(ReservationRequestValidationError::BlankUserToken);
        }
        Ok(Self {
            event_id,
            seat_id,
            card_id,
            user_token,
        })
    }

    /// Event the seat belongs to.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Opaque seat identifier.
    pub fn seat_id(&self) -> &str {
        self.seat_id.as_str()
    }

    /// Opaque card identifier used for both validation and payment.
    pub fn card_id(&self) -> &str {
        self.card_id.as_str()
    }

    /// Opaque user token forwarded to the validator.
    pub fn user_token(&self) -> &str {
        self.user_token.as_str()
    }
}

// The user token is a bearer credential; keep it out of logs.
impl fmt::Debug for ReservationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReservationRequest")
            .field("event_id", &self.event_id)
            .field("seat_id", &self.seat_id)
            .field("card_id", &self.card_id)
            .field("user_token", &"<redacted>")
            .finish()
    }
}

/// Answer from the core validator: is the token currently bound to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome(bool);

impl ValidationOutcome {
    /// True when the token-to-card binding is valid.
    pub fn is_valid(self) -> bool {
        self.0
    }
}

impl From<bool> for ValidationOutcome {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

/// Reservation identifier issued by the core service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservationResult(i64);

impl ReservationResult {
    /// Wrap an identifier exactly as the core service returned it.
    pub fn new(reservation_id: i64) -> Self {
        Self(reservation_id)
    }

    /// The reservation identifier.
    pub fn reservation_id(self) -> i64 {
        self.0
    }
}
