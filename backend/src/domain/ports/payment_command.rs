//! Driving port for the payment flow and its tagged failure type.

use async_trait::async_trait;
use thiserror::Error;

use super::DownstreamError;
use crate::domain::{DomainError, ReservationRequest, ReservationResult};

/// Why a payment did not produce a reservation.
///
/// Rejections carry a [`DomainError`]; `Transport` carries infrastructure
/// failures that must never be reported as business outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// The validator answered `false` for the token/card pair.
    #[error("user token is not bound to the card")]
    TokenRejected,
    /// The validate call was refused with a structured error body.
    #[error("validation rejected: {0}")]
    ValidationRejected(DomainError),
    /// The reserve call was refused with a structured error body.
    #[error("reservation rejected: {0}")]
    ReservationRejected(DomainError),
    /// A downstream call failed below the business layer.
    #[error(transparent)]
    Transport(DownstreamError),
}

impl PaymentError {
    /// The business rejection to report, or `None` for transport failures.
    ///
    /// # Examples
    /// ```
    /// use ticket_gateway::domain::ports::PaymentError;
    /// use ticket_gateway::domain::TOKEN_REJECTED_CODE;
    ///
    /// let rejection = PaymentError::TokenRejected.domain_error().expect("business error");
    /// assert_eq!(rejection.error_code(), TOKEN_REJECTED_CODE);
    /// ```
    pub fn domain_error(&self) -> Option<DomainError> {
        match self {
            Self::TokenRejected => Some(DomainError::token_rejected()),
            Self::ValidationRejected(error) | Self::ReservationRejected(error) => {
                Some(error.clone())
            }
            Self::Transport(_) => None,
        }
    }
}

/// Use-case that validates a user token against a card and reserves a seat.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentCommand: Send + Sync {
    /// Run the validate-then-reserve flow once.
    async fn pay(&self, request: &ReservationRequest) -> Result<ReservationResult, PaymentError>;
}
