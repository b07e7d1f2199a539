//! Business rejections and their translation from downstream error bodies.
//!
//! The core service answers a refused validation or reservation with a non-2xx
//! status and a `{errorCode, message}` body. [`translate_rejection`] turns such
//! a body into a [`DomainError`]; anything that does not parse as that shape is
//! a decode failure, never a guessed rejection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ports::DownstreamError;

/// Code reported when the validator answers `false` for a token/card pair.
pub const TOKEN_REJECTED_CODE: i32 = 10051;

/// Message reported alongside [`TOKEN_REJECTED_CODE`].
pub const TOKEN_REJECTED_MESSAGE: &str =
    "A felhasználói token lejárt nem értelmezhető, vagy nem kapcsolódik a kártyához";

/// Validation errors emitted by [`DomainError::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainErrorValidationError {
    /// The rejection message was empty after trimming.
    #[error("rejection message must not be empty")]
    EmptyMessage,
}

/// Business rejection with a stable code and a human-readable message.
///
/// Serialises to the `{errorCode, message}` envelope callers receive.
///
/// # Examples
/// ```
/// use ticket_gateway::domain::DomainError;
///
/// let err = DomainError::try_new(20001, "seat already taken").expect("valid");
/// assert_eq!(err.error_code(), 20001);
/// assert_eq!(err.message(), "seat already taken");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainError {
    error_code: i32,
    message: String,
}

impl DomainError {
    /// Build a gateway-originated rejection, refusing blank messages.
    ///
    /// Rejections relayed from the core service go through
    /// [`translate_rejection`] instead and keep their message as sent.
    pub fn try_new(
        error_code: i32,
        message: impl Into<String>,
    ) -> Result<Self, DomainErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(DomainErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            error_code,
            message,
        })
    }

    /// The gateway's own rejection for an expired or unlinked user token.
    pub fn token_rejected() -> Self {
        Self {
            error_code: TOKEN_REJECTED_CODE,
            message: TOKEN_REJECTED_MESSAGE.to_owned(),
        }
    }

    /// Stable rejection code.
    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    /// Human-readable rejection message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.error_code)
    }
}

impl std::error::Error for DomainError {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RejectionPayload {
    error_code: i32,
    #[serde(alias = "errorMessage")]
    message: String,
}

/// Parse a non-2xx response body as a structured rejection.
///
/// # Errors
///
/// Returns [`DownstreamError::Decode`] when the body is not a JSON object with
/// an integer `errorCode` and a string `message`. The message is relayed as
/// sent, even when blank.
///
/// # Examples
/// ```
/// use ticket_gateway::domain::translate_rejection;
///
/// let err = translate_rejection(400, r#"{"errorCode":10099,"message":"X"}"#).expect("parses");
/// assert_eq!(err.error_code(), 10099);
/// assert!(translate_rejection(500, "<html>oops</html>").is_err());
/// ```
pub fn translate_rejection(status: u16, body: &str) -> Result<DomainError, DownstreamError> {
    let payload: RejectionPayload = serde_json::from_str(body).map_err(|err| {
        DownstreamError::decode(format!(
            "status {status} body is not a structured error payload: {err}"
        ))
    })?;
    Ok(DomainError {
        error_code: payload.error_code,
        message: payload.message,
    })
}

impl DownstreamError {
    /// Interpret a non-2xx answer as a business rejection.
    ///
    /// `Status` answers are translated with [`translate_rejection`]; every
    /// other variant is already a transport failure and is handed back as is.
    ///
    /// # Errors
    ///
    /// Returns the transport failure, or a decode failure when the status body
    /// does not parse.
    pub fn into_rejection(self) -> Result<DomainError, DownstreamError> {
        match self {
            Self::Status { status, body } => translate_rejection(status, body.as_str()),
            transport => Err(transport),
        }
    }
}
