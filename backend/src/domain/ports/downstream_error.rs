//! Failure type shared by every driven port that talks to a downstream service.

use thiserror::Error;

/// Errors surfaced by a downstream call.
///
/// `Status` carries the raw answer of a non-2xx response without any
/// interpretation; deciding whether that body is a structured business
/// rejection is the caller's job. Every other variant is a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownstreamError {
    /// The request did not produce a response (refused, reset, DNS).
    #[error("downstream connection failed: {message}")]
    Connection { message: String },
    /// The downstream call exceeded its timeout.
    #[error("downstream call timed out: {message}")]
    Timeout { message: String },
    /// A response body did not match the expected shape.
    #[error("downstream response decode failed: {message}")]
    Decode { message: String },
    /// The adapter could not build the outbound request.
    #[error("downstream request invalid: {message}")]
    InvalidRequest { message: String },
    /// The downstream service answered with a non-2xx status.
    #[error("downstream responded with status {status}")]
    Status { status: u16, body: String },
}

impl DownstreamError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// A non-2xx answer, body kept verbatim.
    pub fn status(status: impl Into<u16>, body: impl Into<String>) -> Self {
        Self::Status {
            status: status.into(),
            body: body.into(),
        }
    }

    /// True for failures that reflect infrastructure health rather than a
    /// downstream answer.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Status { .. })
    }
}
