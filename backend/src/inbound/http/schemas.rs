//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their structure and live in the inbound adapter layer
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable codes for non-business failures.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested event does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// A downstream service answered with an unexpected body.
    #[schema(rename = "bad_gateway")]
    BadGateway,
    /// A downstream service could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// A downstream call or the payment deadline timed out.
    #[schema(rename = "gateway_timeout")]
    GatewayTimeout,
    /// An unexpected error occurred in the gateway.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "service_unavailable")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "downstream service unavailable")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::DomainError`].
///
/// Business rejection relayed from the core service, or the gateway's own
/// token rejection.
#[derive(ToSchema)]
#[schema(as = crate::domain::DomainError, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DomainErrorSchema {
    /// Stable rejection code.
    #[schema(example = 10051)]
    error_code: i32,
    /// Human-readable rejection message.
    #[schema(example = "seat already reserved")]
    message: String,
}

/// OpenAPI schema for [`crate::domain::EventSummary`].
///
/// Lists the display fields partners usually publish. Any further partner
/// field is passed through unchanged and is not enumerated here.
#[derive(ToSchema)]
#[schema(as = crate::domain::EventSummary, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EventSummarySchema {
    /// Partner event identifier.
    #[schema(example = 1)]
    event_id: i64,
    #[schema(example = "Quiet Riot")]
    name: Option<String>,
    /// Display date in the partner's own format.
    #[schema(example = "2026-11-02T19:30:00")]
    date: Option<String>,
    #[schema(example = "Budapest Park")]
    venue: Option<String>,
}

/// OpenAPI schema for [`crate::domain::EventDetail`].
#[derive(ToSchema)]
#[schema(as = crate::domain::EventDetail, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EventDetailSchema {
    #[schema(example = 1)]
    event_id: i64,
    name: Option<String>,
    date: Option<String>,
    venue: Option<String>,
    /// Seat and price entries exactly as the partner published them.
    seats: Vec<serde_json::Value>,
}
