//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep domain failures HTTP-agnostic while letting Actix handlers
//! turn them into consistent responses. Business rejections render as
//! `400 {errorCode, message}`; everything else uses the [`Error`] envelope.

use actix_web::http::header::HeaderValue;
use actix_web::{HttpResponse, HttpResponseBuilder, ResponseError, http::StatusCode};

use crate::domain::ports::{DownstreamError, PaymentError};
use crate::domain::{DomainError, Error, ErrorCode, TRACE_ID_HEADER, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::BadGateway => StatusCode::BAD_GATEWAY,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::GatewayTimeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

fn with_trace_header(builder: &mut HttpResponseBuilder, trace_id: Option<String>) {
    if let Some(value) = trace_id.and_then(|id| HeaderValue::from_str(&id).ok()) {
        builder.insert_header((TRACE_ID_HEADER, value));
    }
}

/// Map a transport failure from any downstream call onto the envelope.
///
/// The underlying detail never reaches the caller; the domain services log it.
pub(crate) fn downstream_failure(error: &DownstreamError) -> Error {
    match error {
        DownstreamError::Connection { .. } => {
            Error::service_unavailable("downstream service unavailable")
        }
        DownstreamError::Timeout { .. } => Error::gateway_timeout("downstream service timed out"),
        DownstreamError::Decode { .. } | DownstreamError::Status { .. } => {
            Error::bad_gateway("downstream service returned an unexpected response")
        }
        DownstreamError::InvalidRequest { .. } => Error::internal(error.to_string()),
    }
}

/// Map a partner catalogue failure; a partner 404 means the event is unknown.
pub(crate) fn catalogue_failure(error: &DownstreamError) -> Error {
    match error {
        DownstreamError::Status { status: 404, .. } => Error::not_found("event not found"),
        other => downstream_failure(other),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        with_trace_header(&mut builder, self.trace_id().map(str::to_owned));
        builder.json(redact_if_internal(self))
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        with_trace_header(&mut builder, TraceId::current().map(|id| id.to_string()));
        builder.json(self)
    }
}

/// Rejections render as the business envelope; transport failures do not.
impl ResponseError for PaymentError {
    fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::Transport(error) => downstream_failure(error).status_code(),
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match (self, self.domain_error()) {
            (PaymentError::Transport(error), _) => downstream_failure(error).error_response(),
            (_, Some(rejection)) => rejection.error_response(),
            (_, None) => Error::internal("payment failure without a cause").error_response(),
        }
    }
}
