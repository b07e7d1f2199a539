//! Shared validation helpers for inbound HTTP adapters.
//!
//! Failures become `invalid_request` errors whose details name the offending
//! field and a machine-readable code.

use serde_json::json;

use crate::domain::{Error, EventId, ReservationRequestValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    BlankValue,
    InvalidEventId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::BlankValue => "blank_value",
            ErrorCode::InvalidEventId => "invalid_event_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

pub(crate) const EVENT_ID: FieldName = FieldName::new("eventId");
pub(crate) const SEAT_ID: FieldName = FieldName::new("seatId");
pub(crate) const CARD_ID: FieldName = FieldName::new("cardId");
pub(crate) const USER_TOKEN: FieldName = FieldName::new("User-Token");

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn blank_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ErrorCode::BlankValue,
        format!("{name} must not be blank"),
    )
}

pub(crate) fn invalid_event_id_error(value: &str) -> Error {
    Error::invalid_request("eventId must be a positive integer").with_details(json!({
        "field": EVENT_ID.as_str(),
        "value": value,
        "code": ErrorCode::InvalidEventId.as_str(),
    }))
}

/// Parse a path segment as a positive event identifier.
pub(crate) fn parse_event_id(value: &str) -> Result<EventId, Error> {
    match value.parse::<EventId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(invalid_event_id_error(value)),
    }
}

/// Map domain construction failures onto field-level request errors.
pub(crate) fn map_reservation_validation_error(error: ReservationRequestValidationError) -> Error {
    match error {
        ReservationRequestValidationError::NonPositiveEventId => invalid_event_id_error(""),
        ReservationRequestValidationError::BlankSeatId => blank_field_error(SEAT_ID),
        ReservationRequestValidationError::BlankCardId => blank_field_error(CARD_ID),
        ReservationRequestValidationError::BlankUserToken => blank_field_error(USER_TOKEN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as ApiErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("9223372036854775807", i64::MAX)]
    fn parses_positive_event_ids(#[case] raw: &str, #[case] expected: EventId) {
        assert_eq!(parse_event_id(raw).expect("valid id"), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-3")]
    #[case("abc")]
    #[case("1.5")]
    #[case("")]
    fn rejects_other_event_ids(#[case] raw: &str) {
        let error = parse_event_id(raw).expect_err("invalid id");
        assert_eq!(error.code(), ApiErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({"field": "eventId", "value": raw, "code": "invalid_event_id"}))
        );
    }

    #[rstest]
    #[case(ReservationRequestValidationError::BlankSeatId, "seatId")]
    #[case(ReservationRequestValidationError::BlankCardId, "cardId")]
    #[case(ReservationRequestValidationError::BlankUserToken, "User-Token")]
    fn names_the_blank_field(
        #[case] error: ReservationRequestValidationError,
        #[case] field: &str,
    ) {
        let mapped = map_reservation_validation_error(error);
        assert_eq!(
            mapped.details(),
            Some(&json!({"field": field, "code": "blank_value"}))
        );
    }
}
