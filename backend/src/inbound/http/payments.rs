//! Payment endpoint: validate the caller's token against a card, then reserve
//! a seat.
//!
//! ```text
//! POST /pay/{eventId}/{seatId}/{cardId}
//! User-Token: <opaque token>
//! ```

use actix_web::{HttpRequest, HttpResponse, post, web};
use serde::Deserialize;
use tokio::time::timeout;
use tracing::warn;

use crate::domain::{Error, ReservationRequest};
use crate::inbound::http::schemas::{DomainErrorSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    USER_TOKEN, map_reservation_validation_error, missing_field_error, parse_event_id,
};

/// Request header carrying the caller's opaque user token.
pub const USER_TOKEN_HEADER: &str = "User-Token";

/// Raw path segments; the event id is parsed by hand so failures carry
/// field details.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPath {
    event_id: String,
    seat_id: String,
    card_id: String,
}

fn user_token(req: &HttpRequest) -> Result<String, Error> {
    req.headers()
        .get(USER_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .ok_or_else(|| missing_field_error(USER_TOKEN))
}

/// Reserve a seat after validating the user token against the card.
#[utoipa::path(
    post,
    path = "/pay/{eventId}/{seatId}/{cardId}",
    description = "Validate the User-Token against the card with the core service, then reserve the seat. Every call re-validates; identical calls are not deduplicated.",
    params(
        ("eventId" = i64, Path, description = "Event identifier (positive integer)"),
        ("seatId" = String, Path, description = "Opaque seat identifier"),
        ("cardId" = String, Path, description = "Opaque card identifier used for payment"),
        ("User-Token" = String, Header, description = "Opaque user token forwarded to the validator")
    ),
    responses(
        (status = 200, description = "Reservation identifier", body = i64),
        (status = 400, description = "Rejected by the core service, or an invalid request", body = DomainErrorSchema),
        (status = 502, description = "Core service answered unexpectedly", body = ErrorSchema),
        (status = 503, description = "Core service unreachable", body = ErrorSchema),
        (status = 504, description = "Core service or payment deadline timed out", body = ErrorSchema)
    ),
    tags = ["payments"],
    operation_id = "pay",
    security(("UserToken" = []))
)]
#[post("/pay/{eventId}/{seatId}/{cardId}")]
pub async fn pay(
    state: web::Data<HttpState>,
    path: web::Path<PayPath>,
    req: HttpRequest,
) -> actix_web::Result<HttpResponse> {
    let PayPath {
        event_id,
        seat_id,
        card_id,
    } = path.into_inner();
    let event_id = parse_event_id(&event_id)?;
    let request = ReservationRequest::new(event_id, seat_id, card_id, user_token(&req)?)
        .map_err(map_reservation_validation_error)?;

    let payment = state.payments.pay(&request);
    let outcome = match state.payment_deadline {
        Some(deadline) => timeout(deadline, payment).await.map_err(|_| {
            warn!(event_id, ?deadline, "payment deadline exceeded");
            Error::gateway_timeout("payment deadline exceeded")
        })?,
        None => payment.await,
    };
    let result = outcome?;

    Ok(HttpResponse::Ok().json(result.reservation_id()))
}

#[cfg(test)]
#[path = "payments_tests.rs"]
mod tests;
