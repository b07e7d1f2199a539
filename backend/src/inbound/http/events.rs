//! Catalogue read endpoints proxied to the partner service.
//!
//! ```text
//! GET /getEvents
//! GET /getEvent/{eventId}
//! ```

use actix_web::{get, web};
use serde::Serialize;
use serde_json::Value;

use crate::domain::{EventAttributes, EventDetail, EventSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::catalogue_failure;
use crate::inbound::http::schemas::{ErrorSchema, EventDetailSchema, EventSummarySchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_event_id;

/// Simple event form: the identifier plus every partner field, unchanged.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryResponse {
    pub event_id: i64,
    #[serde(flatten)]
    pub attributes: EventAttributes,
}

impl From<EventSummary> for EventSummaryResponse {
    fn from(summary: EventSummary) -> Self {
        Self {
            event_id: summary.event_id,
            attributes: summary.attributes,
        }
    }
}

/// Extended event form with the partner's seat entries.
#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    #[serde(flatten)]
    pub summary: EventSummaryResponse,
    pub seats: Vec<Value>,
}

impl From<EventDetail> for EventDetailResponse {
    fn from(detail: EventDetail) -> Self {
        Self {
            summary: detail.summary.into(),
            seats: detail.seats,
        }
    }
}

/// Read the extended catalogue, as published by the partner service.
#[utoipa::path(
    get,
    path = "/getEvents",
    responses(
        (status = 200, description = "Extended event catalogue; unknown partner fields are passed through", body = EventDetailSchema),
        (status = 502, description = "Partner service answered unexpectedly", body = ErrorSchema),
        (status = 503, description = "Partner service unreachable", body = ErrorSchema),
        (status = 504, description = "Partner service timed out", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "getEvents",
    security([])
)]
#[get("/getEvents")]
pub async fn get_events(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<EventDetailResponse>> {
    let events = state
        .catalogue
        .events()
        .await
        .map_err(|err| catalogue_failure(&err))?;
    Ok(web::Json(events.into()))
}

/// Look up one event in its simple form.
#[utoipa::path(
    get,
    path = "/getEvent/{eventId}",
    params(("eventId" = i64, Path, description = "Event identifier (positive integer)")),
    responses(
        (status = 200, description = "Event; unknown partner fields are passed through", body = EventSummarySchema),
        (status = 400, description = "Invalid event identifier", body = ErrorSchema),
        (status = 404, description = "Unknown event", body = ErrorSchema),
        (status = 502, description = "Partner service answered unexpectedly", body = ErrorSchema),
        (status = 503, description = "Partner service unreachable", body = ErrorSchema),
        (status = 504, description = "Partner service timed out", body = ErrorSchema)
    ),
    tags = ["events"],
    operation_id = "getEventById",
    security([])
)]
#[get("/getEvent/{eventId}")]
pub async fn get_event(
    state: web::Data<HttpState>,
    event_id: web::Path<String>,
) -> ApiResult<web::Json<EventSummaryResponse>> {
    let event_id = parse_event_id(&event_id)?;
    let event = state
        .catalogue
        .event(event_id)
        .await
        .map_err(|err| catalogue_failure(&err))?;
    Ok(web::Json(event.into()))
}

#[cfg(test)]
mod tests {
    //! Handler coverage with a mocked catalogue port.

    use super::*;
    use crate::domain::EventId;
    use crate::domain::ports::{DownstreamError, MockCatalogueQuery, MockPaymentCommand};
    use crate::inbound::http::test_utils::mock_state;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};

    fn attributes(value: Value) -> EventAttributes {
        value.as_object().cloned().expect("object literal")
    }

    #[fixture]
    fn summary() -> EventSummary {
        EventSummary {
            event_id: 1,
            attributes: attributes(json!({
                "name": "Quiet Riot",
                "date": "2026-11-02T19:30:00",
                "venue": "Budapest Park",
                "city": "Budapest"
            })),
        }
    }

    async fn get(catalogue: MockCatalogueQuery, uri: &str) -> (StatusCode, Value) {
        let state = mock_state(MockPaymentCommand::new(), catalogue);
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_events)
                .service(get_event),
        )
        .await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        let status = res.status();
        (status, actix_test::read_body_json(res).await)
    }

    #[rstest]
    #[actix_web::test]
    async fn renders_the_catalogue_field_for_field(summary: EventSummary) {
        let detail = EventDetail {
            summary,
            seats: vec![json!({ "seatId": "S1", "price": 90.5, "currency": "HUF" })],
        };
        let mut catalogue = MockCatalogueQuery::new();
        catalogue
            .expect_events()
            .times(1)
            .return_once(move || Ok(detail));

        let (status, body) = get(catalogue, "/getEvents").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "eventId": 1,
                "name": "Quiet Riot",
                "date": "2026-11-02T19:30:00",
                "venue": "Budapest Park",
                "city": "Budapest",
                "seats": [{ "seatId": "S1", "price": 90.5, "currency": "HUF" }]
            })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn returns_one_event_with_every_field(summary: EventSummary) {
        let mut catalogue = MockCatalogueQuery::new();
        catalogue
            .expect_event()
            .withf(|event_id: &EventId| *event_id == 1)
            .times(1)
            .return_once(move |_| Ok(summary));

        let (status, body) = get(catalogue, "/getEvent/1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["eventId"], json!(1));
        assert_eq!(body["venue"], json!("Budapest Park"));
        assert_eq!(body["city"], json!("Budapest"));
    }

    #[rstest]
    #[case::unknown(DownstreamError::status(404_u16, ""), StatusCode::NOT_FOUND)]
    #[case::partner_error(DownstreamError::status(500_u16, "boom"), StatusCode::BAD_GATEWAY)]
    #[case::unreachable(DownstreamError::connection("refused"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case::slow(DownstreamError::timeout("slow"), StatusCode::GATEWAY_TIMEOUT)]
    #[actix_web::test]
    async fn partner_failures_map_to_statuses(
        #[case] failure: DownstreamError,
        #[case] expected: StatusCode,
    ) {
        let mut catalogue = MockCatalogueQuery::new();
        catalogue
            .expect_event()
            .times(1)
            .return_once(move |_| Err(failure));

        let (status, _) = get(catalogue, "/getEvent/5").await;

        assert_eq!(status, expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn rejects_non_numeric_event_ids() {
        let mut catalogue = MockCatalogueQuery::new();
        catalogue.expect_event().times(0);

        let (status, body) = get(catalogue, "/getEvent/abc").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("invalid_request"));
    }
}
