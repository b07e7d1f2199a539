//! Catalogue reads proxied through the façade to a stub partner service.

mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::{Value, json};

use support::{StubResponse, StubService, unreachable_base_url};
use ticket_gateway::domain::{CatalogueService, PaymentService};
use ticket_gateway::inbound::http::events::{get_event, get_events};
use ticket_gateway::inbound::http::state::HttpState;
use ticket_gateway::outbound::core_service::HttpCoreService;
use ticket_gateway::outbound::partner::HttpPartnerCatalogue;

const CATALOGUE: &str = r#"{
    "eventId": 1,
    "name": "Quiet Riot",
    "date": "2026-11-02T19:30:00",
    "venue": "Budapest Park",
    "ageLimit": 18,
    "seats": [
        { "seatId": "S1", "price": 90.5, "currency": "HUF", "reserved": false },
        { "seatId": 2, "price": 12000, "currency": "HUF", "reserved": true, "row": "A" }
    ]
}"#;

async fn get(partner: &StubService, uri: &str) -> (StatusCode, Value) {
    let catalogue =
        HttpPartnerCatalogue::new(partner.base_url(), None).expect("partner client builds");
    let core = HttpCoreService::new(unreachable_base_url(), None).expect("core client builds");
    let state = HttpState::new(
        Arc::new(PaymentService::new(Arc::new(core))),
        Arc::new(CatalogueService::new(Arc::new(catalogue))),
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(get_events)
            .service(get_event),
    )
    .await;
    let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let status = res.status();
    (status, test::read_body_json(res).await)
}

#[actix_web::test]
async fn catalogue_is_a_field_for_field_passthrough() {
    let partner = StubService::start("/").await;
    partner.respond("/getEvents", [StubResponse::json(200, CATALOGUE)]);

    let (status, body) = get(&partner, "/getEvents").await;

    assert_eq!(status, StatusCode::OK);
    let expected: Value = serde_json::from_str(CATALOGUE).expect("fixture JSON");
    assert_eq!(body, expected);
    assert_eq!(partner.calls_to("/getEvents").len(), 1);
    partner.stop().await;
}

#[actix_web::test]
async fn catalogue_arrays_are_not_the_partner_contract() {
    let partner = StubService::start("/").await;
    partner.respond(
        "/getEvents",
        [StubResponse::json(200, format!("[{CATALOGUE}]"))],
    );

    let (status, _) = get(&partner, "/getEvents").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    partner.stop().await;
}

#[actix_web::test]
async fn single_event_keeps_every_partner_field() {
    let partner = StubService::start("/").await;
    partner.respond(
        "/getEvent/1",
        [StubResponse::json(
            200,
            r#"{"eventId":1,"name":"Quiet Riot","date":"2026-11-02T19:30:00","venue":"Budapest Park","city":"Budapest"}"#,
        )],
    );

    let (status, body) = get(&partner, "/getEvent/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "eventId": 1,
            "name": "Quiet Riot",
            "date": "2026-11-02T19:30:00",
            "venue": "Budapest Park",
            "city": "Budapest"
        })
    );
    assert_eq!(partner.calls_to("/getEvent/1").len(), 1);
    partner.stop().await;
}

#[rstest]
#[case::unknown_event(StubResponse::json(404, ""), StatusCode::NOT_FOUND)]
#[case::partner_error(StubResponse::json(500, r#"{"errorCode":1,"message":"no"}"#), StatusCode::BAD_GATEWAY)]
#[case::wrong_shape(StubResponse::json(200, r#"{"name":"no identifier"}"#), StatusCode::BAD_GATEWAY)]
#[actix_web::test]
async fn partner_failures_are_remote_failures(
    #[case] answer: StubResponse,
    #[case] expected: StatusCode,
) {
    let partner = StubService::start("/").await;
    partner.respond("/getEvent/", [answer]);

    let (status, body) = get(&partner, "/getEvent/7").await;

    assert_eq!(status, expected);
    assert!(body.get("errorCode").is_none(), "partner errors are never rejections");
    partner.stop().await;
}
