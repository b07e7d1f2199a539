//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the façade. It registers:
//!
//! - **Paths**: the event, payment and health endpoints
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`DomainErrorSchema`], [`EventSummarySchema`], [`EventDetailSchema`])
//!   that keep utoipa out of the domain
//! - **Security**: the `User-Token` header forwarded to the core validator
//!
//! The generated document is served by Swagger UI in debug builds.

use crate::inbound::http::schemas::{
    DomainErrorSchema, ErrorCodeSchema, ErrorSchema, EventDetailSchema, EventSummarySchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the user token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "UserToken",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "User-Token",
                "Opaque user token; validated by the core service, never by the gateway.",
            ))),
        );
    }
}

/// OpenAPI document for the façade.
/// Swagger UI is enabled in debug builds only.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Ticket gateway API",
        description = "Façade over the partner event catalogue and the core payment services."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::events::get_events,
        crate::inbound::http::events::get_event,
        crate::inbound::http::payments::pay,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EventSummarySchema,
        EventDetailSchema,
        DomainErrorSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "events", description = "Event catalogue passthrough to the partner service"),
        (name = "payments", description = "Token validation and seat reservation"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
