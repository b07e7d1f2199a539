//! Ticket gateway: a façade over a partner event catalogue and a core
//! payment service.
//!
//! The crate is laid out as a hexagon: [`domain`] holds the orchestration
//! logic and ports, [`outbound`] the reqwest adapters for the downstream
//! services, and [`inbound`] the actix-web handlers.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
