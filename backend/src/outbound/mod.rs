//! Outbound adapters implementing domain ports for the downstream services.
//!
//! - **downstream**: shared reqwest client, path expansion and error mapping
//! - **core_service**: `CoreService` over HTTP (token validation, seat reservation)
//! - **partner**: `PartnerCatalogue` over HTTP (event listing and lookup)
//!
//! Adapters are thin translators between domain types and wire formats. They
//! contain no business logic and never interpret error bodies.

pub mod core_service;
pub mod downstream;
pub mod partner;
