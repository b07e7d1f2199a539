//! Partner service outbound adapter.
//!
//! This module provides a thin HTTP implementation of the `PartnerCatalogue`
//! port.

mod dto;
mod http_catalogue;

pub use http_catalogue::HttpPartnerCatalogue;
