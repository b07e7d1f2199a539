//! Domain ports: the edges of the hexagon.
//!
//! Driven ports (`CoreService`, `PartnerCatalogue`) describe the downstream
//! services; driving ports (`PaymentCommand`, `CatalogueQuery`) are the
//! use-cases inbound adapters call.

mod catalogue_query;
mod core_service;
mod downstream_error;
mod partner_catalogue;
mod payment_command;

#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::CatalogueQuery;
#[cfg(test)]
pub use core_service::MockCoreService;
pub use core_service::CoreService;
pub use downstream_error::DownstreamError;
#[cfg(test)]
pub use partner_catalogue::MockPartnerCatalogue;
pub use partner_catalogue::PartnerCatalogue;
#[cfg(test)]
pub use payment_command::MockPaymentCommand;
pub use payment_command::{PaymentCommand, PaymentError};
