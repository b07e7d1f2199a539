//! Driving port for catalogue reads exposed by the façade.

use async_trait::async_trait;

use super::DownstreamError;
use crate::domain::{EventDetail, EventId, EventSummary};

/// Use-case for listing and looking up events.
///
/// Failures are the partner client's, propagated unmodified.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueQuery: Send + Sync {
    /// Read the extended catalogue, with seat and price information.
    async fn events(&self) -> Result<EventDetail, DownstreamError>;

    /// Look up one event by identifier.
    async fn event(&self, event_id: EventId) -> Result<EventSummary, DownstreamError>;
}
