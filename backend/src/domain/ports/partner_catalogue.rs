//! Driven port for the partner service's read-only event catalogue.

use async_trait::async_trait;

use super::DownstreamError;
use crate::domain::{EventDetail, EventId, EventSummary};

/// Port for reading events from the partner service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PartnerCatalogue: Send + Sync {
    /// Fetch the catalogue document in its extended form.
    async fn fetch_events(&self) -> Result<EventDetail, DownstreamError>;

    /// Fetch one event in its simple form.
    async fn fetch_event(&self, event_id: EventId) -> Result<EventSummary, DownstreamError>;
}
