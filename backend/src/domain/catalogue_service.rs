//! Catalogue passthrough over the partner service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{CatalogueQuery, DownstreamError, PartnerCatalogue};
use crate::domain::{EventDetail, EventId, EventSummary};

/// Catalogue service implementing the [`CatalogueQuery`] driving port.
///
/// Records and failures are handed back exactly as the partner adapter
/// produced them.
#[derive(Clone)]
pub struct CatalogueService<P> {
    partner: Arc<P>,
}

impl<P> CatalogueService<P> {
    /// Create a service backed by the given partner catalogue port.
    pub fn new(partner: Arc<P>) -> Self {
        Self { partner }
    }
}

#[async_trait]
impl<P> CatalogueQuery for CatalogueService<P>
where
    P: PartnerCatalogue,
{
    async fn events(&self) -> Result<EventDetail, DownstreamError> {
        info!("getting event catalogue from partner service");
        self.partner
            .fetch_events()
            .await
            .inspect(|detail| {
                info!(
                    event_id = detail.summary.event_id,
                    seats = detail.seats.len(),
                    "partner event catalogue loaded"
                );
            })
            .inspect_err(|err| warn!(error = %err, "partner event catalogue failed"))
    }

    async fn event(&self, event_id: EventId) -> Result<EventSummary, DownstreamError> {
        info!(event_id, "getting event from partner service");
        self.partner
            .fetch_event(event_id)
            .await
            .inspect(|event| info!(event_id, name = event.name(), "partner event loaded"))
            .inspect_err(|err| warn!(event_id, error = %err, "partner event lookup failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockPartnerCatalogue;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn summary() -> EventSummary {
        EventSummary {
            event_id: 1,
            attributes: json!({
                "name": "Quiet Riot",
                "date": "2026-11-02T19:30:00",
                "venue": "Budapest Park",
                "city": "Budapest"
            })
            .as_object()
            .cloned()
            .expect("object literal"),
        }
    }

    fn make_service(partner: MockPartnerCatalogue) -> CatalogueService<MockPartnerCatalogue> {
        CatalogueService::new(Arc::new(partner))
    }

    #[rstest]
    #[tokio::test]
    async fn catalogue_is_passed_through(summary: EventSummary) {
        let detail = EventDetail {
            summary,
            seats: vec![json!({ "seatId": "S1", "price": 90.5, "currency": "HUF" })],
        };
        let expected = detail.clone();
        let mut partner = MockPartnerCatalogue::new();
        partner
            .expect_fetch_events()
            .times(1)
            .return_once(move || Ok(detail));

        let events = make_service(partner).events().await.expect("catalogue loads");

        assert_eq!(events, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn event_lookup_forwards_the_identifier(summary: EventSummary) {
        let expected = summary.clone();
        let mut partner = MockPartnerCatalogue::new();
        partner
            .expect_fetch_event()
            .withf(|event_id: &EventId| *event_id == 1)
            .times(1)
            .return_once(move |_| Ok(summary));

        let event = make_service(partner).event(1).await.expect("event loads");

        assert_eq!(event, expected);
    }

    #[rstest]
    #[case(DownstreamError::status(404_u16, "no such event"))]
    #[case(DownstreamError::connection("refused"))]
    #[case(DownstreamError::decode("missing field `eventId`"))]
    #[tokio::test]
    async fn failures_are_propagated_unmodified(#[case] failure: DownstreamError) {
        let expected = failure.clone();
        let mut partner = MockPartnerCatalogue::new();
        partner
            .expect_fetch_event()
            .times(1)
            .return_once(move |_| Err(failure));

        let error = make_service(partner).event(7).await.expect_err("lookup fails");

        assert_eq!(error, expected);
    }
}
