//! Reqwest-backed partner catalogue adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, Url};

use super::dto::{ExtendedEventDto, SimpleEventDto};
use crate::domain::ports::{DownstreamError, PartnerCatalogue};
use crate::domain::{EventDetail, EventId, EventSummary};
use crate::outbound::downstream::DownstreamClient;

/// Partner catalogue adapter issuing one HTTP `GET` per port method.
#[derive(Debug, Clone)]
pub struct HttpPartnerCatalogue {
    client: DownstreamClient,
}

impl HttpPartnerCatalogue {
    /// Build an adapter rooted at the partner service's base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: DownstreamClient::new("partner", base_url, timeout)?,
        })
    }
}

#[async_trait]
impl PartnerCatalogue for HttpPartnerCatalogue {
    async fn fetch_events(&self) -> Result<EventDetail, DownstreamError> {
        let events: ExtendedEventDto = self.client.call(Method::GET, "getEvents", &[]).await?;
        Ok(events.into())
    }

    async fn fetch_event(&self, event_id: EventId) -> Result<EventSummary, DownstreamError> {
        let event_id = event_id.to_string();
        let event: SimpleEventDto = self
            .client
            .call(
                Method::GET,
                "getEvent/{eventId}",
                &[("eventId", event_id.as_str())],
            )
            .await?;
        Ok(event.into())
    }
}
