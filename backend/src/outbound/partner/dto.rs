//! DTOs for decoding partner service catalogue responses.
//!
//! Only `eventId` (and `seats` on the extended form) is decoded; every other
//! field lands in the flattened attribute map and is handed on verbatim.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{EventAttributes, EventDetail, EventId, EventSummary};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SimpleEventDto {
    pub(super) event_id: EventId,
    #[serde(flatten)]
    pub(super) attributes: EventAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ExtendedEventDto {
    pub(super) event_id: EventId,
    pub(super) seats: Vec<Value>,
    #[serde(flatten)]
    pub(super) attributes: EventAttributes,
}

impl From<SimpleEventDto> for EventSummary {
    fn from(dto: SimpleEventDto) -> Self {
        Self {
            event_id: dto.event_id,
            attributes: dto.attributes,
        }
    }
}

impl From<ExtendedEventDto> for EventDetail {
    fn from(dto: ExtendedEventDto) -> Self {
        Self {
            summary: EventSummary {
                event_id: dto.event_id,
                attributes: dto.attributes,
            },
            seats: dto.seats,
        }
    }
}
