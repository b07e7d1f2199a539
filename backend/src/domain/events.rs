//! Event catalogue value types.
//!
//! These records are built only from partner service responses and handed to
//! callers unchanged. Only the event identifier is interpreted; every other
//! field the partner publishes is carried verbatim, so the façade never
//! narrows or reshapes the catalogue. Records are never cached or mutated
//! after construction.

use serde_json::{Map, Value};

/// Partner-assigned event identifier.
pub type EventId = i64;

/// Partner fields kept exactly as published, keyed by their wire name.
pub type EventAttributes = Map<String, Value>;

/// Simple event form returned by a single-event lookup.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use ticket_gateway::domain::EventSummary;
///
/// let attributes = json!({ "name": "Quiet Riot", "city": "Budapest" });
/// let event = EventSummary {
///     event_id: 1,
///     attributes: attributes.as_object().cloned().expect("object"),
/// };
/// assert_eq!(event.name(), Some("Quiet Riot"));
/// assert_eq!(event.venue(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    /// Partner event identifier.
    pub event_id: EventId,
    /// Every other field of the partner record, including the display fields.
    pub attributes: EventAttributes,
}

impl EventSummary {
    fn text(&self, field: &str) -> Option<&str> {
        self.attributes.get(field).and_then(Value::as_str)
    }

    /// Display name, when the partner published one as text.
    pub fn name(&self) -> Option<&str> {
        self.text("name")
    }

    /// Display date in the partner's own format.
    pub fn date(&self) -> Option<&str> {
        self.text("date")
    }

    /// Venue display name.
    pub fn venue(&self) -> Option<&str> {
        self.text("venue")
    }
}

/// Extended event form returned by the catalogue listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    /// Identifier and the fields shared with [`EventSummary`].
    pub summary: EventSummary,
    /// Seat and price entries, untouched.
    pub seats: Vec<Value>,
}
