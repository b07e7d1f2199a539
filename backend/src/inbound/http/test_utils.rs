//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use crate::domain::ports::{MockCatalogueQuery, MockPaymentCommand};
use crate::inbound::http::state::HttpState;

/// Build handler state from mocked driving ports.
pub fn mock_state(payments: MockPaymentCommand, catalogue: MockCatalogueQuery) -> HttpState {
    HttpState::new(Arc::new(payments), Arc::new(catalogue))
}
