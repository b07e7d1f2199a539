//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::ports::{CatalogueQuery, PaymentCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub payments: Arc<dyn PaymentCommand>,
    pub catalogue: Arc<dyn CatalogueQuery>,
    /// Overall deadline for one payment; `None` waits for the core service.
    pub payment_deadline: Option<Duration>,
}

impl HttpState {
    /// Construct state from the two driving ports, with no payment deadline.
    pub fn new(payments: Arc<dyn PaymentCommand>, catalogue: Arc<dyn CatalogueQuery>) -> Self {
        Self {
            payments,
            catalogue,
            payment_deadline: None,
        }
    }

    /// Bound each payment by `deadline`.
    #[must_use]
    pub fn with_payment_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.payment_deadline = deadline;
        self
    }
}
