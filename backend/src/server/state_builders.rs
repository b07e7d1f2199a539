//! Builders wiring outbound adapters into the domain services behind the
//! HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use ticket_gateway::domain::{CatalogueService, PaymentService};
use ticket_gateway::inbound::http::state::HttpState;
use ticket_gateway::outbound::core_service::HttpCoreService;
use ticket_gateway::outbound::partner::HttpPartnerCatalogue;

use super::ServerConfig;

/// Build the handler state from resolved configuration.
///
/// Downstream clients are constructed once here and shared by every worker.
///
/// # Errors
/// Returns [`std::io::Error`] when a reqwest client cannot be constructed.
pub(crate) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let core = HttpCoreService::new(config.core_base_url.clone(), config.request_timeout)
        .map_err(|err| std::io::Error::other(format!("core client setup failed: {err}")))?;
    let partner =
        HttpPartnerCatalogue::new(config.partner_base_url.clone(), config.request_timeout)
            .map_err(|err| std::io::Error::other(format!("partner client setup failed: {err}")))?;
    info!(
        core = %config.core_base_url,
        partner = %config.partner_base_url,
        "downstream services configured"
    );

    let state = HttpState::new(
        Arc::new(PaymentService::new(Arc::new(core))),
        Arc::new(CatalogueService::new(Arc::new(partner))),
    )
    .with_payment_deadline(config.payment_deadline);
    Ok(web::Data::new(state))
}
