//! HTTP inbound adapter exposing the façade's REST endpoints.

pub mod error;
pub mod events;
pub mod health;
pub mod payments;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub(crate) mod validation;

pub use error::ApiResult;
