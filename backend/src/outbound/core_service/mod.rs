//! Core service outbound adapter.
//!
//! Implements the `CoreService` port over HTTP: a `GET` validating the user
//! token against a card, and a `POST` reserving a seat.

mod http_service;

pub use http_service::HttpCoreService;
