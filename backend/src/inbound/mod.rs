//! Inbound adapters that translate external requests into domain use-case
//! calls while keeping framework details at the edge.
//!
//! The façade's only transport is HTTP, under [`http`].

pub mod http;
