//! Generic HTTP plumbing shared by the core and partner adapters.

mod client;

pub use client::DownstreamClient;
