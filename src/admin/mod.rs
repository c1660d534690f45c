//! Admin API facade module
//!
//! `AdminClient` exposes one accessor per logical resource kind and routes
//! every read through the pagination aggregator.
//!
//! # Overview
//!
//! - **Aggregated reads**: apis, plugins, consumers, upstreams, targets,
//!   certificates
//! - **Consumer policy**: skip entirely or filter to declared usernames
//! - **Plugin schemas**: bounded-concurrency fan-out, cached per client
//! - **Version**: parsed once and cached; gates the targets-active route
//! - **Arbitrary requests**: single call, drops the results cache

mod client;

pub use client::{AdminClient, RequestOptions};

#[cfg(test)]
mod tests;
