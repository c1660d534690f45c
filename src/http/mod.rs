//! HTTP transport module
//!
//! Thin reqwest wrapper used by the aggregator and the facade.
//!
//! # Features
//!
//! - **Base URL joining**: paths resolve against a configured base
//! - **Default headers**: applied to every request
//! - **JSON bodies**: serialized with the matching content type
//! - **Status validation**: `get_json` maps non-2xx to a typed error

mod client;

pub use client::{ensure_success, HttpClient, HttpClientConfig, RequestConfig};
