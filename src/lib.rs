// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # Kong Admin Client
//!
//! A minimal, Rust-native client facade over the Kong gateway admin API.
//!
//! ## Features
//!
//! - **Aggregated reads**: follows `{data, next}` pagination links and hands
//!   back one flattened collection per resource
//! - **Resource accessors**: APIs, plugins, consumers, credentials, ACLs,
//!   upstreams, targets, certificates
//! - **Plugin schemas**: bounded-concurrency fan-out over enabled plugins,
//!   cached per client
//! - **Version awareness**: parses the gateway version once and gates
//!   version-dependent routes on it
//! - **Optional read cache**: aggregated reads cached by URL, dropped on any
//!   mutating request
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kong_admin_client::{AdminClient, AdminConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AdminConfig::builder()
//!         .host("localhost:8001")
//!         .enable_cache(true)
//!         .build();
//!     let client = AdminClient::new(config)?;
//!
//!     let version = client.fetch_kong_version().await?;
//!     let apis = client.fetch_apis().await?;
//!     let schemas = client.fetch_plugin_schemas().await?;
//!
//!     println!("gateway {version}: {} apis", apis.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        AdminClient                          │
//! │  fetch_apis() … fetch_consumers() … request_endpoint()      │
//! └─────────────────────────────────────────────────────────────┘
//!                │               │                │
//! ┌──────────────┴──┬────────────┴─────┬──────────┴────────────┐
//! │     Router      │    Pagination    │        Cache          │
//! ├─────────────────┼──────────────────┼───────────────────────┤
//! │ name + params   │ {data, next}     │ schemas (write-once)  │
//! │   → URL         │   → flat list    │ version (write-once)  │
//! │ version gates   │ short-page stop  │ results (cleared on   │
//! │                 │                  │   mutation)           │
//! └─────────────────┴──────────────────┴───────────────────────┘
//!                           │
//!                    HTTP (reqwest)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// Gateway version parsing
pub mod version;

/// HTTP transport
pub mod http;

/// Admin API routing
pub mod router;

/// Pagination aggregation
pub mod pagination;

/// Facade-owned caches
pub mod cache;

/// Admin API facade
pub mod admin;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use admin::{AdminClient, RequestOptions};
pub use config::AdminConfig;
pub use router::EndpointDescriptor;
pub use version::{parse_version, KongVersion};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
