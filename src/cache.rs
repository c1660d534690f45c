//! Facade-owned caches
//!
//! Three caches with two lifecycles. Plugin schemas and the gateway version
//! are write-once for the life of the facade: the first completed fetch wins
//! and there is no invalidation path, since both are static for a given
//! deployment. The generic results cache maps request URLs to aggregated
//! results and is dropped wholesale on any mutating call — a conservative
//! invalidation that assumes writes may touch arbitrary prior reads.
//!
//! The cache is owned by the facade instance rather than living in a global,
//! so independent facades can coexist in one process.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::types::{JsonValue, PluginSchemas};
use crate::version::KongVersion;

/// Caches owned by one [`AdminClient`](crate::admin::AdminClient)
#[derive(Debug, Default)]
pub struct AdminCache {
    plugin_schemas: RwLock<Option<PluginSchemas>>,
    version: RwLock<Option<KongVersion>>,
    results: RwLock<HashMap<String, JsonValue>>,
}

impl AdminCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached plugin schemas, if any
    pub async fn plugin_schemas(&self) -> Option<PluginSchemas> {
        self.plugin_schemas.read().await.clone()
    }

    /// Store plugin schemas unless an earlier fetch already did
    ///
    /// Returns the cached value, which is the existing one when two fetches
    /// race; the first write wins.
    pub async fn store_plugin_schemas(&self, schemas: PluginSchemas) -> PluginSchemas {
        let mut slot = self.plugin_schemas.write().await;
        slot.get_or_insert(schemas).clone()
    }

    /// Cached gateway version, if any
    pub async fn version(&self) -> Option<KongVersion> {
        self.version.read().await.clone()
    }

    /// Store the gateway version unless an earlier fetch already did
    pub async fn store_version(&self, version: KongVersion) -> KongVersion {
        let mut slot = self.version.write().await;
        slot.get_or_insert(version).clone()
    }

    /// Cached aggregated result for a URL, if any
    pub async fn result(&self, url: &str) -> Option<JsonValue> {
        self.results.read().await.get(url).cloned()
    }

    /// Store an aggregated result under its URL
    pub async fn store_result(&self, url: &str, value: JsonValue) {
        self.results.write().await.insert(url.to_string(), value);
    }

    /// Drop every cached aggregated result
    pub async fn clear_results(&self) {
        self.results.write().await.clear();
    }
}
