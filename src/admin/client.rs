//! Admin API facade
//!
//! One accessor per logical resource kind. Reads go through the pagination
//! aggregator (and the results cache when enabled); mutations go out as a
//! single request and drop the results cache.

use futures::stream::{self, StreamExt, TryStreamExt};
use reqwest::{Method, Response};
use serde_json::Value;
use tracing::debug;

use crate::cache::AdminCache;
use crate::config::AdminConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination;
use crate::router::{EndpointDescriptor, Router};
use crate::types::{JsonValue, PluginSchemas};
use crate::version::{parse_version, KongVersion};

/// Options for an arbitrary endpoint request
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP method (GET when unset)
    pub method: Option<Method>,
    /// JSON request body
    pub body: Option<JsonValue>,
}

impl RequestOptions {
    /// Create empty options (a plain GET)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Set a JSON body
    #[must_use]
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Client facade over the Kong admin API
pub struct AdminClient {
    http: HttpClient,
    router: Router,
    config: AdminConfig,
    cache: AdminCache,
}

impl AdminClient {
    /// Create a client from configuration
    pub fn new(config: AdminConfig) -> Result<Self> {
        let router = Router::new(config.base_url())?;
        let http = HttpClient::with_config(
            HttpClientConfig::builder().base_url(config.base_url()).build(),
        )?;

        Ok(Self {
            http,
            router,
            config,
            cache: AdminCache::new(),
        })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &AdminConfig {
        &self.config
    }

    /// The router resolving endpoint descriptors for this client
    pub fn router(&self) -> &Router {
        &self.router
    }

    // ========================================================================
    // Aggregated reads
    // ========================================================================

    /// Fetch a URL through the aggregator, consulting the results cache
    async fn fetch(&self, url: &str) -> Result<JsonValue> {
        if self.config.enable_cache {
            if let Some(hit) = self.cache.result(url).await {
                debug!("results cache hit for {url}");
                return Ok(hit);
            }
        }

        let value = pagination::fetch_all(&self.http, url).await?;

        if self.config.enable_cache {
            self.cache.store_result(url, value.clone()).await;
        }
        Ok(value)
    }

    async fn fetch_endpoint(&self, endpoint: &EndpointDescriptor) -> Result<JsonValue> {
        let url = self.router.resolve(endpoint)?;
        self.fetch(&url).await
    }

    /// Fetch an endpoint that must yield a collection
    async fn fetch_collection(&self, endpoint: &EndpointDescriptor) -> Result<Vec<JsonValue>> {
        let url = self.router.resolve(endpoint)?;
        match self.fetch(&url).await? {
            Value::Array(items) => Ok(items),
            _ => Err(Error::unexpected_shape(url, "a collection")),
        }
    }

    /// Fetch all declared APIs
    pub async fn fetch_apis(&self) -> Result<Vec<JsonValue>> {
        self.fetch_collection(&EndpointDescriptor::new("apis")).await
    }

    /// Fetch plugins configured globally
    pub async fn fetch_global_plugins(&self) -> Result<Vec<JsonValue>> {
        self.fetch_collection(&EndpointDescriptor::new("plugins"))
            .await
    }

    /// Fetch plugins attached to an API
    pub async fn fetch_plugins(&self, api_id: &str) -> Result<Vec<JsonValue>> {
        self.fetch_collection(&EndpointDescriptor::new("api-plugins").param("apiId", api_id))
            .await
    }

    /// Fetch a consumer's credentials for one auth plugin
    pub async fn fetch_consumer_credentials(
        &self,
        consumer_id: &str,
        plugin: &str,
    ) -> Result<Vec<JsonValue>> {
        self.fetch_collection(
            &EndpointDescriptor::new("consumer-credentials")
                .param("consumerId", consumer_id)
                .param("plugin", plugin),
        )
        .await
    }

    /// Fetch a consumer's ACL entries
    pub async fn fetch_consumer_acls(&self, consumer_id: &str) -> Result<Vec<JsonValue>> {
        self.fetch_collection(
            &EndpointDescriptor::new("consumer-acls").param("consumerId", consumer_id),
        )
        .await
    }

    /// Fetch all upstreams
    pub async fn fetch_upstreams(&self) -> Result<Vec<JsonValue>> {
        self.fetch_collection(&EndpointDescriptor::new("upstreams"))
            .await
    }

    /// Fetch all targets of an upstream, including inactive history entries
    pub async fn fetch_targets(&self, upstream_id: &str) -> Result<Vec<JsonValue>> {
        self.fetch_collection(
            &EndpointDescriptor::new("upstream-targets").param("upstreamId", upstream_id),
        )
        .await
    }

    /// Fetch the active targets of an upstream
    ///
    /// Gateways from 0.12.0 on fold active targets into the plain targets
    /// endpoint; older ones expose a dedicated `/targets/active` route. The
    /// gate consults the cached gateway version, fetching it first if
    /// needed.
    pub async fn fetch_targets_active(&self, upstream_id: &str) -> Result<Vec<JsonValue>> {
        let version = self.fetch_kong_version().await?;
        let name = if version.at_least(0, 12) {
            "upstream-targets"
        } else {
            "upstream-targets-active"
        };
        self.fetch_collection(&EndpointDescriptor::new(name).param("upstreamId", upstream_id))
            .await
    }

    /// Fetch all certificates
    pub async fn fetch_certificates(&self) -> Result<Vec<JsonValue>> {
        self.fetch_collection(&EndpointDescriptor::new("certificates"))
            .await
    }

    /// Fetch consumers, honoring the consumer policy in the configuration
    ///
    /// With `ignore_consumers` set this returns an empty collection without
    /// touching the network. With `ignore_undeclared_consumers` set the
    /// fetched collection is filtered to declared usernames; the `anonymous`
    /// consumer always passes the filter.
    pub async fn fetch_consumers(&self) -> Result<Vec<JsonValue>> {
        if self.config.ignore_consumers {
            debug!("consumer fetches disabled, returning empty collection");
            return Ok(Vec::new());
        }

        let consumers = self
            .fetch_collection(&EndpointDescriptor::new("consumers"))
            .await?;

        if !self.config.ignore_undeclared_consumers {
            return Ok(consumers);
        }

        Ok(consumers
            .into_iter()
            .filter(|consumer| {
                consumer
                    .get("username")
                    .and_then(Value::as_str)
                    .is_some_and(|name| self.config.is_declared_consumer(name))
            })
            .collect())
    }

    // ========================================================================
    // Plugin schemas
    // ========================================================================

    /// Fetch the field schema of every enabled plugin
    ///
    /// The enabled-plugins descriptor is fetched once, then each plugin's
    /// schema is fetched with at most `concurrency` requests in flight. The
    /// merged mapping is cached for the life of this client; later calls
    /// return the cached mapping without touching the network.
    pub async fn fetch_plugin_schemas(&self) -> Result<PluginSchemas> {
        if let Some(cached) = self.cache.plugin_schemas().await {
            return Ok(cached);
        }

        let enabled = self
            .fetch_endpoint(&EndpointDescriptor::new("plugins-enabled"))
            .await?;
        let names = enabled_plugin_names(&enabled);
        debug!("fetching schemas for {} enabled plugins", names.len());

        let schemas: PluginSchemas = stream::iter(names)
            .map(|name| async move {
                let fields = self.fetch_plugin_schema(&name).await?;
                Ok::<_, Error>((name, fields))
            })
            .buffer_unordered(self.config.concurrency.max(1))
            .try_collect()
            .await?;

        Ok(self.cache.store_plugin_schemas(schemas).await)
    }

    async fn fetch_plugin_schema(&self, plugin: &str) -> Result<Vec<String>> {
        let endpoint = EndpointDescriptor::new("plugin-schema").param("plugin", plugin);
        let schema = self.fetch_endpoint(&endpoint).await?;
        Ok(schema_field_names(&schema))
    }

    // ========================================================================
    // Version
    // ========================================================================

    /// Fetch and parse the gateway version
    ///
    /// The parsed value is cached for the life of this client.
    pub async fn fetch_kong_version(&self) -> Result<KongVersion> {
        if let Some(cached) = self.cache.version().await {
            return Ok(cached);
        }

        let url = self.router.resolve(&EndpointDescriptor::new("root"))?;
        let root = self.fetch(&url).await?;
        let text = root
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::unexpected_shape(&url, "a version field"))?;
        let version = parse_version(text)?;

        Ok(self.cache.store_version(version).await)
    }

    // ========================================================================
    // Arbitrary endpoint requests
    // ========================================================================

    /// Issue a single request to an arbitrary endpoint
    ///
    /// Any direct endpoint call may mutate gateway state, so the results
    /// cache is dropped before the request goes out. A JSON body is sent
    /// with the matching content type; without a body neither body nor
    /// content type is set. The raw response comes back for the caller to
    /// inspect.
    pub async fn request_endpoint(
        &self,
        endpoint: &EndpointDescriptor,
        options: RequestOptions,
    ) -> Result<Response> {
        self.cache.clear_results().await;

        let url = self.router.resolve(endpoint)?;
        let method = options.method.unwrap_or(Method::GET);

        let mut request = RequestConfig::new();
        if let Some(body) = options.body {
            request = request.json(body);
        }

        self.http.request(method, &url, request).await
    }
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Extract the enabled plugin names from the enabled-plugins descriptor
///
/// The payload arrives either as a list of names or as a mapping whose keys
/// are the names, depending on the gateway generation.
fn enabled_plugin_names(body: &JsonValue) -> Vec<String> {
    let payload = body.get("enabled_plugins").unwrap_or(body);
    match payload {
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .map(ToOwned::to_owned)
            .collect(),
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

/// Extract declared field names from a plugin schema body
///
/// A `fields` mapping contributes its keys; a `fields` array of single-key
/// maps contributes each entry's key.
fn schema_field_names(schema: &JsonValue) -> Vec<String> {
    match schema.get("fields") {
        Some(Value::Object(map)) => map.keys().cloned().collect(),
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|entry| entry.keys().cloned())
            .collect(),
        _ => Vec::new(),
    }
}
