//! Client configuration
//!
//! Options recognized by the admin client: where the admin API lives, how
//! consumers are treated during a fetch, whether aggregated reads are
//! cached, and how wide the plugin schema fan-out may go.

use serde::Deserialize;

/// Username the gateway treats as the anonymous consumer; always considered
/// declared when filtering.
pub const ANONYMOUS_CONSUMER: &str = "anonymous";

fn default_host() -> String {
    "localhost:8001".to_string()
}

fn default_concurrency() -> usize {
    10
}

/// Configuration for [`AdminClient`](crate::admin::AdminClient)
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Admin API host, e.g. `localhost:8001`
    #[serde(default = "default_host")]
    pub host: String,

    /// Use HTTPS when building the base URL
    #[serde(default)]
    pub use_https: bool,

    /// Skip consumer fetches entirely
    #[serde(default)]
    pub ignore_consumers: bool,

    /// Filter fetched consumers down to the declared list
    #[serde(default)]
    pub ignore_undeclared_consumers: bool,

    /// Declared consumer usernames
    #[serde(default)]
    pub consumers: Vec<String>,

    /// Cache aggregated reads until the next mutating request
    #[serde(default)]
    pub enable_cache: bool,

    /// Maximum number of plugin schema fetches in flight at once
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            use_https: false,
            ignore_consumers: false,
            ignore_undeclared_consumers: false,
            consumers: Vec::new(),
            enable_cache: false,
            concurrency: default_concurrency(),
        }
    }
}

impl AdminConfig {
    /// Create a new config builder
    pub fn builder() -> AdminConfigBuilder {
        AdminConfigBuilder::default()
    }

    /// Base URL of the admin API derived from `host` and `use_https`
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        format!("{scheme}://{}", self.host.trim_end_matches('/'))
    }

    /// Check whether a username counts as declared
    ///
    /// The `anonymous` consumer is implicitly declared.
    pub fn is_declared_consumer(&self, username: &str) -> bool {
        username == ANONYMOUS_CONSUMER || self.consumers.iter().any(|c| c == username)
    }
}

/// Builder for [`AdminConfig`]
#[derive(Debug, Default)]
pub struct AdminConfigBuilder {
    config: AdminConfig,
}

impl AdminConfigBuilder {
    /// Set the admin API host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Use HTTPS for the admin API
    pub fn use_https(mut self, use_https: bool) -> Self {
        self.config.use_https = use_https;
        self
    }

    /// Skip consumer fetches entirely
    pub fn ignore_consumers(mut self, ignore: bool) -> Self {
        self.config.ignore_consumers = ignore;
        self
    }

    /// Filter fetched consumers down to the declared list
    pub fn ignore_undeclared_consumers(mut self, ignore: bool) -> Self {
        self.config.ignore_undeclared_consumers = ignore;
        self
    }

    /// Set the declared consumer usernames
    pub fn consumers(mut self, consumers: Vec<String>) -> Self {
        self.config.consumers = consumers;
        self
    }

    /// Add a single declared consumer username
    pub fn declare_consumer(mut self, username: impl Into<String>) -> Self {
        self.config.consumers.push(username.into());
        self
    }

    /// Cache aggregated reads until the next mutating request
    pub fn enable_cache(mut self, enable: bool) -> Self {
        self.config.enable_cache = enable;
        self
    }

    /// Set the plugin schema fetch concurrency limit
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Build the config
    pub fn build(self) -> AdminConfig {
        self.config
    }
}
