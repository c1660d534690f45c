//! Admin API routing
//!
//! Maps symbolic endpoint names plus named parameters to concrete admin API
//! URLs. The dispatch table below is the single place URL layout knowledge
//! lives; everything above it works with [`EndpointDescriptor`]s.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A symbolic endpoint name plus its named parameters
///
/// Immutable once built; constructed per call.
#[derive(Debug, Clone, Default)]
pub struct EndpointDescriptor {
    name: String,
    params: HashMap<String, String>,
}

impl EndpointDescriptor {
    /// Create a descriptor for a named endpoint
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: HashMap::new(),
        }
    }

    /// Add a named parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// The endpoint name
    pub fn name(&self) -> &str {
        &self.name
    }

    fn require(&self, param: &str) -> Result<&str> {
        self.params
            .get(param)
            .map(String::as_str)
            .ok_or_else(|| Error::missing_param(&self.name, param))
    }
}

/// Resolves endpoint descriptors against a base URL
#[derive(Debug, Clone)]
pub struct Router {
    base_url: String,
}

impl Router {
    /// Create a router; the base URL must parse as an absolute URL
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL this router resolves against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a descriptor to a concrete URL
    pub fn resolve(&self, endpoint: &EndpointDescriptor) -> Result<String> {
        let path = match endpoint.name() {
            "root" => "/".to_string(),
            "apis" => "/apis".to_string(),
            "api" => format!("/apis/{}", endpoint.require("apiId")?),
            "plugins" => "/plugins".to_string(),
            "plugin" => format!("/plugins/{}", endpoint.require("pluginId")?),
            "api-plugins" => format!("/apis/{}/plugins", endpoint.require("apiId")?),
            "plugins-enabled" => "/plugins/enabled".to_string(),
            "plugin-schema" => format!("/plugins/schema/{}", endpoint.require("plugin")?),
            "consumers" => "/consumers".to_string(),
            "consumer" => format!("/consumers/{}", endpoint.require("consumerId")?),
            "consumer-credentials" => format!(
                "/consumers/{}/{}",
                endpoint.require("consumerId")?,
                endpoint.require("plugin")?
            ),
            "consumer-acls" => format!("/consumers/{}/acls", endpoint.require("consumerId")?),
            "upstreams" => "/upstreams".to_string(),
            "upstream" => format!("/upstreams/{}", endpoint.require("upstreamId")?),
            "upstream-targets" => {
                format!("/upstreams/{}/targets", endpoint.require("upstreamId")?)
            }
            "upstream-targets-active" => format!(
                "/upstreams/{}/targets/active",
                endpoint.require("upstreamId")?
            ),
            "certificates" => "/certificates".to_string(),
            "certificate" => format!("/certificates/{}", endpoint.require("certificateId")?),
            other => return Err(Error::unknown_endpoint(other)),
        };

        Ok(format!("{}{}", self.base_url, path))
    }
}
