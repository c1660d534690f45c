//! CLI execution

use serde_json::{json, Value};

use super::commands::{Cli, Commands};
use crate::admin::AdminClient;
use crate::config::AdminConfig;
use crate::error::Result;
use crate::types::JsonValue;

/// Runs a parsed CLI invocation against the admin API
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    pub async fn run(&self) -> Result<()> {
        let config = AdminConfig::builder()
            .host(&self.cli.host)
            .use_https(self.cli.https)
            .enable_cache(self.cli.cache)
            .concurrency(self.cli.concurrency)
            .build();
        let client = AdminClient::new(config)?;

        match &self.cli.command {
            Commands::Version => {
                let version = client.fetch_kong_version().await?;
                println!("{version}");
            }
            Commands::Dump { pretty } => {
                let dump = dump_resources(&client).await?;
                if *pretty {
                    println!("{}", serde_json::to_string_pretty(&dump)?);
                } else {
                    println!("{}", serde_json::to_string(&dump)?);
                }
            }
            Commands::Schemas => {
                let schemas = client.fetch_plugin_schemas().await?;
                let mut names: Vec<_> = schemas.keys().collect();
                names.sort();
                for name in names {
                    println!("{name}: {}", schemas[name].join(", "));
                }
            }
        }

        Ok(())
    }
}

/// Fetch every resource kind and stitch sub-resources under their parents
async fn dump_resources(client: &AdminClient) -> Result<JsonValue> {
    let version = client.fetch_kong_version().await?;

    let mut apis = client.fetch_apis().await?;
    for api in &mut apis {
        let Some(id) = api.get("id").and_then(Value::as_str).map(str::to_owned) else {
            continue;
        };
        let plugins = client.fetch_plugins(&id).await?;
        if let Some(obj) = api.as_object_mut() {
            obj.insert("plugins".to_string(), Value::Array(plugins));
        }
    }

    let mut consumers = client.fetch_consumers().await?;
    for consumer in &mut consumers {
        let Some(id) = consumer.get("id").and_then(Value::as_str).map(str::to_owned) else {
            continue;
        };
        let acls = client.fetch_consumer_acls(&id).await?;
        if let Some(obj) = consumer.as_object_mut() {
            obj.insert("acls".to_string(), Value::Array(acls));
        }
    }

    let mut upstreams = client.fetch_upstreams().await?;
    for upstream in &mut upstreams {
        let Some(id) = upstream.get("id").and_then(Value::as_str).map(str::to_owned) else {
            continue;
        };
        let targets = client.fetch_targets(&id).await?;
        if let Some(obj) = upstream.as_object_mut() {
            obj.insert("targets".to_string(), Value::Array(targets));
        }
    }

    Ok(json!({
        "version": version.to_string(),
        "apis": apis,
        "plugins": client.fetch_global_plugins().await?,
        "consumers": consumers,
        "upstreams": upstreams,
        "certificates": client.fetch_certificates().await?,
    }))
}
