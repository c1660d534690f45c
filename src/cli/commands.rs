//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Kong admin API command-line client
#[derive(Parser, Debug)]
#[command(name = "kong-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Admin API host, e.g. localhost:8001
    #[arg(long, global = true, default_value = "localhost:8001")]
    pub host: String,

    /// Use HTTPS for the admin API
    #[arg(long, global = true)]
    pub https: bool,

    /// Cache aggregated reads until the next mutating request
    #[arg(long, global = true)]
    pub cache: bool,

    /// Maximum parallel plugin schema fetches
    #[arg(long, global = true, default_value = "10")]
    pub concurrency: usize,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the gateway version
    Version,

    /// Dump declared resources as one JSON document
    Dump {
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// List enabled plugins and their schema fields
    Schemas,
}
