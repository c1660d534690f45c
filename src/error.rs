//! Error types for the Kong admin client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Kong admin client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} {status_text} from {url}")]
    HttpStatus {
        status: u16,
        status_text: String,
        url: String,
        body: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Routing Errors
    // ============================================================================
    #[error("Unknown admin endpoint: {name}")]
    UnknownEndpoint { name: String },

    #[error("Missing parameter '{param}' for endpoint '{endpoint}'")]
    MissingParam { endpoint: String, param: String },

    // ============================================================================
    // Data Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Unexpected response shape from {url}: expected {expected}")]
    UnexpectedShape { url: String, expected: String },

    #[error("Unrecognized Kong version string: {text}")]
    InvalidVersion { text: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an HTTP status error
    pub fn http_status(
        status: u16,
        status_text: impl Into<String>,
        url: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::HttpStatus {
            status,
            status_text: status_text.into(),
            url: url.into(),
            body: body.into(),
        }
    }

    /// Create an unknown endpoint error
    pub fn unknown_endpoint(name: impl Into<String>) -> Self {
        Self::UnknownEndpoint { name: name.into() }
    }

    /// Create a missing parameter error
    pub fn missing_param(endpoint: impl Into<String>, param: impl Into<String>) -> Self {
        Self::MissingParam {
            endpoint: endpoint.into(),
            param: param.into(),
        }
    }

    /// Create an unexpected shape error
    pub fn unexpected_shape(url: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            url: url.into(),
            expected: expected.into(),
        }
    }

    /// Create a version parse error
    pub fn invalid_version(text: impl Into<String>) -> Self {
        Self::InvalidVersion { text: text.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// The HTTP status code carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for the Kong admin client
pub type Result<T> = std::result::Result<T, Error>;
