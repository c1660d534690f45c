//! Common types used throughout the Kong admin client
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// Mapping from plugin name to its declared field list
pub type PluginSchemas = HashMap<String, Vec<String>>;
