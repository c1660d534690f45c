//! Pagination aggregation
//!
//! The admin API pages large collections through a `{data, next}` envelope:
//! `data` holds one page and `next`, when present, points at the page after
//! it. [`fetch_all`] follows that chain and hands back one flattened result,
//! so callers never see page boundaries.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::JsonValue;

/// A page with at least this many items is considered full. A shorter page
/// is treated as final even when a `next` link is present, which guards
/// against a non-terminating link chain at the cost of truncating a genuine
/// short page that still carries a link.
pub const FULL_PAGE_LEN: usize = 100;

/// One response body, classified at the JSON boundary
#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    /// A body without a `data` field (root info, single objects)
    Bare(JsonValue),
    /// A `{data, next}` pagination envelope
    Envelope {
        data: JsonValue,
        next: Option<String>,
    },
}

impl PageBody {
    /// Classify a response body
    pub fn classify(body: JsonValue) -> Self {
        match body {
            Value::Object(mut map) if map.contains_key("data") => {
                let data = map.remove("data").unwrap_or(Value::Null);
                let next = map
                    .get("next")
                    .and_then(Value::as_str)
                    .map(ToOwned::to_owned);
                Self::Envelope { data, next }
            }
            other => Self::Bare(other),
        }
    }
}

/// Fetch `url` and follow pagination links, returning the flattened result
///
/// Collection endpoints yield a JSON array with pages concatenated in
/// original order (current page first, deeper pages after); bodies without a
/// `data` field come back unchanged. An empty-object `data` normalizes to an
/// empty array, since the API serializes "no results" as `{}` on some
/// endpoints. Fails with [`Error::HttpStatus`](crate::Error::HttpStatus) on
/// any non-2xx page, discarding pages already fetched.
pub async fn fetch_all(client: &HttpClient, url: &str) -> Result<JsonValue> {
    let mut items: Vec<JsonValue> = Vec::new();
    let mut url = url.to_string();
    let mut first_page = true;

    loop {
        let body = client.get_json(&url).await?;

        match PageBody::classify(body) {
            PageBody::Bare(value) => {
                // Single-object responses pass through untouched; on a
                // follow-up page the body joins the collection as one item.
                if first_page {
                    return Ok(value);
                }
                items.push(value);
                return Ok(Value::Array(items));
            }
            PageBody::Envelope { data, next } => match data {
                Value::Array(page) => {
                    let page_len = page.len();
                    items.extend(page);

                    match next {
                        Some(next_url) if page_len >= FULL_PAGE_LEN => {
                            debug!("page of {page_len} items, following {next_url}");
                            url = next_url;
                            first_page = false;
                        }
                        Some(next_url) => {
                            warn!(
                                "short page ({page_len} items), not following {next_url}"
                            );
                            return Ok(Value::Array(items));
                        }
                        None => return Ok(Value::Array(items)),
                    }
                }
                // "no results" sometimes arrives as {} instead of []
                Value::Object(map) if map.is_empty() => {
                    return Ok(Value::Array(items));
                }
                other => {
                    // A non-list payload cannot be concatenated and never
                    // follows a link.
                    if first_page {
                        return Ok(other);
                    }
                    items.push(other);
                    return Ok(Value::Array(items));
                }
            },
        }
    }
}
