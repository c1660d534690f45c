//! Gateway version parsing
//!
//! Kong reports its version in several shapes: plain `0.14.1`, short `0.14`,
//! release candidates like `0.14.1rc2`, and enterprise builds like
//! `0.34-1-enterprise-edition`. This module normalizes all of them to a
//! comparable version value; everything after the numeric core is dropped.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use semver::Version;

use crate::error::{Error, Result};

/// Matches the leading numeric core of a version string: `major.minor[.patch]`
static VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?").unwrap());

/// A parsed, comparable Kong version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct KongVersion(Version);

impl KongVersion {
    /// The underlying semver value
    pub fn as_semver(&self) -> &Version {
        &self.0
    }

    /// Check whether this version is at least `major.minor.0`
    pub fn at_least(&self, major: u64, minor: u64) -> bool {
        self.0 >= Version::new(major, minor, 0)
    }
}

impl fmt::Display for KongVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parse a Kong version string into a comparable version
pub fn parse_version(text: &str) -> Result<KongVersion> {
    let caps = VERSION_REGEX
        .captures(text.trim())
        .ok_or_else(|| Error::invalid_version(text))?;

    let component = |idx: usize| -> Result<u64> {
        caps.get(idx)
            .map_or(Ok(0), |m| m.as_str().parse().map_err(|_| Error::invalid_version(text)))
    };

    Ok(KongVersion(Version::new(
        component(1)?,
        component(2)?,
        component(3)?,
    )))
}
