//! Release tag parsing and comparison
//!
//! Tags have the strict form `vMAJOR.MINOR.PATCH`. Pre-release and build
//! suffixes are not accepted.

use crate::error::{Result, UpdateError};
use std::fmt;
use std::str::FromStr;

/// A parsed `vMAJOR.MINOR.PATCH` tag
///
/// Ordering is lexicographic over `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseTag {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ReleaseTag {
    /// Create a tag from its components
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a tag string such as `v1.2.3`
    pub fn parse(input: &str) -> Result<Self> {
        let rest = input
            .strip_prefix('v')
            .ok_or_else(|| UpdateError::invalid_version(input, "missing 'v' prefix"))?;

        let fields: Vec<&str> = rest.split('.').collect();
        if fields.len() != 3 {
            return Err(UpdateError::invalid_version(
                input,
                format!("expected 3 dot-separated fields, found {}", fields.len()),
            ));
        }

        let mut parts = [0u64; 3];
        for (slot, field) in parts.iter_mut().zip(&fields) {
            *slot = parse_field(input, field)?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

fn parse_field(input: &str, field: &str) -> Result<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UpdateError::invalid_version(
            input,
            format!("field {:?} is not a non-negative integer", field),
        ));
    }

    field
        .parse::<u64>()
        .map_err(|e| UpdateError::invalid_version(input, e.to_string()))
}

impl FromStr for ReleaseTag {
    type Err = UpdateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Report whether `version1` is strictly greater than `version2`
///
/// Both arguments must be valid tags; equal tags yield `Ok(false)`.
pub fn is_version_greater_than(version1: &str, version2: &str) -> Result<bool> {
    let first = ReleaseTag::parse(version1)?;
    let second = ReleaseTag::parse(version2)?;
    Ok(first > second)
}
