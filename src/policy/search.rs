//! SearchPolicy: enumeration bounds for path analysis.
//!
//! Exhaustive simple-path enumeration is exponential in the worst case. The
//! policy lets callers put a ceiling on the number of paths visited and on
//! the path length, trading completeness for bounded work.
//!
//! ## Environment
//!
//! - `COURIER_MAX_PATHS`: stop enumerating after this many paths
//! - `COURIER_MAX_DEPTH`: ignore paths longer than this many edges
//!
//! Unset or empty variables mean "unbounded".

use serde::{Deserialize, Serialize};
use crate::canonical::canonical_hash_hex;
use crate::DEFAULT_POLICY_VERSION;

/// Environment variable for [`SearchPolicy::max_paths`].
pub const MAX_PATHS_ENV: &str = "COURIER_MAX_PATHS";

/// Environment variable for [`SearchPolicy::max_depth`].
pub const MAX_DEPTH_ENV: &str = "COURIER_MAX_DEPTH";

/// Error type for policy configuration.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// A configuration value could not be parsed.
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Offending value.
        value: String,
    },
    /// JSON policy document could not be decoded.
    #[error("Invalid policy JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Search policy version 1.
///
/// ## Parameters
///
/// - `max_paths`: Maximum simple paths visited per enumeration (`None` = all)
/// - `max_depth`: Maximum path length in edges (`None` = unlimited)
///
/// The default policy is unbounded, which is what the critical edge
/// analysis needs for an exact answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPolicy {
    /// Policy version identifier.
    #[serde(default = "default_version")]
    pub version: String,
    /// Maximum number of paths visited per enumeration.
    #[serde(default)]
    pub max_paths: Option<usize>,
    /// Maximum path length, counted in edges.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_version() -> String {
    DEFAULT_POLICY_VERSION.to_string()
}

impl SearchPolicy {
    /// Create an unbounded policy.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Create a policy with explicit bounds.
    pub fn bounded(max_paths: Option<usize>, max_depth: Option<usize>) -> Self {
        Self {
            version: default_version(),
            max_paths,
            max_depth,
        }
    }

    /// Whether any bound is set.
    pub fn is_bounded(&self) -> bool {
        self.max_paths.is_some() || self.max_depth.is_some()
    }

    /// Get the policy ID.
    pub fn policy_id(&self) -> &str {
        &self.version
    }

    /// Compute a hash of the policy parameters.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(self)
    }

    /// Decode a policy from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a policy from `COURIER_MAX_PATHS` / `COURIER_MAX_DEPTH`.
    pub fn from_env() -> Result<Self, PolicyError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a policy from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PolicyError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self::bounded(
            parse_limit(MAX_PATHS_ENV, lookup(MAX_PATHS_ENV))?,
            parse_limit(MAX_DEPTH_ENV, lookup(MAX_DEPTH_ENV))?,
        ))
    }
}

fn parse_limit(key: &str, raw: Option<String>) -> Result<Option<usize>, PolicyError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<usize>()
            .map(Some)
            .map_err(|_| PolicyError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            }),
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::bounded(None, None)
    }
}
