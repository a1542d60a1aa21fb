//! # Store Configuration
//!
//! Store-level configuration loaded from environment variables.
//!
//! All settings except the vault URI have sensible defaults and can be
//! overridden via environment variables.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_REFRESH_INTERVAL_MS, ENV_LISTING_POLICY, ENV_REFRESH_INTERVAL_MS,
};

/// Strategy controlling how the store resolves secret names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingPolicy {
    /// Eagerly enumerate every secret name and value at first access and
    /// whenever the refresh interval elapses.
    #[serde(rename = "ALL")]
    All,
    /// Never enumerate; resolve names lazily one at a time on demand.
    #[serde(rename = "SINGLE")]
    Single,
}

impl FromStr for ListingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ALL" => Ok(ListingPolicy::All),
            "SINGLE" => Ok(ListingPolicy::Single),
            other => Err(format!(
                "unknown listing policy '{other}', expected ALL or SINGLE"
            )),
        }
    }
}

/// Secret store configuration
///
/// The vault URI is always supplied by the caller; refresh interval and
/// listing policy have defaults and environment overrides.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Remote vault endpoint, e.g. `https://my-vault.vault.example.net/`
    pub vault_uri: String,
    /// Duration after which a cached value is stale and re-fetched
    pub refresh_interval: Duration,
    /// Eager (`All`) or lazy (`Single`) name resolution
    pub listing_policy: ListingPolicy,
}

impl StoreConfig {
    /// Create a configuration with default refresh interval and policy
    pub fn new(vault_uri: impl Into<String>) -> Self {
        Self {
            vault_uri: vault_uri.into(),
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_INTERVAL_MS),
            listing_policy: ListingPolicy::All,
        }
    }

    /// Load configuration from environment variables with defaults
    pub fn from_env(vault_uri: impl Into<String>) -> Self {
        Self {
            vault_uri: vault_uri.into(),
            refresh_interval: Duration::from_millis(env_var_or_default(
                ENV_REFRESH_INTERVAL_MS,
                DEFAULT_REFRESH_INTERVAL_MS,
            )),
            listing_policy: env_var_or_default(ENV_LISTING_POLICY, ListingPolicy::All),
        }
    }

    /// Override the refresh interval
    #[must_use]
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// Override the listing policy
    #[must_use]
    pub fn with_listing_policy(mut self, policy: ListingPolicy) -> Self {
        self.listing_policy = policy;
        self
    }
}

/// Read environment variable or return default value
fn env_var_or_default<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
