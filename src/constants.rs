//! # Constants
//!
//! Default values and environment variable names used across the crate.

/// Default refresh interval for cached secrets (milliseconds).
///
/// Cached values older than this are considered stale and re-fetched on
/// next access. 30 minutes matches the conventional key-vault adapter
/// default.
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1_800_000;

/// Default listing policy when none is configured.
pub const DEFAULT_LISTING_POLICY: &str = "ALL";

/// Key Vault REST API version sent with every request.
pub const DEFAULT_API_VERSION: &str = "7.4";

/// Environment variable overriding the refresh interval (milliseconds).
pub const ENV_REFRESH_INTERVAL_MS: &str = "VAULT_REFRESH_INTERVAL_MS";

/// Environment variable overriding the listing policy (`ALL` or `SINGLE`).
pub const ENV_LISTING_POLICY: &str = "VAULT_LISTING_POLICY";
