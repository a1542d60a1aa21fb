//! # Error Types
//!
//! Errors surfaced by [`SecretStore`](crate::store::SecretStore) operations.
//!
//! Remote failures are not retried here; propagation to the caller is
//! expected and the caller decides retry policy.

use thiserror::Error;

/// Error returned by secret store lookups.
#[derive(Debug, Error)]
pub enum SecretStoreError {
    /// The requested name does not exist in the remote vault.
    #[error("secret not found in vault: {name}")]
    NotFound {
        /// Name that was requested.
        name: String,
    },

    /// The remote call failed (transport, authentication, malformed response).
    #[error("remote fetch failed: {0}")]
    RemoteFetch(#[from] anyhow::Error),
}

impl SecretStoreError {
    /// True if the error means the secret is absent rather than unreachable.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SecretStoreError::NotFound { .. })
    }
}
