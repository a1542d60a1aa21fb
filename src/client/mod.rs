//! # Vault Client Interface
//!
//! The remote collaborator behind [`SecretStore`](crate::store::SecretStore).
//!
//! The store treats the vault as an opaque dependency with two operations:
//! a point fetch by name and a full enumeration. Any backend implementing
//! [`VaultSecretClient`] can be plugged in; [`rest::RestVaultClient`]
//! provides an HTTP implementation.

pub mod rest;

use anyhow::Result;
use async_trait::async_trait;

/// One name/value pair returned by vault enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretItem {
    /// Secret name, unique within a vault
    pub name: String,
    /// Opaque secret value
    pub value: String,
}

/// Remote secret-fetching client.
///
/// `get_secret` returns `Ok(None)` when the secret does not exist remotely;
/// transport, authentication, and parse failures are errors.
#[async_trait]
pub trait VaultSecretClient: Send + Sync {
    /// Fetch a single secret value by name.
    async fn get_secret(&self, vault_uri: &str, name: &str) -> Result<Option<String>>;

    /// Enumerate all secrets in the vault with their values.
    async fn list_secrets(&self, vault_uri: &str) -> Result<Vec<SecretItem>>;
}
