//! # Vault Secret Cache
//!
//! Cached secret lookup over a remote key-vault service.
//!
//! ## Overview
//!
//! [`SecretStore`] wraps an injected [`VaultSecretClient`] and keeps remote
//! traffic bounded by two knobs:
//!
//! 1. **Listing policy** — [`ListingPolicy::All`] enumerates every secret
//!    eagerly; [`ListingPolicy::Single`] resolves names lazily one at a
//!    time and never issues the enumeration call.
//! 2. **Refresh interval** — cached values older than the interval are
//!    stale and re-fetched on next access; under `All` the whole cache is
//!    rebuilt wholesale from a fresh enumeration.
//!
//! The remote collaborator is a trait, so tests inject fakes and any vault
//! backend can be adapted. [`client::rest::RestVaultClient`] ships as an
//! HTTP implementation with `nextLink` pagination.
//!
//! Remote failures surface as [`SecretStoreError::RemoteFetch`] without
//! internal retries; a missing secret is [`SecretStoreError::NotFound`].

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod store;

pub use client::{SecretItem, VaultSecretClient};
pub use config::{ListingPolicy, StoreConfig};
pub use error::SecretStoreError;
pub use store::{SecretEntry, SecretStore};
