//! # Secret Store
//!
//! Caching layer over a remote vault client.
//!
//! The store answers point lookups and "list known names" queries while
//! keeping remote traffic bounded by a refresh interval and a listing
//! policy:
//!
//! - [`ListingPolicy::All`]: every secret is enumerated eagerly on first
//!   access and again once the refresh interval elapses. Enumeration runs
//!   at most once per refresh window no matter how many lookups occur.
//! - [`ListingPolicy::Single`]: the enumeration call is never issued;
//!   names are resolved one at a time on demand.
//!
//! Cache state lives behind one mutex held across the whole
//! read-check-fetch-write sequence, so concurrent misses cannot trigger
//! duplicate enumeration calls.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::{debug, info};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::client::VaultSecretClient;
use crate::config::{ListingPolicy, StoreConfig};
use crate::error::SecretStoreError;

/// A cached secret value with its fetch timestamp.
///
/// The value is wiped from memory when the entry drops.
#[derive(Debug, Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretEntry {
    /// Secret name, unique within the vault
    #[zeroize(skip)]
    pub name: String,
    /// Opaque secret value
    pub value: String,
    /// When the value was last fetched from the vault
    #[zeroize(skip)]
    pub fetched_at: Instant,
}

/// Cache map plus the timestamp of the last full enumeration.
/// Guarded as one unit so freshness checks and refills are atomic.
struct CacheState {
    entries: BTreeMap<String, SecretEntry>,
    last_enumeration: Option<Instant>,
}

/// Cached secret lookup over a remote vault.
///
/// Constructed once per vault endpoint; see the module docs for the
/// caching and policy behavior.
pub struct SecretStore {
    client: Arc<dyn VaultSecretClient>,
    vault_uri: String,
    refresh_interval: Duration,
    policy: ListingPolicy,
    state: Mutex<CacheState>,
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStore")
            .field("vault_uri", &self.vault_uri)
            .field("refresh_interval", &self.refresh_interval)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl SecretStore {
    /// Create a new store over the given client.
    pub fn new(
        client: Arc<dyn VaultSecretClient>,
        vault_uri: impl Into<String>,
        refresh_interval: Duration,
        policy: ListingPolicy,
    ) -> Self {
        Self {
            client,
            vault_uri: vault_uri.into(),
            refresh_interval,
            policy,
            state: Mutex::new(CacheState {
                entries: BTreeMap::new(),
                last_enumeration: None,
            }),
        }
    }

    /// Create a store from a [`StoreConfig`].
    pub fn from_config(client: Arc<dyn VaultSecretClient>, config: &StoreConfig) -> Self {
        Self::new(
            client,
            config.vault_uri.clone(),
            config.refresh_interval,
            config.listing_policy,
        )
    }

    /// The vault endpoint this store reads from.
    pub fn vault_uri(&self) -> &str {
        &self.vault_uri
    }

    /// The configured listing policy.
    pub fn policy(&self) -> ListingPolicy {
        self.policy
    }

    /// Look up a secret value by name.
    ///
    /// Returns the cached value when present and fresh. Otherwise, under
    /// [`ListingPolicy::All`] with a stale (or absent) enumeration, the
    /// whole vault is enumerated before the lookup; a miss after a fresh
    /// enumeration, and every miss under [`ListingPolicy::Single`], issues
    /// a point fetch for `name` only.
    ///
    /// # Errors
    /// [`SecretStoreError::NotFound`] when the vault has no such secret,
    /// [`SecretStoreError::RemoteFetch`] when the remote call fails.
    pub async fn get(&self, name: &str) -> Result<String, SecretStoreError> {
        let mut state = self.state.lock().await;

        if self.policy == ListingPolicy::All && self.enumeration_stale(&state) {
            self.enumerate(&mut state).await?;
        }

        if let Some(entry) = state.entries.get(name) {
            if entry.fetched_at.elapsed() < self.refresh_interval {
                debug!(secret.name = name, "cache hit");
                return Ok(entry.value.clone());
            }
            debug!(secret.name = name, "cache entry stale, re-fetching");
        }

        let value = self
            .client
            .get_secret(&self.vault_uri, name)
            .await?
            .ok_or_else(|| SecretStoreError::NotFound {
                name: name.to_string(),
            })?;

        state.entries.insert(
            name.to_string(),
            SecretEntry {
                name: name.to_string(),
                value: value.clone(),
                fetched_at: Instant::now(),
            },
        );

        Ok(value)
    }

    /// List the names this store currently knows, in sorted order.
    ///
    /// Under [`ListingPolicy::All`] this (re-)enumerates the vault when the
    /// refresh interval has elapsed, so it reflects the full remote name
    /// set. Under [`ListingPolicy::Single`] it returns only the names
    /// fetched so far, which may be empty.
    ///
    /// # Errors
    /// [`SecretStoreError::RemoteFetch`] when enumeration fails.
    pub async fn list(&self) -> Result<Vec<String>, SecretStoreError> {
        let mut state = self.state.lock().await;

        if self.policy == ListingPolicy::All && self.enumeration_stale(&state) {
            self.enumerate(&mut state).await?;
        }

        Ok(state.entries.keys().cloned().collect())
    }

    fn enumeration_stale(&self, state: &CacheState) -> bool {
        match state.last_enumeration {
            Some(at) => at.elapsed() >= self.refresh_interval,
            None => true,
        }
    }

    /// Refill the cache from a full vault enumeration.
    ///
    /// The entry map is replaced wholesale: names that disappeared from the
    /// vault are evicted along with their stale values.
    async fn enumerate(&self, state: &mut CacheState) -> Result<(), SecretStoreError> {
        let items = self.client.list_secrets(&self.vault_uri).await?;
        let now = Instant::now();

        info!(
            vault.uri = %self.vault_uri,
            count = items.len(),
            "refreshed secret cache from vault enumeration"
        );

        state.entries = items
            .into_iter()
            .map(|item| {
                (
                    item.name.clone(),
                    SecretEntry {
                        name: item.name,
                        value: item.value,
                        fetched_at: now,
                    },
                )
            })
            .collect();
        state.last_enumeration = Some(now);

        Ok(())
    }
}
