//! # Secret Store Integration Tests
//!
//! Exercises the store through the public API with an instrumented fake
//! vault client, covering the canonical single-secret scenario under both
//! listing policies.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use vault_secret_cache::{
    ListingPolicy, SecretItem, SecretStore, SecretStoreError, StoreConfig, VaultSecretClient,
};

const TEST_PROPERTY_NAME: &str = "testPropertyName1";
const FAKE_VAULT_URI: &str = "https://fake.vault.com";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Call-count instrumentation wrapper around an in-memory secret map.
struct CountingVaultClient {
    secrets: BTreeMap<String, String>,
    get_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl CountingVaultClient {
    fn with_test_property() -> Self {
        let mut secrets = BTreeMap::new();
        // Value equals the name, matching the canonical scenario
        secrets.insert(TEST_PROPERTY_NAME.to_string(), TEST_PROPERTY_NAME.to_string());
        Self {
            secrets,
            get_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl VaultSecretClient for CountingVaultClient {
    async fn get_secret(&self, _vault_uri: &str, name: &str) -> Result<Option<String>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.secrets.get(name).cloned())
    }

    async fn list_secrets(&self, _vault_uri: &str) -> Result<Vec<SecretItem>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .secrets
            .iter()
            .map(|(name, value)| SecretItem {
                name: name.clone(),
                value: value.clone(),
            })
            .collect())
    }
}

fn default_store(client: &Arc<CountingVaultClient>, policy: ListingPolicy) -> SecretStore {
    let config = StoreConfig::new(FAKE_VAULT_URI).with_listing_policy(policy);
    SecretStore::from_config(Arc::clone(client) as Arc<dyn VaultSecretClient>, &config)
}

#[tokio::test]
async fn test_get() {
    init_tracing();
    let client = Arc::new(CountingVaultClient::with_test_property());
    let store = default_store(&client, ListingPolicy::All);

    let result = store.get(TEST_PROPERTY_NAME).await.unwrap();

    assert_eq!(result, TEST_PROPERTY_NAME);
}

#[tokio::test]
async fn test_list() {
    init_tracing();
    let client = Arc::new(CountingVaultClient::with_test_property());
    let store = default_store(&client, ListingPolicy::All);

    let result = store.list().await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0], TEST_PROPERTY_NAME);
}

#[tokio::test]
async fn test_never_fetches_list_secrets_when_policy_is_single() {
    init_tracing();
    let client = Arc::new(CountingVaultClient::with_test_property());
    let store = SecretStore::new(
        Arc::clone(&client) as Arc<dyn VaultSecretClient>,
        FAKE_VAULT_URI,
        Duration::from_secs(1800),
        ListingPolicy::Single,
    );

    let result = store.get(TEST_PROPERTY_NAME).await.unwrap();

    assert_eq!(result, TEST_PROPERTY_NAME);
    assert_eq!(client.list_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_fetches_list_secrets_when_policy_is_all() {
    init_tracing();
    let client = Arc::new(CountingVaultClient::with_test_property());
    let store = default_store(&client, ListingPolicy::All);

    let result = store.get(TEST_PROPERTY_NAME).await.unwrap();

    assert_eq!(result, TEST_PROPERTY_NAME);
    assert_eq!(client.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_repeated_gets_share_one_enumeration() {
    init_tracing();
    let client = Arc::new(CountingVaultClient::with_test_property());
    let store = default_store(&client, ListingPolicy::All);

    for _ in 0..10 {
        store.get(TEST_PROPERTY_NAME).await.unwrap();
    }

    assert_eq!(client.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_missing_property_resolves_as_absent() {
    init_tracing();
    let client = Arc::new(CountingVaultClient::with_test_property());
    let store = default_store(&client, ListingPolicy::Single);

    let err = store.get("unknownProperty").await.unwrap_err();

    assert!(err.is_not_found());
    // Caller supplies the default
    let value = match store.get("unknownProperty").await {
        Ok(v) => v,
        Err(SecretStoreError::NotFound { .. }) => "fallback".to_string(),
        Err(other) => panic!("unexpected error: {other:?}"),
    };
    assert_eq!(value, "fallback");
}
