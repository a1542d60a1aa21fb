//! # REST Vault Client
//!
//! HTTP implementation of [`VaultSecretClient`] against a Key Vault-style
//! secrets API.
//!
//! This module provides functionality to:
//! - Retrieve individual secret values (`GET /secrets/{name}`)
//! - Enumerate all secrets, following `nextLink` continuation pages
//!
//! Authentication is out of scope: the client is handed a pre-acquired
//! bearer token and attaches it to every request. Token acquisition and
//! renewal belong to the caller.

pub mod types;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::constants::DEFAULT_API_VERSION;

use self::types::{SecretBundle, SecretListPage};
use super::{SecretItem, VaultSecretClient};

/// REST client for a remote key vault
pub struct RestVaultClient {
    http: ReqwestClient,
    bearer_token: String,
    api_version: String,
}

impl std::fmt::Debug for RestVaultClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestVaultClient")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl RestVaultClient {
    /// Create a new REST vault client with the default API version.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        let http = ReqwestClient::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            bearer_token: bearer_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Override the API version sent with every request
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    async fn fetch_list_page(&self, url: &str) -> Result<SecretListPage> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await
            .context("Failed to list vault secrets")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Failed to list vault secrets: HTTP {status} - {body}");
        }

        response
            .json::<SecretListPage>()
            .await
            .context("Failed to deserialize vault listing response")
    }
}

/// Construct the URL for a single secret
///
/// Handles vault URIs with and without a trailing slash.
pub(crate) fn secret_url(vault_uri: &str, name: &str, api_version: &str) -> String {
    format!(
        "{}/secrets/{name}?api-version={api_version}",
        vault_uri.trim_end_matches('/')
    )
}

/// Construct the URL for the first listing page
pub(crate) fn list_url(vault_uri: &str, api_version: &str) -> String {
    format!(
        "{}/secrets?api-version={api_version}",
        vault_uri.trim_end_matches('/')
    )
}

/// Extract the secret name from its id URL (final path segment)
pub(crate) fn name_from_id(id: &str) -> &str {
    id.trim_end_matches('/').rsplit('/').next().unwrap_or(id)
}

#[async_trait]
impl VaultSecretClient for RestVaultClient {
    async fn get_secret(&self, vault_uri: &str, name: &str) -> Result<Option<String>> {
        let url = secret_url(vault_uri, name, &self.api_version);
        debug!(secret.name = name, "fetching vault secret");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await
            .context(format!("Failed to fetch vault secret: {name}"))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(secret.name = name, "vault secret does not exist");
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Failed to fetch vault secret {name}: HTTP {status} - {body}");
        }

        let bundle = response
            .json::<SecretBundle>()
            .await
            .context("Failed to deserialize vault secret response")?;

        Ok(bundle.value)
    }

    async fn list_secrets(&self, vault_uri: &str) -> Result<Vec<SecretItem>> {
        let mut names = Vec::new();
        let mut next = Some(list_url(vault_uri, &self.api_version));

        // The listing endpoint returns ids only; follow nextLink until the
        // last page, then resolve each name to its value.
        while let Some(url) = next {
            let page = self.fetch_list_page(&url).await?;
            names.extend(page.value.into_iter().map(|item| {
                name_from_id(&item.id).to_string()
            }));
            next = page.next_link;
        }

        debug!(count = names.len(), "enumerated vault secret names");

        let mut items = Vec::with_capacity(names.len());
        for name in names {
            match self.get_secret(vault_uri, &name).await? {
                Some(value) => items.push(SecretItem { name, value }),
                // Deleted or disabled between the list and the get
                None => warn!(secret.name = %name, "listed secret vanished, skipping"),
            }
        }

        Ok(items)
    }
}
