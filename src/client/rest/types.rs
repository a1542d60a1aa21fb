//! # Response Types
//!
//! Key Vault REST API response structures.
//!
//! These structs represent the JSON payloads returned by the vault's
//! secrets endpoints. Listing responses carry secret ids only; values are
//! resolved through individual `GET /secrets/{name}` calls.

use serde::Deserialize;

/// Response body for `GET /secrets/{name}`
#[derive(Debug, Deserialize)]
pub struct SecretBundle {
    /// Full secret id URL, e.g. `https://vault/secrets/my-secret`
    pub id: Option<String>,
    /// The secret value; absent for disabled or managed secrets
    pub value: Option<String>,
}

/// One item in a `GET /secrets` listing page
#[derive(Debug, Deserialize)]
pub struct SecretListItem {
    /// Full secret id URL; the name is its final path segment
    pub id: String,
}

/// Response body for `GET /secrets`
///
/// Enumeration is paged: `nextLink` carries the full URL of the next page,
/// or is absent on the last page.
#[derive(Debug, Deserialize)]
pub struct SecretListPage {
    /// Items on this page
    #[serde(default)]
    pub value: Vec<SecretListItem>,
    /// Continuation URL for the next page, if any
    #[serde(rename = "nextLink")]
    pub next_link: Option<String>,
}
