//! Remote configuration fetch.
//!
//! Two independent GETs: a JSON document wrapping the encrypted bundle, and a
//! plaintext Telegram chat ID.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::core::config::Settings;
use crate::error::FetchError;

/// Encrypted configuration as published remotely.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Hex-encoded `salt || nonce || ciphertext`
    pub encrypted_bundle_hex: String,
    /// Telegram chat that receives upload notifications
    pub chat_id: String,
}

/// Wire shape of the bundle document.
#[derive(Deserialize)]
struct BundleDocument {
    encrypted_bundle: String,
}

/// Fetch both remote documents.
///
/// # Errors
///
/// Returns `FetchError` on transport failures, non-success status, or a
/// bundle document that is not the expected JSON.
pub fn fetch(settings: &Settings) -> Result<RemoteConfig, FetchError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(settings.http_timeout_secs))
        .build()
        .map_err(FetchError::Client)?;

    let body = get_text(&client, &settings.bundle_url)?;
    let encrypted_bundle_hex = parse_bundle_document(&settings.bundle_url, &body)?;

    let chat_id = get_text(&client, &settings.chat_id_url)?;
    let chat_id = parse_chat_id(&chat_id);

    debug!(
        bundle_len = encrypted_bundle_hex.len(),
        has_chat_id = !chat_id.is_empty(),
        "remote config fetched"
    );

    Ok(RemoteConfig {
        encrypted_bundle_hex,
        chat_id,
    })
}

fn get_text(client: &Client, url: &str) -> Result<String, FetchError> {
    debug!(url, "fetching");

    let response = client.get(url).send().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    response.text().map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })
}

/// Pull the hex bundle out of `{"encrypted_bundle": "..."}`.
pub fn parse_bundle_document(url: &str, body: &str) -> Result<String, FetchError> {
    serde_json::from_str::<BundleDocument>(body)
        .map(|doc| doc.encrypted_bundle)
        .map_err(|e| FetchError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

/// Chat IDs are published as plain text; surrounding whitespace is dropped.
pub fn parse_chat_id(body: &str) -> String {
    body.trim().to_string()
}
