//! Encrypted secrets bundle.
//!
//! A bundle is a hex string decoding to `salt(16) || nonce(12) || ciphertext||tag`.
//! The AES-256-GCM key is derived from the operator's PIN with
//! PBKDF2-HMAC-SHA256 over the embedded salt. The plaintext is a JSON record
//! holding the Drive service-account credentials and the Telegram bot token.
//!
//! A wrong PIN and a tampered bundle both surface as
//! [`BundleError::AuthenticationFailed`]. Nothing here checks integrity ahead
//! of the AEAD open.

use std::fmt;

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::core::constants::{BUNDLE_HEADER_LEN, KEY_LEN, NONCE_LEN, PBKDF2_ITERATIONS, SALT_LEN};
use crate::error::BundleError;

/// Secrets recovered from a bundle.
///
/// Both values are wiped from memory on drop and never appear in `Debug`
/// output. Either may be empty when the sealed record omitted it.
#[derive(PartialEq, Eq)]
pub struct DecryptedBundle {
    service_account_json: Zeroizing<String>,
    bot_token: Zeroizing<String>,
}

impl DecryptedBundle {
    pub fn new(service_account_json: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self {
            service_account_json: Zeroizing::new(service_account_json.into()),
            bot_token: Zeroizing::new(bot_token.into()),
        }
    }

    /// Raw service-account JSON for Drive authentication.
    pub fn service_account_json(&self) -> &str {
        &self.service_account_json
    }

    /// Telegram bot token used for upload notifications.
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
}

impl fmt::Debug for DecryptedBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptedBundle")
            .field("service_account_json", &"<redacted>")
            .field("bot_token", &"<redacted>")
            .finish()
    }
}

/// Plaintext layout inside the ciphertext.
#[derive(Deserialize)]
struct Record {
    #[serde(default)]
    service_account_json_string: String,
    #[serde(default)]
    telegram_bot_token: String,
}

#[derive(Serialize)]
struct RecordRef<'a> {
    service_account_json_string: &'a str,
    telegram_bot_token: &'a str,
}

/// Parse the decrypted plaintext, which must be a JSON object.
fn parse_record(plaintext: &[u8]) -> Result<Record, BundleError> {
    let value: serde_json::Value =
        serde_json::from_slice(plaintext).map_err(BundleError::MalformedPayload)?;
    if !value.is_object() {
        return Err(BundleError::MalformedPayload(serde::de::Error::custom(
            "expected a JSON object",
        )));
    }
    serde_json::from_value(value).map_err(BundleError::MalformedPayload)
}

/// Derive the 32-byte bundle key from a PIN and salt.
pub fn derive_key(pin: &[u8], salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(pin, salt, PBKDF2_ITERATIONS, &mut *key);
    key
}

/// Decrypt a hex-encoded bundle with the operator's PIN.
///
/// # Errors
///
/// - `MalformedEncoding` if the input is not valid hex
/// - `TruncatedCiphertext` if it decodes to fewer than 28 bytes
/// - `AuthenticationFailed` on a wrong PIN or modified bytes
/// - `MalformedPayload` if the plaintext is not the expected JSON record
pub fn decrypt(hex_bundle: &str, pin: &[u8]) -> Result<DecryptedBundle, BundleError> {
    let raw = hex::decode(hex_bundle)?;
    trace!(len = raw.len(), "decoded bundle");

    if raw.len() < BUNDLE_HEADER_LEN {
        return Err(BundleError::TruncatedCiphertext { len: raw.len() });
    }

    let (salt, rest) = raw.split_at(SALT_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);
    let salt: [u8; SALT_LEN] = salt
        .try_into()
        .map_err(|_| BundleError::TruncatedCiphertext { len: raw.len() })?;

    let plaintext = {
        let key = derive_key(pin, &salt);
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_slice()));
        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map(Zeroizing::new)
            .map_err(|_| BundleError::AuthenticationFailed)?
    };

    let record = parse_record(&plaintext)?;
    debug!(
        has_credentials = !record.service_account_json_string.is_empty(),
        has_bot_token = !record.telegram_bot_token.is_empty(),
        "bundle decrypted"
    );

    Ok(DecryptedBundle::new(
        record.service_account_json_string,
        record.telegram_bot_token,
    ))
}

/// Encrypt a bundle under a PIN with a fresh random salt and nonce.
///
/// Returns the hex string that [`decrypt`] accepts.
pub fn seal(bundle: &DecryptedBundle, pin: &[u8]) -> Result<String, BundleError> {
    let mut salt = [0u8; SALT_LEN];
    let mut nonce = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .and_then(|_| OsRng.try_fill_bytes(&mut nonce))
        .map_err(|e| BundleError::SealFailed(e.to_string()))?;

    seal_with(bundle, pin, &salt, &nonce)
}

fn seal_with(
    bundle: &DecryptedBundle,
    pin: &[u8],
    salt: &[u8; SALT_LEN],
    nonce: &[u8; NONCE_LEN],
) -> Result<String, BundleError> {
    let plaintext = Zeroizing::new(
        serde_json::to_vec(&RecordRef {
            service_account_json_string: bundle.service_account_json(),
            telegram_bot_token: bundle.bot_token(),
        })
        .map_err(|e| BundleError::SealFailed(e.to_string()))?,
    );

    let key = derive_key(pin, salt);
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_slice()));
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext.as_slice())
        .map_err(|_| BundleError::SealFailed("aes-gcm encryption failed".to_string()))?;

    let mut framed = Vec::with_capacity(BUNDLE_HEADER_LEN + ciphertext.len());
    framed.extend_from_slice(salt);
    framed.extend_from_slice(nonce);
    framed.extend_from_slice(&ciphertext);

    trace!(len = framed.len(), "sealed bundle");
    Ok(hex::encode(framed))
}
