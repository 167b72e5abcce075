//! Service-account authentication for the Drive API.
//!
//! Exchanges an RS256-signed JWT assertion for a short-lived OAuth2 access
//! token (the JWT bearer grant).

use std::fmt;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{DRIVE_SCOPE, GOOGLE_TOKEN_URI};
use crate::error::DriveError;

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Parsed service-account key.
pub struct ServiceAccount {
    client_email: String,
    private_key: Zeroizing<String>,
    token_uri: String,
}

#[derive(Deserialize)]
struct KeyFile {
    client_email: String,
    private_key: String,
    #[serde(default)]
    token_uri: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    iss: String,
    scope: String,
    aud: String,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Bearer token for Drive requests. Redacted in `Debug`.
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl ServiceAccount {
    /// Parse the service-account JSON from a decrypted bundle.
    ///
    /// # Errors
    ///
    /// Returns `DriveError::Credentials` if the JSON is empty, malformed, or
    /// lacks `client_email` / `private_key`.
    pub fn from_json(json: &str) -> Result<Self, DriveError> {
        if json.trim().is_empty() {
            return Err(DriveError::Credentials(
                "service account JSON is empty".to_string(),
            ));
        }

        let key: KeyFile =
            serde_json::from_str(json).map_err(|e| DriveError::Credentials(e.to_string()))?;
        let private_key = Zeroizing::new(key.private_key);

        if key.client_email.is_empty() || private_key.is_empty() {
            return Err(DriveError::Credentials(
                "client_email and private_key are required".to_string(),
            ));
        }

        Ok(Self {
            client_email: key.client_email,
            private_key,
            token_uri: key
                .token_uri
                .unwrap_or_else(|| GOOGLE_TOKEN_URI.to_string()),
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// Signed JWT assertion valid from `now` for one hour.
    fn assertion(&self, now: i64) -> Result<Zeroizing<String>, DriveError> {
        let claims = Claims {
            iss: self.client_email.clone(),
            scope: DRIVE_SCOPE.to_string(),
            aud: self.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        Ok(Zeroizing::new(encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &key,
        )?))
    }

    /// Exchange a fresh assertion for an access token.
    pub fn access_token(&self, client: &Client) -> Result<AccessToken, DriveError> {
        let assertion = self.assertion(chrono::Utc::now().timestamp())?;
        debug!(account = %self.client_email, token_uri = %self.token_uri, "requesting access token");

        let response = client
            .post(&self.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(DriveError::Token(format!("{}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .map_err(|e| DriveError::Token(format!("unexpected token response: {}", e)))?;

        Ok(AccessToken(Zeroizing::new(token.access_token)))
    }
}
