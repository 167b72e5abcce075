//! Error types for drivepost.
//!
//! Each concern has its own error enum; [`Error`] wraps them so commands can
//! propagate anything with `?`.

use thiserror::Error;

/// Top-level error returned by library and CLI operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Bundle(#[from] BundleError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Drive(#[from] DriveError),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while opening or sealing an encrypted secrets bundle.
///
/// `AuthenticationFailed` deliberately covers both a wrong PIN and tampered
/// bytes.
#[derive(Error, Debug)]
pub enum BundleError {
    #[error("encrypted bundle is not valid hex: {0}")]
    MalformedEncoding(#[from] hex::FromHexError),

    #[error("encrypted bundle too short: expected at least 28 bytes (salt + nonce), got {len}")]
    TruncatedCiphertext { len: usize },

    #[error("decryption failed")]
    AuthenticationFailed,

    #[error("decrypted bundle is not a valid secrets record: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    #[error("sealing bundle failed: {0}")]
    SealFailed(String),
}

/// Failures while normalizing a Drive file or folder reference.
#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("invalid or unrecognized Google Drive ID or link: {0}")]
    Unrecognized(String),
}

/// Failures while fetching the remote configuration documents.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("bad status from {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("unexpected response body from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// Failures talking to Google Drive.
#[derive(Error, Debug)]
pub enum DriveError {
    #[error("invalid service account credentials: {0}")]
    Credentials(String),

    #[error("failed to sign token request: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("token exchange failed: {0}")]
    Token(String),

    #[error("drive request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("drive api error ({status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("unexpected drive response: {0}")]
    Decode(String),
}

/// Failures sending the chat notification.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("failed to send telegram message: {0}")]
    Request(#[from] reqwest::Error),

    #[error("telegram api error: {status} - {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Failures loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
