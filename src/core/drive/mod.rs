//! Google Drive v3 client.
//!
//! Thin blocking wrapper over the REST endpoints the CLI needs: identity
//! check, resumable upload, delete, and folder name lookup.

mod auth;

pub use auth::{AccessToken, ServiceAccount};

use std::fs::File;
use std::path::Path;

use indicatif::ProgressBar;
use reqwest::blocking::{Body, Client, RequestBuilder, Response};
use reqwest::header::{CONTENT_TYPE, LOCATION};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, trace};

use crate::core::constants::{DRIVE_API, DRIVE_UPLOAD_API, UPLOAD_FIELDS};
use crate::error::{DriveError, Result};

const FALLBACK_MIME: &str = "application/octet-stream";

/// File resource returned after an upload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    /// Drive encodes int64 fields as strings
    pub size: Option<String>,
    pub created_time: Option<String>,
    pub web_view_link: Option<String>,
    pub parents: Vec<String>,
}

impl UploadedFile {
    /// Size in bytes, or zero when Drive did not report one.
    pub fn size_bytes(&self) -> u64 {
        self.size
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }
}

#[derive(Deserialize)]
struct About {
    user: AboutUser,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AboutUser {
    #[serde(default)]
    email_address: String,
}

#[derive(Deserialize)]
struct FileName {
    name: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Authenticated Drive session.
pub struct Drive {
    client: Client,
    token: AccessToken,
}

impl Drive {
    /// Authenticate with a service account.
    pub fn connect(account: &ServiceAccount) -> Result<Self> {
        // Uploads can run long, so no overall request timeout.
        let client = Client::builder()
            .timeout(None)
            .build()
            .map_err(DriveError::Request)?;
        let token = account.access_token(&client)?;
        debug!(account = %account.client_email(), "drive session ready");
        Ok(Self { client, token })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.token.secret())
    }

    /// Email address of the authenticated account.
    pub fn whoami(&self) -> Result<String> {
        let response = self
            .authorized(self.client.get(format!("{}/about", DRIVE_API)))
            .query(&[("fields", "user")])
            .send()
            .map_err(DriveError::Request)?;
        let about: About = decode(check(response)?)?;
        Ok(about.user.email_address)
    }

    /// Upload a local file into `folder_id` with a resumable session.
    ///
    /// The body is streamed through `progress`, whose length is set to the
    /// file size.
    pub fn upload(&self, path: &Path, folder_id: &str, progress: &ProgressBar) -> Result<UploadedFile> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mime = mime_type_for(path);

        debug!(file = %name, len, mime = %mime, folder = folder_id, "starting upload");

        let metadata = json!({
            "name": name,
            "mimeType": mime,
            "parents": [folder_id],
        });

        let response = self
            .authorized(self.client.post(format!("{}/files", DRIVE_UPLOAD_API)))
            .query(&[
                ("uploadType", "resumable"),
                ("supportsAllDrives", "true"),
                ("fields", UPLOAD_FIELDS),
            ])
            .header("X-Upload-Content-Type", mime.as_str())
            .header("X-Upload-Content-Length", len.to_string())
            .json(&metadata)
            .send()
            .map_err(DriveError::Request)?;
        let response = check(response)?;

        let session = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| DriveError::Decode("upload session has no Location header".to_string()))?;
        trace!("upload session opened");

        progress.set_length(len);
        let body = Body::sized(progress.wrap_read(file), len);

        let response = self
            .authorized(self.client.put(session))
            .header(CONTENT_TYPE, mime.as_str())
            .body(body)
            .send()
            .map_err(DriveError::Request)?;

        let uploaded: UploadedFile = decode(check(response)?)?;
        debug!(id = %uploaded.id, "upload complete");
        Ok(uploaded)
    }

    /// Permanently delete a file or folder.
    pub fn delete(&self, file_id: &str) -> Result<()> {
        debug!(id = file_id, "deleting");
        let response = self
            .authorized(self.client.delete(format!("{}/files/{}", DRIVE_API, file_id)))
            .query(&[("supportsAllDrives", "true")])
            .send()
            .map_err(DriveError::Request)?;
        check(response)?;
        Ok(())
    }

    /// Display name of a folder.
    pub fn folder_name(&self, folder_id: &str) -> Result<String> {
        let response = self
            .authorized(self.client.get(format!("{}/files/{}", DRIVE_API, folder_id)))
            .query(&[("fields", "name"), ("supportsAllDrives", "true")])
            .send()
            .map_err(DriveError::Request)?;
        let file: FileName = decode(check(response)?)?;
        Ok(file.name)
    }
}

/// Guess a MIME type from the file extension.
pub fn mime_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}

/// Turn a non-success response into `DriveError::Api`.
fn check(response: Response) -> std::result::Result<Response, DriveError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(DriveError::Api {
        status,
        message: api_error_message(&body),
    })
}

fn decode<T: serde::de::DeserializeOwned>(response: Response) -> std::result::Result<T, DriveError> {
    response.json().map_err(|e| DriveError::Decode(e.to_string()))
}

/// Prefer the structured `error.message`, fall back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}
