//! Upload command.
//!
//! Upload one file to Drive, print its details, and notify Telegram.

use std::io;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::info;

use crate::cli::{output, session, Globals};
use crate::core::drive::UploadedFile;
use crate::core::format;
use crate::core::notify::{Notifier, UploadNotice};
use crate::core::reference;
use crate::error::{NotifyError, Result};

const NOT_AVAILABLE: &str = "N/A";

/// Upload `file` into `folder` (an ID or folder link) or the default folder.
pub fn execute(globals: &Globals, file: &Path, folder: Option<&str>) -> Result<()> {
    if !file.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("file not found: {}", file.display()),
        )
        .into());
    }

    let folder_id = folder.map(reference::extract).transpose()?;
    let settings = globals.settings()?;
    let folder_id = match folder_id {
        Some(id) => id,
        None => {
            output::dimmed(&format!(
                "no folder given, using default {}",
                settings.default_folder
            ));
            settings.default_folder.clone()
        }
    };

    let session = session::open(&settings)?;

    let name = file
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    info!(file = %file.display(), folder = %folder_id, "uploading");

    let bar = output::transfer_bar(&name);
    let uploaded = match session.drive.upload(file, &folder_id, &bar) {
        Ok(uploaded) => {
            bar.finish_and_clear();
            uploaded
        }
        Err(e) => {
            bar.abandon();
            return Err(e);
        }
    };

    let folder_name = uploaded
        .parents
        .first()
        .and_then(|parent| match session.drive.folder_name(parent) {
            Ok(name) => Some(name),
            Err(e) => {
                output::warn(&format!("could not fetch folder name for {}: {}", parent, e));
                None
            }
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let notice = notice_for(&uploaded, &folder_name);
    print_summary(&uploaded, &notice);

    let client = Client::builder()
        .timeout(Duration::from_secs(settings.http_timeout_secs))
        .build()
        .map_err(NotifyError::from)?;

    match Notifier::new(client, session.bundle.bot_token(), &session.chat_id) {
        None => output::warn("telegram bot token or chat id not configured, skipping notification"),
        Some(notifier) => {
            output::progress("sending telegram notification");
            let sent = notifier.send(&notice);
            output::progress_done(sent.is_ok());
            if let Err(e) = sent {
                output::warn(&format!("notification failed: {}", e));
            }
        }
    }

    output::success("upload complete");
    Ok(())
}

/// Build the display/notification fields for an uploaded file.
fn notice_for(uploaded: &UploadedFile, folder_name: &str) -> UploadNotice {
    let created = uploaded
        .created_time
        .as_deref()
        .and_then(format::parse_created);

    UploadNotice {
        file_name: uploaded.name.clone(),
        folder_name: folder_name.to_string(),
        size: format::human_size(uploaded.size_bytes()),
        mime_type: uploaded.mime_type.clone(),
        created: created
            .as_ref()
            .map(format::created_short)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        view_link: uploaded
            .web_view_link
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| format::view_link(&uploaded.id)),
        direct_link: format::direct_link(&uploaded.id),
    }
}

fn print_summary(uploaded: &UploadedFile, notice: &UploadNotice) {
    output::section("Uploaded");
    output::kv("name:   ", &notice.file_name);
    output::kv("size:   ", &notice.size);
    output::kv("type:   ", &notice.mime_type);
    if let Some(created) = uploaded
        .created_time
        .as_deref()
        .and_then(format::parse_created)
    {
        output::kv("created:", format::created_long(&created));
    }
    output::kv("folder: ", &notice.folder_name);
    output::kv("view:   ", output::id(&notice.view_link));
    output::kv("direct: ", output::id(&notice.direct_link));
    println!();
}
