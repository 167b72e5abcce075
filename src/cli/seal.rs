//! Seal command - produce an encrypted bundle for publishing.

use std::path::Path;

use serde_json::json;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::cli::session;
use crate::core::bundle::{self, DecryptedBundle};
use crate::core::drive::ServiceAccount;
use crate::error::Result;

/// Encrypt service-account credentials and a bot token under a new PIN.
///
/// Prints the bundle document to stdout so it can be redirected to a file.
pub fn execute(credentials: &Path, bot_token: Option<String>) -> Result<()> {
    let service_account_json = Zeroizing::new(std::fs::read_to_string(credentials)?);
    let account = ServiceAccount::from_json(&service_account_json)?;
    info!(account = %account.client_email(), "sealing credentials");

    let bot_token = Zeroizing::new(bot_token.unwrap_or_default());
    if bot_token.is_empty() {
        warn!("no bot token given, notifications will be skipped");
    }

    let bundle = DecryptedBundle::new(service_account_json.as_str(), bot_token.as_str());

    let pin = session::read_new_pin()?;
    if pin.is_empty() {
        warn!("sealing with an empty PIN");
    }
    let encrypted_bundle = bundle::seal(&bundle, pin.as_bytes())?;

    let document = json!({ "encrypted_bundle": encrypted_bundle });
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
