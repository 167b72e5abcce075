//! Startup sequence shared by the Drive commands.
//!
//! Fetch the remote bundle, unlock it with the operator's PIN, and open an
//! authenticated Drive session. Any failure aborts the command; no partial
//! credentials are used.

use std::io::{self, BufRead, IsTerminal, Read};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::bundle::{self, DecryptedBundle};
use crate::core::config::Settings;
use crate::core::drive::{Drive, ServiceAccount};
use crate::core::remote;
use crate::error::Result;

/// Upper bound on a PIN read from piped stdin, newline included.
const MAX_PIN_LINE: usize = 1024;

/// Unlocked secrets plus an authenticated Drive client.
pub struct Session {
    pub drive: Drive,
    pub bundle: DecryptedBundle,
    pub chat_id: String,
}

/// Run the full startup sequence.
pub fn open(settings: &Settings) -> Result<Session> {
    output::progress("fetching configuration");
    let remote = remote::fetch(settings);
    output::progress_done(remote.is_ok());
    let remote = remote?;

    let bundle = {
        let pin = read_pin("Enter PIN")?;
        bundle::decrypt(&remote.encrypted_bundle_hex, pin.as_bytes())?
    };
    output::success("bundle decrypted");

    output::progress("authenticating with google drive");
    let drive = ServiceAccount::from_json(bundle.service_account_json())
        .map_err(crate::error::Error::from)
        .and_then(|account| Drive::connect(&account));
    output::progress_done(drive.is_ok());
    let drive = drive?;

    let email = drive.whoami()?;
    output::success(&format!("authenticated as {}", output::id(&email)));
    debug!(email = %email, "drive identity verified");

    Ok(Session {
        drive,
        bundle,
        chat_id: remote.chat_id,
    })
}

/// Read a PIN without echo, or one line from stdin when it is piped.
pub fn read_pin(prompt: &str) -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        return read_piped_line();
    }

    let pin = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(Zeroizing::new(pin))
}

/// Like [`read_pin`], but asks twice when interactive.
pub fn read_new_pin() -> Result<Zeroizing<String>> {
    if !io::stdin().is_terminal() {
        return read_piped_line();
    }

    let pin = Password::new()
        .with_prompt("New PIN")
        .with_confirmation("Confirm PIN", "PINs do not match")
        .allow_empty_password(true)
        .interact()?;
    Ok(Zeroizing::new(pin))
}

fn read_piped_line() -> Result<Zeroizing<String>> {
    read_line_from(io::stdin().lock())
}

/// Read one line into a buffer that is never reallocated.
///
/// Input past [`MAX_PIN_LINE`] bytes is left unread.
fn read_line_from(reader: impl BufRead) -> Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::with_capacity(MAX_PIN_LINE));
    reader.take(MAX_PIN_LINE as u64).read_line(&mut line)?;
    let len = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(len);
    Ok(line)
}
