//! Delete command.

use tracing::info;

use crate::cli::{output, session, Globals};
use crate::core::reference;
use crate::error::Result;

/// Delete the file named by an ID or Drive link.
///
/// The reference is normalized before anything touches the network.
pub fn execute(globals: &Globals, file_ref: &str) -> Result<()> {
    let file_id = reference::extract(file_ref)?;
    if file_id != file_ref {
        output::dimmed(&format!("extracted file id {}", file_id));
    }

    let settings = globals.settings()?;
    let session = session::open(&settings)?;

    info!(id = %file_id, "deleting");
    output::progress(&format!("deleting {}", output::id(&file_id)));
    let deleted = session.drive.delete(&file_id);
    output::progress_done(deleted.is_ok());
    deleted?;

    output::success(&format!("deleted {}", output::id(&file_id)));
    Ok(())
}
