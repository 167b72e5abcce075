//! Command-line interface.

pub mod completions;
pub mod delete;
pub mod output;
pub mod seal;
pub mod session;
pub mod upload;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::{Overrides, Settings};
use crate::error::Result;

/// drivepost - Upload to Google Drive with PIN-unlocked credentials.
#[derive(Parser)]
#[command(
    name = "drivepost",
    about = "Upload and delete Google Drive files using a PIN-protected remote credential bundle",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub globals: Globals,
}

/// Settings sources shared by every command.
#[derive(Args, Debug, Clone)]
pub struct Globals {
    /// Path to a config file (default: <config dir>/drivepost/config.toml)
    #[arg(long, global = true, env = "DRIVEPOST_CONFIG")]
    pub config: Option<PathBuf>,

    /// URL of the encrypted bundle document
    #[arg(long, global = true, env = "DRIVEPOST_BUNDLE_URL")]
    pub bundle_url: Option<String>,

    /// URL of the Telegram chat ID
    #[arg(long, global = true, env = "DRIVEPOST_CHAT_ID_URL")]
    pub chat_id_url: Option<String>,

    /// Folder ID or link used when upload is not given --folder
    #[arg(long, global = true, env = "DRIVEPOST_DEFAULT_FOLDER")]
    pub default_folder: Option<String>,
}

impl Globals {
    /// Resolve settings from file, environment, and flags.
    pub fn settings(&self) -> Result<Settings> {
        Settings::resolve(
            self.config.as_deref(),
            Overrides {
                bundle_url: self.bundle_url.clone(),
                chat_id_url: self.chat_id_url.clone(),
                default_folder: self.default_folder.clone(),
            },
        )
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Upload a file and send a Telegram notification
    Upload {
        /// Path to the file to upload
        #[arg(short, long)]
        file: PathBuf,
        /// Target folder ID or link (uses the default folder if omitted)
        #[arg(long)]
        folder: Option<String>,
    },

    /// Delete a file by ID or Drive link
    Delete {
        /// File ID or link (e.g. https://drive.google.com/file/d/<id>/view)
        #[arg(value_name = "ID_OR_LINK")]
        file_ref: String,
    },

    /// Encrypt service-account credentials into a publishable bundle
    Seal {
        /// Service-account JSON key file
        #[arg(long)]
        credentials: PathBuf,
        /// Telegram bot token to include in the bundle
        #[arg(long, env = "DRIVEPOST_BOT_TOKEN", hide_env_values = true)]
        bot_token: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, globals: &Globals) -> Result<()> {
    use Command::*;

    match command {
        Upload { file, folder } => upload::execute(globals, &file, folder.as_deref()),
        Delete { file_ref } => delete::execute(globals, &file_ref),
        Seal {
            credentials,
            bot_token,
        } => seal::execute(&credentials, bot_token),
        Completions { shell } => completions::execute(shell),
    }
}
