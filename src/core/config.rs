//! Settings management.
//!
//! Settings are layered: compiled defaults, then an optional
//! `config.toml` under the platform config directory (or an explicit path),
//! then environment variables and command-line flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::reference;
use crate::error::{ConfigError, Result};

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// URL of the JSON document holding the encrypted bundle
    pub bundle_url: String,
    /// URL of the plaintext Telegram chat ID
    pub chat_id_url: String,
    /// Drive folder used when `upload` is not given one
    pub default_folder: String,
    /// Timeout for remote configuration requests, in seconds
    pub http_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bundle_url: constants::DEFAULT_BUNDLE_URL.to_string(),
            chat_id_url: constants::DEFAULT_CHAT_ID_URL.to_string(),
            default_folder: constants::DEFAULT_FOLDER_ID.to_string(),
            http_timeout_secs: constants::DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Values from flags or environment that take precedence over the file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub bundle_url: Option<String>,
    pub chat_id_url: Option<String>,
    pub default_folder: Option<String>,
}

impl Settings {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load, override, and validate settings.
    ///
    /// An explicit `path` must exist. The default path is optional.
    pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let settings = match path {
            Some(p) => Self::load(p)?,
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::load(&p)?,
                _ => Self::default(),
            },
        };

        let mut settings = settings.apply(overrides);
        settings.normalize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file. Missing keys fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;

        let settings: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        Ok(settings)
    }

    /// Layer overrides on top of these settings.
    pub fn apply(self, overrides: Overrides) -> Self {
        Self {
            bundle_url: overrides.bundle_url.unwrap_or(self.bundle_url),
            chat_id_url: overrides.chat_id_url.unwrap_or(self.chat_id_url),
            default_folder: overrides.default_folder.unwrap_or(self.default_folder),
            http_timeout_secs: self.http_timeout_secs,
        }
    }

    /// Reduce a default folder given as a link to its identifier.
    fn normalize(&mut self) -> Result<()> {
        let folder = reference::extract(self.default_folder.trim()).map_err(|e| {
            ConfigError::InvalidValue {
                field: "default_folder",
                reason: e.to_string(),
            }
        })?;
        self.default_folder = folder;
        Ok(())
    }

    /// Validate URLs, timeout, and folder.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        for (field, url) in [
            ("bundle_url", &self.bundle_url),
            ("chat_id_url", &self.chat_id_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected an http(s) URL, got '{}'", url),
                }
                .into());
            }
        }

        if self.http_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http_timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if !reference::is_canonical(&self.default_folder) {
            return Err(ConfigError::InvalidValue {
                field: "default_folder",
                reason: format!("not a drive folder id: '{}'", self.default_folder),
            }
            .into());
        }

        Ok(())
    }
}
