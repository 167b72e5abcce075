//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Environment variables that would leak host settings into a test run.
const HOST_VARS: &[&str] = &[
    "DRIVEPOST_CONFIG",
    "DRIVEPOST_BUNDLE_URL",
    "DRIVEPOST_CHAT_ID_URL",
    "DRIVEPOST_DEFAULT_FOLDER",
    "DRIVEPOST_BOT_TOKEN",
    "DRIVEPOST_LOG",
];

impl Test {
    /// Create a drivepost command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME / XDG_CONFIG_HOME set to the temporary home directory
    /// - Current directory set to the test working directory
    /// - Colors disabled and host DRIVEPOST_* variables removed
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("drivepost").expect("failed to find drivepost binary");
        cmd.env("HOME", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("NO_COLOR", "1");
        for var in HOST_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `drivepost delete <ref>`.
    pub fn delete(&self, file_ref: &str) -> Output {
        self.cmd()
            .args(["delete", file_ref])
            .output()
            .expect("failed to run drivepost delete")
    }

    /// Shortcut for `drivepost seal` with the PIN piped on stdin.
    pub fn seal(&self, credentials: &str, bot_token: Option<&str>, pin: &str) -> Output {
        let mut cmd = self.cmd();
        cmd.args(["seal", "--credentials", credentials]);
        if let Some(token) = bot_token {
            cmd.args(["--bot-token", token]);
        }
        cmd.write_stdin(format!("{}\n", pin))
            .output()
            .expect("failed to run drivepost seal")
    }
}
