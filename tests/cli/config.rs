//! Settings resolution through the CLI.

use crate::support::*;

#[test]
fn test_explicit_config_must_exist() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--config", "absent.toml", "delete", FILE_ID])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read config file");
    assert_no_network_step(&output);
}

#[test]
fn test_config_file_urls_are_used() {
    let t = Test::new();
    t.write(
        "drivepost.toml",
        &format!("bundle_url = \"{}\"\nhttp_timeout_secs = 2\n", DEAD_URL),
    );

    let output = t
        .cmd()
        .args(["--config", "drivepost.toml", "delete", FILE_ID])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "127.0.0.1:9");
}

// XDG_CONFIG_HOME only steers dirs::config_dir on Linux.
#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location() {
    let t = Test::new();
    let dir = t.home.path().join(".config").join("drivepost");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "bundle_url = \"ftp://nope\"\n").unwrap();

    let output = t.delete(FILE_ID);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid value for bundle_url");
    assert_no_network_step(&output);
}

#[test]
fn test_flag_overrides_config_file() {
    let t = Test::new();
    t.write("drivepost.toml", "bundle_url = \"ftp://nope\"\n");

    let output = t
        .cmd()
        .args([
            "--config",
            "drivepost.toml",
            "--bundle-url",
            DEAD_URL,
            "delete",
            FILE_ID,
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "127.0.0.1:9");
}

#[test]
fn test_malformed_config() {
    let t = Test::new();
    t.write("drivepost.toml", "bundle_url = \n");

    let output = t
        .cmd()
        .args(["--config", "drivepost.toml", "delete", FILE_ID])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}
