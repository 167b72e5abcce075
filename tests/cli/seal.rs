//! Seal command tests.

use drivepost::core::bundle;

use crate::support::*;

fn sealed_hex(output: &std::process::Output) -> String {
    let doc: serde_json::Value = serde_json::from_str(&stdout(output)).expect("stdout is not JSON");
    doc["encrypted_bundle"]
        .as_str()
        .expect("missing encrypted_bundle")
        .to_string()
}

#[test]
fn test_seal_roundtrip() {
    let t = Test::new();
    t.write("sa.json", SERVICE_ACCOUNT_JSON);

    let output = t.seal("sa.json", Some(BOT_TOKEN), "2468");
    assert_success(&output);

    let opened = bundle::decrypt(&sealed_hex(&output), b"2468").unwrap();
    assert_eq!(opened.service_account_json(), SERVICE_ACCOUNT_JSON);
    assert_eq!(opened.bot_token(), BOT_TOKEN);
}

#[test]
fn test_sealed_bundle_rejects_other_pin() {
    let t = Test::new();
    t.write("sa.json", SERVICE_ACCOUNT_JSON);

    let output = t.seal("sa.json", Some(BOT_TOKEN), "2468");
    assert_success(&output);

    assert!(matches!(
        bundle::decrypt(&sealed_hex(&output), b"2469"),
        Err(drivepost::error::BundleError::AuthenticationFailed)
    ));
}

#[test]
fn test_seal_bot_token_from_env() {
    let t = Test::new();
    t.write("sa.json", SERVICE_ACCOUNT_JSON);

    let output = t
        .cmd()
        .env("DRIVEPOST_BOT_TOKEN", BOT_TOKEN)
        .args(["seal", "--credentials", "sa.json"])
        .write_stdin("1357\n")
        .output()
        .unwrap();
    assert_success(&output);

    let opened = bundle::decrypt(&sealed_hex(&output), b"1357").unwrap();
    assert_eq!(opened.bot_token(), BOT_TOKEN);
}

#[test]
fn test_seal_without_bot_token_warns() {
    let t = Test::new();
    t.write("sa.json", SERVICE_ACCOUNT_JSON);

    let output = t.seal("sa.json", None, "1357");
    assert_success(&output);
    assert_stderr_contains(&output, "no bot token");

    let opened = bundle::decrypt(&sealed_hex(&output), b"1357").unwrap();
    assert_eq!(opened.bot_token(), "");
}

#[test]
fn test_seal_rejects_invalid_credentials() {
    let t = Test::new();
    t.write("sa.json", r#"{"type": "authorized_user"}"#);

    let output = t.seal("sa.json", Some(BOT_TOKEN), "1357");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid service account credentials");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_seal_missing_credentials_file() {
    let t = Test::new();

    let output = t.seal("absent.json", None, "1357");
    assert_failure(&output);
    assert_stderr_contains(&output, "io error");
}

#[test]
fn test_seal_output_does_not_leak_secrets() {
    let t = Test::new();
    t.write("sa.json", SERVICE_ACCOUNT_JSON);

    let output = t.seal("sa.json", Some(BOT_TOKEN), "2468");
    assert_success(&output);
    let all = format!("{}{}", stdout(&output), stderr(&output));
    assert!(!all.contains(BOT_TOKEN));
    assert!(!all.contains("MIIplaceholder"));
    assert!(!all.contains("uploader@demo"));
}
