//! Upload command tests that stop before any Drive call.

use crate::support::*;

#[test]
fn test_missing_file() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["upload", "--file", "does-not-exist.bin"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found: does-not-exist.bin");
    assert_no_network_step(&output);
}

#[test]
fn test_directory_is_not_a_file() {
    let t = Test::new();
    std::fs::create_dir(t.dir.path().join("folder")).unwrap();

    let output = t.cmd().args(["upload", "-f", "folder"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "file not found");
}

#[test]
fn test_bad_folder_reference() {
    let t = Test::new();
    t.write("notes.txt", "hello");

    let output = t
        .cmd()
        .args(["upload", "--file", "notes.txt", "--folder", "not-a-folder"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unrecognized");
    assert_stderr_contains(&output, "not-a-folder");
    assert_no_network_step(&output);
}

#[test]
fn test_folder_link_accepted_then_fetch_fails() {
    let t = Test::new();
    t.write("notes.txt", "hello");

    let folder = format!("https://drive.google.com/drive/folders/{}", FOLDER_ID);
    let output = t
        .cmd()
        .args([
            "--bundle-url",
            DEAD_URL,
            "upload",
            "--file",
            "notes.txt",
            "--folder",
            &folder,
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stdout_contains(&output, "fetching configuration... failed");
}

#[test]
fn test_default_folder_announced() {
    let t = Test::new();
    t.write("notes.txt", "hello");

    let output = t
        .cmd()
        .args([
            "--bundle-url",
            DEAD_URL,
            "--default-folder",
            FOLDER_ID,
            "upload",
            "--file",
            "notes.txt",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stdout_contains(&output, &format!("using default {}", FOLDER_ID));
}
