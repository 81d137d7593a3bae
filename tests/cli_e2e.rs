use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn zapscan(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("zapscan").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("ZAPSCAN_DATA")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn save(data_dir: &Path, payload: &str, hint: Option<&str>) {
    let mut cmd = zapscan(data_dir);
    cmd.arg("scan").arg(payload).arg("--save");
    if let Some(hint) = hint {
        cmd.arg("--hint").arg(hint);
    }
    cmd.assert().success();
}

#[test]
fn empty_history_says_so() {
    let dir = tempfile::tempdir().unwrap();
    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history found"));
}

#[test]
fn no_subcommand_lists_history() {
    let dir = tempfile::tempdir().unwrap();
    zapscan(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No history found"));
}

#[test]
fn saved_scan_shows_up_in_history() {
    let dir = tempfile::tempdir().unwrap();
    zapscan(dir.path())
        .args(["scan", "https://example.com", "--hint", "url", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned url: https://example.com"))
        .stdout(predicate::str::contains("Saved url scan to history"));

    assert!(dir.path().join("QRScanHistory.json").exists());

    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [web] https://example.com"));
}

#[test]
fn hintless_scan_is_text() {
    let dir = tempfile::tempdir().unwrap();
    zapscan(dir.path())
        .args(["scan", "https://example.com", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scanned text: https://example.com"));
}

#[test]
fn scan_accepts_raw_event_json() {
    let dir = tempfile::tempdir().unwrap();
    zapscan(dir.path())
        .args([
            "scan",
            "--event",
            r#"{"data":"https://rust-lang.org","extra":{"type":"url"}}"#,
            "--view",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan Result"))
        .stdout(predicate::str::contains("https://rust-lang.org"));

    // view only, nothing saved
    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history found"));
}

#[test]
fn scan_without_answer_is_dismissed() {
    let dir = tempfile::tempdir().unwrap();
    zapscan(dir.path())
        .args(["scan", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan dismissed"));

    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history found"));
}

#[test]
fn filter_narrows_history() {
    let dir = tempfile::tempdir().unwrap();
    save(dir.path(), "plain note", None);
    save(dir.path(), "https://example.com", Some("url"));

    zapscan(dir.path())
        .args(["history", "--filter", "url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com"))
        .stdout(predicate::str::contains("plain note").not());

    zapscan(dir.path())
        .args(["ls", "-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plain note"))
        .stdout(predicate::str::contains("https://example.com").not());
}

#[test]
fn newest_scan_is_index_one() {
    let dir = tempfile::tempdir().unwrap();
    save(dir.path(), "first", None);
    save(dir.path(), "second", None);

    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [txt] second"))
        .stdout(predicate::str::contains("2. [txt] first"));
}

#[test]
fn view_shows_text_result() {
    let dir = tempfile::tempdir().unwrap();
    save(dir.path(), "hello world", None);

    zapscan(dir.path())
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found Text"))
        .stdout(predicate::str::contains("hello world"));
}

#[test]
fn share_prints_payload_json() {
    let dir = tempfile::tempdir().unwrap();
    save(dir.path(), "https://example.com", Some("url"));

    zapscan(dir.path())
        .args(["share", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""message": "https://example.com""#))
        .stdout(predicate::str::contains(r#""url": "https://example.com""#));
}

#[test]
fn delete_with_yes_removes_record() {
    let dir = tempfile::tempdir().unwrap();
    save(dir.path(), "doomed", None);

    zapscan(dir.path())
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted (1): doomed"));

    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history found"));
}

#[test]
fn delete_without_confirmation_keeps_record() {
    let dir = tempfile::tempdir().unwrap();
    save(dir.path(), "kept", None);

    zapscan(dir.path())
        .args(["rm", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled"));

    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("kept"));
}

#[test]
fn piped_answer_is_not_read_as_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    save(dir.path(), "kept", None);

    zapscan(dir.path())
        .args(["delete", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled"));

    zapscan(dir.path())
        .args(["scan", "hello"])
        .write_stdin("s\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan dismissed"));

    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("kept"))
        .stdout(predicate::str::contains("hello").not());
}

#[test]
fn short_swipe_keeps_record() {
    let dir = tempfile::tempdir().unwrap();
    save(dir.path(), "kept", None);

    zapscan(dir.path())
        .args(["delete", "1", "--swipe", "-100", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("did not reach the delete threshold"));

    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("kept"));
}

#[test]
fn unknown_index_fails() {
    let dir = tempfile::tempdir().unwrap();
    zapscan(dir.path())
        .args(["view", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 5 not found in history"));
}

#[test]
fn malformed_history_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("QRScanHistory.json"), "{not json").unwrap();

    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history found"));

    // the next save replaces the unreadable value
    save(dir.path(), "fresh", None);
    zapscan(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [txt] fresh"));
}

#[test]
fn config_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    zapscan(dir.path())
        .args(["config", "accent", "rose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("accent set to rose"));

    zapscan(dir.path())
        .args(["config", "accent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rose"));

    zapscan(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("color-scheme = auto"))
        .stdout(predicate::str::contains("classify = hint"));
}

#[test]
fn invalid_config_value_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    zapscan(dir.path())
        .args(["config", "classify", "paranoid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid"));
}
