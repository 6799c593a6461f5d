//! End-to-end CLI tests for chatstat.
//!
//! These tests run the actual binary with various arguments and check the
//! output.
//!
//! # Test Categories
//!
//! - **Report**: text and JSON reports for the whole chat and one user
//! - **Export**: CSV, JSON, JSONL generation
//! - **Filters**: date and notification filtering
//! - **Error handling**: proper error messages and exit codes for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "\
[01/01/24, 09:00:00] Messages and calls are end-to-end encrypted. No one outside of this chat, not even WhatsApp, can read or listen to them.
[01/01/24, 09:01:00] Alice: Happy new year 🎉
[01/01/24, 09:02:00] Bob: Happy new year Alice, the best year
[02/01/24, 21:15:30] Alice: image omitted
[20/01/24, 10:00:00] Bob: check https://example.com/plan
and the second line
[21/01/24, 23:45:00] Alice added Carol
";

/// Creates a temporary directory with a transcript and a stopword list.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(dir.path().join("stop.txt"), "the\nand\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "shopping list\nmilk\n").unwrap();
    dir
}

fn chatstat_cmd() -> Command {
    let cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chatstat"));
    let mut cmd = Command::from_std(cmd);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().unwrap().to_string()
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn json_report(args: &[&str]) -> serde_json::Value {
    let output = chatstat_cmd().args(args).output().unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("stdout should be pure JSON")
}

// ============================================================================
// Report Tests
// ============================================================================

mod report {
    use super::*;

    #[test]
    fn test_text_report_overall() {
        let fixtures = setup_fixtures();

        chatstat_cmd()
            .arg(fixture(&fixtures, "chat.txt"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Top Statistics"))
            .stdout(predicate::str::contains("Messages:     6"))
            .stdout(predicate::str::contains("Most Busy Users"))
            .stdout(predicate::str::contains("Monthly Timeline"))
            .stdout(predicate::str::contains("January-2024"))
            .stdout(predicate::str::contains("🎉 (1)"));
    }

    #[test]
    fn test_text_report_single_user_has_no_ranking() {
        let fixtures = setup_fixtures();

        chatstat_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "--user", "Bob"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Selection: Bob"))
            .stdout(predicate::str::contains("Links shared: 1"))
            .stdout(predicate::str::contains("Most Busy Users").not());
    }

    #[test]
    fn test_json_report() {
        let fixtures = setup_fixtures();
        let report = json_report(&[fixture(&fixtures, "chat.txt").as_str(), "--json"]);

        assert_eq!(report["selection"], "Overall");
        assert_eq!(report["stats"]["messages"], 6);
        assert_eq!(report["stats"]["media"], 1);
        assert_eq!(report["busiest_users"]["top"][0]["label"], "Alice");
        assert_eq!(report["busiest_users"]["shares"][0]["percent"], 50.0);
    }

    #[test]
    fn test_json_report_for_user() {
        let fixtures = setup_fixtures();
        let report = json_report(&[fixture(&fixtures, "chat.txt").as_str(), "--json", "-u", "Alice"]);

        assert_eq!(report["stats"]["messages"], 2);
        assert!(report.get("busiest_users").is_none());
    }

    #[test]
    fn test_stopwords_and_top_words() {
        let fixtures = setup_fixtures();
        let report = json_report(&[
            fixture(&fixtures, "chat.txt").as_str(),
            "--json",
            "--stopwords",
            fixture(&fixtures, "stop.txt").as_str(),
            "--top-words",
            "2",
        ]);

        let words = report["common_words"].as_array().unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0]["label"], "year");
        assert_eq!(words[0]["count"], 3);
        assert!(words.iter().all(|w| w["label"] != "the"));
    }

    #[test]
    fn test_unknown_user_warns() {
        let fixtures = setup_fixtures();

        chatstat_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "--user", "Zed"])
            .assert()
            .success()
            .stderr(predicate::str::contains("no participant"))
            .stdout(predicate::str::contains("Messages:     0"));
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filters {
    use super::*;

    #[test]
    fn test_date_range() {
        let fixtures = setup_fixtures();
        let report = json_report(&[
            fixture(&fixtures, "chat.txt").as_str(),
            "--json",
            "--after",
            "2024-01-02",
            "--before",
            "2024-01-20",
        ]);
        assert_eq!(report["stats"]["messages"], 2);
    }

    #[test]
    fn test_drop_notifications() {
        let fixtures = setup_fixtures();
        let report = json_report(&[fixture(&fixtures, "chat.txt").as_str(), "--json", "--drop-notifications"]);
        assert_eq!(report["stats"]["messages"], 4);
    }

    #[test]
    fn test_invalid_date() {
        let fixtures = setup_fixtures();

        chatstat_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "--after", "01-01-2024"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Invalid date"));
    }
}

// ============================================================================
// Export Tests
// ============================================================================

mod export {
    use super::*;

    #[test]
    fn test_export_csv() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.csv");

        chatstat_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "-e", output.to_str().unwrap()])
            .assert()
            .success()
            .stdout(predicate::str::contains("Exported 6 messages"));

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("Timestamp;Author;Body"));
        assert!(content.contains("check https://example.com/plan and the second line"));
    }

    #[test]
    fn test_export_json_with_calendar_for_user() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "alice.json");

        chatstat_cmd()
            .args([
                fixture(&fixtures, "chat.txt").as_str(),
                "--user",
                "Alice",
                "--export",
                output.to_str().unwrap(),
                "--calendar",
            ])
            .assert()
            .success();

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["period"], "21-22");
        assert_eq!(records[1]["day_name"], "Tuesday");
    }

    #[test]
    fn test_export_format_overrides_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "messages.out");

        chatstat_cmd()
            .args([
                fixture(&fixtures, "chat.txt").as_str(),
                "--export",
                output.to_str().unwrap(),
                "--export-format",
                "ndjson",
            ])
            .assert()
            .success();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 6);
    }

    #[test]
    fn test_export_with_json_report_keeps_stdout_clean() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.jsonl");

        let report = json_report(&[
            fixture(&fixtures, "chat.txt").as_str(),
            "--json",
            "--export",
            output.to_str().unwrap(),
        ]);
        assert_eq!(report["stats"]["messages"], 6);
        assert!(output.exists());
    }

    #[test]
    fn test_unknown_export_extension() {
        let fixtures = setup_fixtures();
        let output = output_path(&fixtures, "out.xml");

        chatstat_cmd()
            .args([fixture(&fixtures, "chat.txt").as_str(), "--export", output.to_str().unwrap()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown file extension"));
    }
}

// ============================================================================
// Error Handling Tests
// ============================================================================

mod errors {
    use super::*;

    #[test]
    fn test_unrecognized_transcript() {
        let fixtures = setup_fixtures();

        chatstat_cmd()
            .arg(fixture(&fixtures, "notes.txt"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Unrecognized transcript format"))
            .stderr(predicate::str::contains("notes.txt"));
    }

    #[test]
    fn test_missing_file() {
        chatstat_cmd()
            .arg("/definitely/not/here.txt")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn test_missing_argument() {
        chatstat_cmd().assert().failure().stderr(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_help() {
        chatstat_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("EXAMPLES"))
            .stdout(predicate::str::contains("--stopwords"));
    }

    #[test]
    fn test_empty_file() {
        let fixtures = setup_fixtures();
        let empty = output_path(&fixtures, "empty.txt");
        fs::write(&empty, "").unwrap();

        chatstat_cmd()
            .arg(empty.to_str().unwrap())
            .assert()
            .success()
            .stdout(predicate::str::contains("Messages:     0"));
    }
}
