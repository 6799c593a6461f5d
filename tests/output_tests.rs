//! Tests for output writers (JSON, JSONL, CSV)

use chatstat::Message;
use chatstat::core::OutputConfig;
use chatstat::core::output::{to_csv, write_csv, write_json, write_jsonl};
use chatstat::format::{OutputFormat, to_format_string};
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

fn sample_messages() -> Vec<Message> {
    let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    vec![
        Message::notification("Alice created group \"Trip\"", day.and_hms_opt(10, 29, 0).unwrap()),
        Message::new("Alice", "Hello!", day.and_hms_opt(10, 30, 0).unwrap()),
        Message::new("Bob", "Hi; \"quoted\" text", day.and_hms_opt(10, 31, 0).unwrap()),
        Message::new("Alice", "Late one", day.and_hms_opt(23, 5, 0).unwrap()),
    ]
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&sample_messages(), &path, &OutputConfig::new()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let records = parsed.as_array().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[1]["author"], "Alice");
        assert_eq!(records[1]["body"], "Hello!");
        assert_eq!(records[1]["timestamp"], "2024-01-15 10:30:00");
        assert!(records[1].get("period").is_none());
    }

    #[test]
    fn test_write_json_with_calendar() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");

        write_json(&sample_messages(), &path, &OutputConfig::all()).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let late = &parsed[3];
        assert_eq!(late["only_date"], "2024-01-15");
        assert_eq!(late["year"], 2024);
        assert_eq!(late["month_num"], 1);
        assert_eq!(late["month"], "January");
        assert_eq!(late["day"], 15);
        assert_eq!(late["day_name"], "Monday");
        assert_eq!(late["hour"], 23);
        assert_eq!(late["minute"], 5);
        assert_eq!(late["period"], "23-00");
    }

    #[test]
    fn test_write_json_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");

        write_json(&[], &path, &OutputConfig::new()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_write_jsonl_one_object_per_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.jsonl");

        write_jsonl(&sample_messages(), &path, &OutputConfig::new().without_notifications()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.is_object());
        }
        let bob: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(bob["body"], "Hi; \"quoted\" text");
    }
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(&sample_messages(), &path, &OutputConfig::new()).unwrap();

        let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["Timestamp", "Author", "Body"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][1], "group_notification");
        assert_eq!(&rows[2][2], "Hi; \"quoted\" text");
    }

    #[test]
    fn test_csv_calendar_columns() {
        let csv = to_csv(&sample_messages(), &OutputConfig::all()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "Timestamp;Author;Body;Date;Year;MonthNum;Month;Day;DayName;Hour;Minute;Period"
        );
        assert!(csv.lines().last().unwrap().ends_with(";Monday;23;5;23-00"));
    }
}

// ============================================================================
// Format dispatch
// ============================================================================

#[test]
fn test_every_format_keeps_transcript_order() {
    let messages = sample_messages();
    for format in OutputFormat::all() {
        let out = to_format_string(&messages, *format, &OutputConfig::new()).unwrap();
        let hello = out.find("Hello!").unwrap();
        let late = out.find("Late one").unwrap();
        assert!(hello < late, "{format} reordered messages");
    }
}
