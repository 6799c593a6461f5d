//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::TIMESTAMP_FORMAT;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

const BASE_COLUMNS: &[&str] = &["Timestamp", "Author", "Body"];
const CALENDAR_COLUMNS: &[&str] = &[
    "Date", "Year", "MonthNum", "Month", "Day", "DayName", "Hour", "Minute", "Period",
];

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Body`, followed by the calendar columns
///   when [`OutputConfig::include_calendar`] is set
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(messages, file, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], returned in memory.
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(messages: &[Message], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;
    for msg in messages.iter().filter(|m| config.includes(m)) {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = BASE_COLUMNS.to_vec();
    if config.include_calendar {
        header.extend_from_slice(CALENDAR_COLUMNS);
    }
    header
}

/// Build CSV record for a single message.
fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let mut record = vec![
        msg.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        msg.author.clone(),
        msg.body.clone(),
    ];

    if config.include_calendar {
        record.extend([
            msg.only_date().to_string(),
            msg.year().to_string(),
            msg.month_num().to_string(),
            msg.month_name().to_string(),
            msg.day().to_string(),
            msg.day_name().to_string(),
            msg.hour().to_string(),
            msg.minute().to_string(),
            msg.period(),
        ]);
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn messages() -> Vec<Message> {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        vec![
            Message::notification("Alice added Bob", ts),
            Message::new("Alice", "Hello", ts),
            Message::new("Bob", "Hi; there", ts),
        ]
    }

    #[test]
    fn test_write_csv_basic() {
        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&messages(), temp_file.path(), &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.starts_with("Timestamp;Author;Body\n"));
        assert!(content.contains("2024-06-15 23:30:00;Alice;Hello"));
        assert!(content.contains("\"Hi; there\""));
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn test_csv_with_calendar() {
        let csv = to_csv(&messages(), &OutputConfig::new().with_calendar()).unwrap();
        assert!(csv.starts_with("Timestamp;Author;Body;Date;Year;MonthNum;Month;Day;DayName;Hour;Minute;Period"));
        assert!(csv.contains("Alice;Hello;2024-06-15;2024;6;June;15;Saturday;23;30;23-00"));
    }

    #[test]
    fn test_csv_without_notifications() {
        let csv = to_csv(&messages(), &OutputConfig::new().without_notifications()).unwrap();
        assert!(!csv.contains("group_notification"));
        assert_eq!(csv.lines().count(), 3);
    }
}
