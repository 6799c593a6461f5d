//! Output format writers.
//!
//! This module provides writers for the normalized record set:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one message per line - requires `json-output` feature
//!
//! Every writer honors [`OutputConfig`](crate::core::models::OutputConfig):
//! `with_calendar()` adds the derived calendar columns and
//! `without_notifications()` leaves system rows out.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::output::{write_csv, write_json, to_jsonl};
//! use chatstat::core::models::OutputConfig;
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new("Alice", "Hello!", ts),
//!     Message::new("Bob", "Hi there!", ts),
//! ];
//!
//! let config = OutputConfig::new().with_calendar();
//!
//! write_csv(&messages, "output.csv", &config)?;
//! write_json(&messages, "output.json", &config)?;
//! let jsonl = to_jsonl(&messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(feature = "json-output")]
use serde::Serialize;

#[cfg(feature = "json-output")]
use crate::Message;
#[cfg(feature = "json-output")]
use crate::core::models::OutputConfig;

/// Timestamp layout used by every export.
#[cfg(any(feature = "csv-output", feature = "json-output"))]
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One exported message, shared by the JSON and JSONL writers.
#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct ExportRecord<'a> {
    timestamp: String,
    author: &'a str,
    body: &'a str,
    #[serde(flatten)]
    calendar: Option<CalendarRecord>,
}

/// Derived calendar columns.
#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct CalendarRecord {
    only_date: String,
    year: i32,
    month_num: u32,
    month: &'static str,
    day: u32,
    day_name: &'static str,
    hour: u32,
    minute: u32,
    period: String,
}

#[cfg(feature = "json-output")]
impl<'a> ExportRecord<'a> {
    fn new(msg: &'a Message, config: &OutputConfig) -> Self {
        Self {
            timestamp: msg.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            author: &msg.author,
            body: &msg.body,
            calendar: config.include_calendar.then(|| CalendarRecord {
                only_date: msg.only_date().to_string(),
                year: msg.year(),
                month_num: msg.month_num(),
                month: msg.month_name(),
                day: msg.day(),
                day_name: msg.day_name(),
                hour: msg.hour(),
                minute: msg.minute(),
                period: msg.period(),
            }),
        }
    }
}

/// Records selected by `config`, in transcript order.
#[cfg(feature = "json-output")]
fn export_records<'a>(
    messages: &'a [Message],
    config: &'a OutputConfig,
) -> impl Iterator<Item = ExportRecord<'a>> + 'a {
    messages
        .iter()
        .filter(|m| config.includes(m))
        .map(|m| ExportRecord::new(m, config))
}
