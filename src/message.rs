//! Normalized chat message.
//!
//! This module provides [`Message`], the record every aggregation works on.
//! A message stores only its timestamp, author and cleaned body; the calendar
//! fields (date, month name, hour bucket, ...) are computed from the
//! timestamp on demand so they can never disagree with it.
//!
//! # Examples
//!
//! ```
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(23, 10, 0)
//!     .unwrap();
//! let msg = Message::new("Alice", "Hello!", ts);
//!
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.month_name(), "January");
//! assert_eq!(msg.day_name(), "Monday");
//! assert_eq!(msg.period(), "23-00");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::parsing::{ParsedEntry, clean_body};

/// Author assigned to lines without a human sender (group events, notices).
pub const NOTIFICATION_AUTHOR: &str = "group_notification";

/// English month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English day names, Monday first.
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A normalized chat message.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local send time as written in the export |
/// | `author` | `String` | Display name, or [`NOTIFICATION_AUTHOR`] |
/// | `body` | `String` | Cleaned text (NFKD, no bidi marks, trimmed) |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent. Exports carry no timezone.
    pub timestamp: NaiveDateTime,

    /// Display name of the author, or [`NOTIFICATION_AUTHOR`].
    pub author: String,

    /// Cleaned message text.
    pub body: String,
}

impl Message {
    /// Creates a message from already-clean parts.
    pub fn new(author: impl Into<String>, body: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
        }
    }

    /// Creates a system/notification message.
    pub fn notification(body: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self::new(NOTIFICATION_AUTHOR, body, timestamp)
    }

    /// Builds the final record from a matched line and its normalized timestamp.
    ///
    /// The body is cleaned; system entries keep the notification sentinel.
    pub fn from_entry(entry: ParsedEntry, timestamp: NaiveDateTime) -> Self {
        match entry {
            ParsedEntry::Authored { author, body, .. } => Self {
                timestamp,
                author: clean_body(&author),
                body: clean_body(&body),
            },
            ParsedEntry::System { body, .. } => Self::notification(clean_body(&body), timestamp),
        }
    }

    /// Returns the author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the cleaned body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns `true` for system/notification rows.
    pub fn is_notification(&self) -> bool {
        self.author == NOTIFICATION_AUTHOR
    }

    // =========================================================================
    // Calendar fields
    // =========================================================================

    pub fn only_date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Month number, 1 = January.
    pub fn month_num(&self) -> u32 {
        self.timestamp.month()
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.timestamp.month0() as usize]
    }

    /// Day of the month.
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    pub fn day_name(&self) -> &'static str {
        DAY_NAMES[self.weekday().num_days_from_monday() as usize]
    }

    /// One-hour bucket label, e.g. `"14-15"`; see [`hour_bucket`].
    pub fn period(&self) -> String {
        hour_bucket(self.hour())
    }
}

/// Labels the one-hour window starting at `hour`.
///
/// Both ends are zero padded and hour 23 wraps to `"23-00"`.
///
/// ```
/// use chatstat::message::hour_bucket;
///
/// assert_eq!(hour_bucket(0), "00-01");
/// assert_eq!(hour_bucket(9), "09-10");
/// assert_eq!(hour_bucket(23), "23-00");
/// ```
pub fn hour_bucket(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}
