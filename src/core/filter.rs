//! Filter messages by participant, date range and notification text.
//!
//! This module provides [`Selection`] for picking a participant,
//! [`FilterConfig`] for defining filter criteria and [`apply_filters`] for
//! filtering message collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Selection | [`with_selection`](FilterConfig::with_selection) | `Overall` or one author |
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Notifications | [`without_notifications`](FilterConfig::without_notifications) | Drop group events |
//!
//! # Examples
//!
//! ```
//! use chatstat::core::filter::{FilterConfig, apply_filters};
//! use chatstat::Message;
//! use chrono::NaiveDate;
//!
//! # fn main() -> chatstat::Result<()> {
//! let at = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let messages = vec![
//!     Message::new("Alice", "Old", at(1)),
//!     Message::new("Alice", "New", at(20)),
//!     Message::new("Bob", "New too", at(20)),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_selection("Alice")
//!     .with_date_from("2024-01-15")?;
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Author matching is exact after the same cleanup bodies get
//! - Date bounds are inclusive whole days
//! - Multiple filters are combined with AND logic

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::{ChatstatError, Result};
use crate::parsing::clean_body;

/// Which messages an aggregation looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Selection {
    /// Every message in the transcript.
    #[default]
    Overall,
    /// Messages of exactly one author.
    Author(String),
}

impl Selection {
    /// Selects one author. The name goes through the same cleanup as parsed
    /// authors, so names typed with compatibility characters still match.
    pub fn author(name: impl AsRef<str>) -> Self {
        Selection::Author(clean_body(name.as_ref()))
    }

    /// Returns `true` if `msg` belongs to this selection.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            Selection::Overall => true,
            Selection::Author(name) => msg.author == *name,
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    /// Display label: `"Overall"` or the author name.
    pub fn label(&self) -> &str {
        match self {
            Selection::Overall => "Overall",
            Selection::Author(name) => name,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Selection {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("overall") {
            Ok(Selection::Overall)
        } else {
            Ok(Selection::author(s))
        }
    }
}

impl From<&str> for Selection {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(selection) => selection,
            Err(never) => match never {},
        }
    }
}

/// Lowercase phrases WhatsApp writes for group events.
const NOTIFICATION_PHRASES: &[&str] = &[
    "messages and calls are end-to-end encrypted",
    "created group",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "deleted this group's icon",
    "changed their phone number",
    "joined using this group's invite link",
    "security code changed",
    "you're now an admin",
    "is now an admin",
    "turned on disappearing messages",
    "turned off disappearing messages",
    "this message was deleted",
    "you deleted this message",
    "deleted this message",
];

/// Returns `true` if `body` reads like a group event rather than chat text.
///
/// `added`/`removed` need a word on both sides and `left` must end the text.
pub fn is_notification_text(body: &str) -> bool {
    let lower = body.trim().to_lowercase();
    NOTIFICATION_PHRASES.iter().any(|p| lower.contains(p))
        || lower.contains(" added ")
        || lower.contains(" removed ")
        || lower.ends_with(" left")
}

/// Configuration for filtering messages.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatstat::core::filter::FilterConfig;
///
/// # fn main() -> chatstat::Result<()> {
/// let by_author = FilterConfig::new().with_selection("Alice");
///
/// let by_date = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
///
/// let quiet = FilterConfig::new().without_notifications();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Participant selection.
    pub selection: Selection,

    /// Include only messages on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub before: Option<NaiveDate>,

    /// Drop notification rows and group-event text.
    pub drop_notifications: bool,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the participant selection.
    #[must_use]
    pub fn with_selection(mut self, selection: impl Into<Selection>) -> Self {
        self.selection = selection.into();
        self
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Drops notification rows and authored group-event text.
    #[must_use]
    pub fn without_notifications(mut self) -> Self {
        self.drop_notifications = true;
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        !self.selection.is_overall() || self.has_date_filter() || self.drop_notifications
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        let date = msg.only_date();
        self.selection.matches(msg)
            && self.after.is_none_or(|after| date >= after)
            && self.before.is_none_or(|before| date <= before)
            && !(self.drop_notifications && (msg.is_notification() || is_notification_text(&msg.body)))
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .map_err(|_| ChatstatError::invalid_date(date_str))
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns a new vector containing only messages that match all active
/// filters, in their original order.
///
/// ```
/// use chatstat::core::filter::{FilterConfig, apply_filters};
/// use chatstat::Message;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let messages = vec![
///     Message::notification("Alice added Bob", ts),
///     Message::new("Alice", "Hello", ts),
/// ];
///
/// let filtered = apply_filters(messages, &FilterConfig::new().without_notifications());
/// assert_eq!(filtered.len(), 1);
/// ```
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }
    messages.into_iter().filter(|msg| config.matches(msg)).collect()
}
