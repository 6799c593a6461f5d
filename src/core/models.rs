//! Core data models: the parsed transcript and output configuration.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::filter::Selection;
use crate::parsing::Grammar;

/// Counters collected while parsing a transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Logical lines produced by the segmenter
    pub logical_lines: usize,
    /// Logical lines whose timestamp could not be parsed (excluded)
    pub dropped_timestamps: usize,
    /// System/notification rows among the kept messages
    pub system_lines: usize,
    /// System/notification rows dropped by configuration
    pub skipped_notifications: usize,
    /// Physical lines dropped because they preceded the first message
    pub discarded_lines: usize,
    /// Logical lines matched by the bracketed grammar
    pub bracketed: usize,
    /// Logical lines matched by the dashed grammar
    pub dashed: usize,
}

impl ParseReport {
    /// Number of logical lines recognized by `grammar`.
    pub fn grammar_hits(&self, grammar: Grammar) -> usize {
        match grammar {
            Grammar::Bracketed => self.bracketed,
            Grammar::Dashed => self.dashed,
        }
    }

    pub(crate) fn record_hit(&mut self, grammar: Grammar) {
        match grammar {
            Grammar::Bracketed => self.bracketed += 1,
            Grammar::Dashed => self.dashed += 1,
        }
    }

    /// The grammar that recognized most lines, `None` when nothing matched.
    pub fn dominant_grammar(&self) -> Option<Grammar> {
        match (self.bracketed, self.dashed) {
            (0, 0) => None,
            (b, d) if b >= d => Some(Grammar::Bracketed),
            _ => Some(Grammar::Dashed),
        }
    }
}

/// Earliest and latest message date of a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DateSpan {
    /// Computes the span of the given messages in one pass, `None` when empty.
    pub fn of<'a>(messages: impl IntoIterator<Item = &'a Message>) -> Option<Self> {
        messages
            .into_iter()
            .map(Message::only_date)
            .fold(None, |span, date| match span {
                None => Some(Self { first: date, last: date }),
                Some(Self { first, last }) => Some(Self {
                    first: first.min(date),
                    last: last.max(date),
                }),
            })
    }

    /// Whole days between the first and last date.
    pub fn days(&self) -> i64 {
        (self.last - self.first).num_days()
    }

    /// Returns `true` when the span is longer than a week.
    ///
    /// Timelines and the heatmap are only worth showing past this point.
    pub fn exceeds_week(&self) -> bool {
        self.days() > 7
    }
}

/// The normalized record set produced by one parsing run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Messages in transcript order; every one has a timestamp.
    pub messages: Vec<Message>,
    /// Parsing counters.
    pub report: ParseReport,
}

impl Transcript {
    pub fn new(messages: Vec<Message>, report: ParseReport) -> Self {
        Self { messages, report }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Earliest and latest `only_date`.
    pub fn date_span(&self) -> Option<DateSpan> {
        DateSpan::of(&self.messages)
    }

    /// Sorted distinct authors, notification sentinel excluded.
    pub fn participants(&self) -> Vec<String> {
        participants(&self.messages)
    }

    /// `Overall` followed by one selection per participant.
    pub fn selections(&self) -> Vec<Selection> {
        std::iter::once(Selection::Overall)
            .chain(self.participants().into_iter().map(Selection::Author))
            .collect()
    }
}

/// Sorted distinct authors of `messages`, notification sentinel excluded.
pub fn participants(messages: &[Message]) -> Vec<String> {
    messages
        .iter()
        .filter(|m| !m.is_notification())
        .map(|m| m.author.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Configuration for exporting the record set.
/// Controls which columns and rows are written.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include the derived calendar columns
    pub include_calendar: bool,
    /// Leave system/notification rows out of the export
    pub skip_notifications: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exports every column.
    pub fn all() -> Self {
        Self::new().with_calendar()
    }

    #[must_use]
    pub fn with_calendar(mut self) -> Self {
        self.include_calendar = true;
        self
    }

    #[must_use]
    pub fn without_notifications(mut self) -> Self {
        self.skip_notifications = true;
        self
    }

    /// Returns `true` if the message should be written.
    pub fn includes(&self, msg: &Message) -> bool {
        !(self.skip_notifications && msg.is_notification())
    }
}
