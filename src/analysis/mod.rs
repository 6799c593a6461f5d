//! Aggregations over a parsed transcript.
//!
//! An [`Analyzer`] is built once with an [`AnalysisConfig`] and reused for
//! every aggregation. Each operation takes a [`Selection`] (`Overall` or one
//! author) and the message slice, and only reads it.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`stats`](Analyzer::stats) | [`Stats`] |
//! | [`monthly_timeline`](Analyzer::monthly_timeline) | `Vec<`[`MonthlyCount`]`>` |
//! | [`daily_timeline`](Analyzer::daily_timeline) | `Vec<`[`DailyCount`]`>` |
//! | [`week_activity`](Analyzer::week_activity) | `Vec<`[`Tally`]`>` |
//! | [`month_activity`](Analyzer::month_activity) | `Vec<`[`Tally`]`>` |
//! | [`activity_heatmap`](Analyzer::activity_heatmap) | [`Heatmap`] |
//! | [`busiest_users`](Analyzer::busiest_users) | [`BusiestUsers`] |
//! | [`most_common_words`](Analyzer::most_common_words) | `Vec<`[`Tally`]`>` |
//! | [`word_cloud_tokens`](Analyzer::word_cloud_tokens) | `Vec<String>` |
//! | [`emoji_frequency`](Analyzer::emoji_frequency) | `Vec<`[`Tally`]`>` |
//! | [`report`](Analyzer::report) | [`Report`] |
//!
//! Empty input never fails; every operation degrades to empty or zero
//! results.
//!
//! # Example
//!
//! ```
//! use chatstat::analysis::Analyzer;
//! use chatstat::core::Selection;
//! use chatstat::parser::{Parser, TranscriptParser};
//!
//! # fn main() -> chatstat::Result<()> {
//! let transcript = TranscriptParser::new().parse_str(
//!     "[01/01/24, 09:00:00] Alice: Hi there\n\
//!      [01/01/24, 09:05:00] Bob: image omitted\n\
//!      [01/01/24, 09:06:00] Alice: https://example.com check this",
//! )?;
//!
//! let analyzer = Analyzer::new();
//! let stats = analyzer.stats(&Selection::Overall, transcript.messages());
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media, 1);
//! assert_eq!(stats.links, 1);
//! # Ok(())
//! # }
//! ```

mod activity;
mod emoji;
mod links;
mod stats;
mod timeline;
mod users;
mod words;

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{Local, NaiveDateTime};
use regex::Regex;
use serde::Serialize;

use crate::Message;
use crate::config::AnalysisConfig;
use crate::core::filter::Selection;
use crate::core::models::DateSpan;

pub use activity::Heatmap;
pub use links::UrlExtractor;
pub use stats::Stats;
pub use timeline::{DailyCount, MonthlyCount};
pub use users::{BusiestUsers, UserShare};

/// One labelled count in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub label: String,
    pub count: usize,
}

impl Tally {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Counts `items` and ranks them by count, descending.
///
/// Ties keep the order in which each key was first seen.
fn rank_first_seen<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // Stable sort, so equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Runs the aggregations with shared configuration.
///
/// Regexes are compiled once here and never mutated, so one analyzer can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    urls: UrlExtractor,
    emoji: Regex,
    punctuation: Regex,
    as_of: NaiveDateTime,
}

impl Analyzer {
    /// Creates an analyzer with default configuration, timelines cut at the
    /// current local time.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            urls: UrlExtractor::new(),
            emoji: emoji::emoji_regex(),
            punctuation: Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"),
            as_of: Local::now().naive_local(),
        }
    }

    /// Sets the reference time; timeline entries after it are ignored.
    #[must_use]
    pub fn with_reference_time(mut self, as_of: NaiveDateTime) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn reference_time(&self) -> NaiveDateTime {
        self.as_of
    }

    /// Bundles every aggregation for one selection.
    ///
    /// The busiest-user ranking only makes sense across participants and is
    /// left out for single-author selections.
    pub fn report(&self, selection: &Selection, messages: &[Message]) -> Report {
        Report {
            selection: selection.label().to_string(),
            span: DateSpan::of(messages.iter().filter(|m| selection.matches(m))),
            stats: self.stats(selection, messages),
            monthly_timeline: self.monthly_timeline(selection, messages),
            daily_timeline: self.daily_timeline(selection, messages),
            week_activity: self.week_activity(selection, messages),
            month_activity: self.month_activity(selection, messages),
            heatmap: self.activity_heatmap(selection, messages),
            busiest_users: selection.is_overall().then(|| self.busiest_users(messages)),
            common_words: self.most_common_words(selection, messages),
            emojis: self.emoji_frequency(selection, messages),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Every aggregation for one selection, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub selection: String,
    pub span: Option<DateSpan>,
    pub stats: Stats,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<Tally>,
    pub month_activity: Vec<Tally>,
    pub heatmap: Heatmap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_users: Option<BusiestUsers>,
    pub common_words: Vec<Tally>,
    pub emojis: Vec<Tally>,
}

impl Report {
    /// Returns `true` when timelines and the heatmap are worth showing.
    pub fn shows_timelines(&self) -> bool {
        self.span.is_some_and(|s| s.exceeds_week())
    }
}
