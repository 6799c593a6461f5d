//! # chatstat
//!
//! A Rust library for parsing WhatsApp chat exports and computing
//! participant-level activity analytics.
//!
//! ## Overview
//!
//! chatstat reads the plain-text transcript WhatsApp produces with
//! *Export chat*, in either of its two layouts:
//!
//! - **Bracketed** (iOS): `[15/01/2024, 10:30:45] Alice: Hello`
//! - **Dashed** (Android): `15/01/2024, 10:30 - Alice: Hello`
//!
//! Every line becomes a [`Message`] with a day-first timestamp, an author
//! (or the `group_notification` sentinel for group events) and a cleaned
//! body. The [`analysis`] module turns that record set into message and word
//! counts, timelines, weekday/hour heatmaps, busiest-user rankings, word
//! and emoji frequencies.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = TranscriptParser::new().parse_str(
//!         "[01/01/24, 09:00:00] Alice: Hi there\n\
//!          [01/01/24, 09:05:00] Bob: image omitted\n\
//!          [01/01/24, 09:06:00] Alice: https://example.com check this",
//!     )?;
//!
//!     let analyzer = Analyzer::new();
//!     let busiest = analyzer.busiest_users(transcript.messages());
//!     assert_eq!(busiest.top[0].label, "Alice");
//!
//!     let stats = analyzer.stats(&Selection::author("Bob"), transcript.messages());
//!     assert_eq!(stats.media, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and the
//!   [`Parser`](parser::Parser) trait
//! - [`parsing`] - pipeline stages: segmentation, grammar matching,
//!   timestamp normalization, text cleanup
//! - [`message`] - [`Message`] and its calendar accessors
//! - [`analysis`] - [`Analyzer`](analysis::Analyzer) and the aggregation results
//! - [`core`] - [`Transcript`](core::Transcript), filtering and export writers
//! - [`config`] - [`ParserConfig`](config::ParserConfig),
//!   [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - [`ChatstatError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatstatError, Result};

    pub use crate::parser::{Parser, TranscriptParser};

    pub use crate::config::{AnalysisConfig, ParserConfig};

    pub use crate::core::filter::{FilterConfig, Selection, apply_filters};
    pub use crate::core::models::{DateSpan, OutputConfig, ParseReport, Transcript};

    pub use crate::analysis::{Analyzer, Report, Stats, Tally};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
