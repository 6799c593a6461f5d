//! Transcript parser.
//!
//! [`TranscriptParser`] drives the parsing pipeline:
//!
//! ```text
//! raw text → Segmenter → LineMatcher → timestamp + body cleanup → Message
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatstat::parser::{Parser, TranscriptParser};
//!
//! # fn main() -> chatstat::Result<()> {
//! let parser = TranscriptParser::new();
//! let transcript = parser.parse_str(
//!     "[15/01/2024, 10:30:00] Alice: Hello\n\
//!      [15/01/2024, 10:31:00] Bob: Hi there",
//! )?;
//!
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript.messages[1].author, "Bob");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::Message;
use crate::config::ParserConfig;
use crate::core::models::{ParseReport, Transcript};
use crate::error::{ChatstatError, Result};
use crate::parsing::{LineMatcher, Segmenter, normalize_timestamp};

/// Common interface for transcript parsers.
///
/// Implementors must be `Send + Sync` so one parser can serve several
/// threads, each working on its own transcript.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Parses transcript text held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::UnrecognizedFormat`] if the text has content
    /// but no line matches a known export layout.
    fn parse_str(&self, content: &str) -> Result<Transcript>;

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::Io`] if the file cannot be read, or
    /// [`ChatstatError::UnrecognizedFormat`] carrying the path.
    fn parse(&self, path: &Path) -> Result<Transcript> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content).map_err(|e| e.with_path(path))
    }

    /// Convenience wrapper around [`parse`](Self::parse) taking a string path.
    fn parse_file(&self, path: &str) -> Result<Transcript> {
        self.parse(Path::new(path))
    }
}

/// Parser for WhatsApp text exports in either the bracketed or dashed layout.
///
/// The parser holds no mutable state; its compiled grammars are reused for
/// every call.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
    matcher: LineMatcher,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            matcher: LineMatcher::new(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn parse_content(&self, content: &str) -> Result<Transcript> {
        let mut segmenter = Segmenter::new(content, &self.matcher);
        let mut report = ParseReport::default();
        let mut messages = Vec::new();

        for line in segmenter.by_ref() {
            report.logical_lines += 1;
            let entry = self.matcher.parse_line(&line.text);

            if let Some(header) = entry.header() {
                report.record_hit(header.grammar);
            }

            let timestamp = entry
                .header()
                .and_then(|h| normalize_timestamp(&h.date, &h.time, self.config.lenient_timestamps));
            let Some(timestamp) = timestamp else {
                report.dropped_timestamps += 1;
                debug!(line = line.line_number, text = %line.text, "dropping row with unparseable timestamp");
                continue;
            };

            if !entry.is_authored() {
                if self.config.skip_notifications {
                    report.skipped_notifications += 1;
                    continue;
                }
                report.system_lines += 1;
            }

            messages.push(Message::from_entry(entry, timestamp));
        }

        report.discarded_lines = segmenter.discarded_lines();
        let non_blank = segmenter.non_blank_lines();

        if report.logical_lines == 0 && non_blank > 0 {
            return Err(ChatstatError::unrecognized_format(non_blank, None));
        }

        info!(
            messages = messages.len(),
            logical_lines = report.logical_lines,
            dropped = report.dropped_timestamps,
            system = report.system_lines,
            "parsed transcript"
        );
        debug!(
            bracketed = report.bracketed,
            dashed = report.dashed,
            discarded = report.discarded_lines,
            "grammar hits"
        );

        Ok(Transcript::new(messages, report))
    }
}

impl Parser for TranscriptParser {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn parse_str(&self, content: &str) -> Result<Transcript> {
        self.parse_content(content)
    }
}
