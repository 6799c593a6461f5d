//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ExportFormat`] - export format options, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)
//!
//! The helpers on [`Args`] turn raw flags into the library's configuration
//! types so `main` only wires them together.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, ParserConfig};
use crate::core::filter::{FilterConfig, Selection};
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::format::OutputFormat;

/// Analyze a WhatsApp chat export: message counts, activity over time,
/// busiest participants, common words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat chat.txt
    chatstat chat.txt --user Alice --stopwords stop_hinglish.txt
    chatstat chat.txt --after 2024-01-01 --json
    chatstat chat.txt --export messages.csv --calendar")]
pub struct Args {
    /// Path to the exported transcript
    pub input: PathBuf,

    /// Analyze one participant instead of the whole chat
    #[arg(short, long, value_name = "NAME", default_value = "Overall")]
    pub user: String,

    /// Stopword file, one word per line
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Drop group notifications and group-event text
    #[arg(long)]
    pub drop_notifications: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the normalized messages to this file
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format (default: from the export file extension)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub export_format: Option<ExportFormat>,

    /// Add date, month, weekday and hour-bucket columns to the export
    #[arg(long)]
    pub calendar: bool,

    /// Number of words in the common-words ranking
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top_words: usize,

    /// Number of participants in the busiest-users ranking
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top_users: usize,

    /// Only accept timestamps matching a known export layout exactly
    #[arg(long)]
    pub strict_timestamps: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Participant selection from `--user`.
    pub fn selection(&self) -> Selection {
        Selection::from(self.user.as_str())
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new().with_lenient_timestamps(!self.strict_timestamps)
    }

    /// Analysis configuration, reading the stopword file if one was given.
    pub fn analysis_config(&self) -> Result<AnalysisConfig> {
        let mut config = AnalysisConfig::new()
            .with_top_words(self.top_words)
            .with_top_users(self.top_users);
        if let Some(path) = &self.stopwords {
            let text = std::fs::read_to_string(path)?;
            config = config.with_stopwords_text(&text);
        }
        Ok(config)
    }

    /// Date and notification filters. The participant selection is applied
    /// by the analyzer, not here, so rankings can still see everyone.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(after) = &self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            config = config.with_date_to(before)?;
        }
        if self.drop_notifications {
            config = config.without_notifications();
        }
        Ok(config)
    }

    pub fn output_config(&self) -> OutputConfig {
        let config = OutputConfig::new();
        if self.calendar { config.with_calendar() } else { config }
    }

    /// Export target and format, `None` when `--export` was not given.
    pub fn export_target(&self) -> Result<Option<(&Path, OutputFormat)>> {
        let Some(path) = self.export.as_deref() else {
            return Ok(None);
        };
        let format = match self.export_format {
            Some(format) => format.into(),
            None => OutputFormat::from_path(path)?,
        };
        Ok(Some((path, format)))
    }

    /// Default log directive for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Export format options.
///
/// ```rust
/// use chatstat::cli::ExportFormat;
/// use chatstat::format::OutputFormat;
///
/// let format: OutputFormat = ExportFormat::Jsonl.into();
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of messages
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> OutputFormat {
        match format {
            ExportFormat::Csv => OutputFormat::Csv,
            ExportFormat::Json => OutputFormat::Json,
            ExportFormat::Jsonl => OutputFormat::Jsonl,
        }
    }
}
