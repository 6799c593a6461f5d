//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how transcripts are read
//! - [`AnalysisConfig`] - stopwords, media placeholders and ranking limits
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalysisConfig, ParserConfig};
//!
//! let parser = ParserConfig::new().with_lenient_timestamps(false);
//! let analysis = AnalysisConfig::new()
//!     .with_stopwords_text("the\nand\nis\n")
//!     .with_top_words(10);
//!
//! assert!(analysis.is_stopword("and"));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Placeholder bodies WhatsApp writes instead of attachments.
pub const DEFAULT_MEDIA_PLACEHOLDERS: &[&str] = &[
    "image omitted",
    "video omitted",
    "audio omitted",
    "document omitted",
    "sticker omitted",
    "gif omitted",
    "<media omitted>",
];

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_notifications(true);
/// assert!(config.skip_notifications);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Fall back to a permissive day-first parse when no template matches (default: true)
    pub lenient_timestamps: bool,

    /// Drop system/notification rows while parsing (default: false)
    pub skip_notifications: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            lenient_timestamps: true,
            skip_notifications: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the lenient timestamp fallback.
    #[must_use]
    pub fn with_lenient_timestamps(mut self, enabled: bool) -> Self {
        self.lenient_timestamps = enabled;
        self
    }

    /// Sets whether to drop system/notification rows.
    #[must_use]
    pub fn with_skip_notifications(mut self, skip: bool) -> Self {
        self.skip_notifications = skip;
        self
    }
}

/// Configuration for the aggregation functions.
///
/// Stopwords are injected here once and reused by every call instead of being
/// re-read per aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Lowercase tokens ignored by word frequency (default: empty)
    pub stopwords: HashSet<String>,

    /// Lowercase bodies counted as media and excluded from word frequency
    pub media_placeholders: Vec<String>,

    /// Number of words returned by word frequency (default: 20)
    pub top_words: usize,

    /// Number of authors in the busiest-user ranking (default: 5)
    pub top_users: usize,

    /// Drop tokens equal to a participant's full name (default: true)
    pub exclude_participant_names: bool,

    /// Also drop each word of a multi-word name (default: false)
    ///
    /// Only applies while `exclude_participant_names` is set.
    pub exclude_name_parts: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopwords: HashSet::new(),
            media_placeholders: DEFAULT_MEDIA_PLACEHOLDERS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            top_words: 20,
            top_users: 5,
            exclude_participant_names: true,
            exclude_name_parts: false,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stopword set. Words are lowercased.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        self
    }

    /// Replaces the stopword set from one-token-per-line text.
    #[must_use]
    pub fn with_stopwords_text(self, text: &str) -> Self {
        self.with_stopwords(text.lines())
    }

    /// Replaces the media placeholder list.
    #[must_use]
    pub fn with_media_placeholders<I, S>(mut self, placeholders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.media_placeholders = placeholders
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .collect();
        self
    }

    /// Sets how many words the frequency ranking returns.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets how many authors the busiest-user ranking returns.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets whether participant names are removed from word frequency.
    #[must_use]
    pub fn with_exclude_participant_names(mut self, exclude: bool) -> Self {
        self.exclude_participant_names = exclude;
        self
    }

    /// Sets whether each word of a participant's name is removed too.
    #[must_use]
    pub fn with_exclude_name_parts(mut self, exclude: bool) -> Self {
        self.exclude_name_parts = exclude;
        self
    }

    /// Returns `true` if the (lowercase) token is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Returns `true` if the body is a media placeholder, ignoring case and
    /// surrounding whitespace.
    pub fn is_media_placeholder(&self, body: &str) -> bool {
        let body = body.trim().to_lowercase();
        self.media_placeholders.iter().any(|p| *p == body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_defaults() {
        let config = ParserConfig::default();
        assert!(config.lenient_timestamps);
        assert!(!config.skip_notifications);
    }

    #[test]
    fn test_parser_builder() {
        let config = ParserConfig::new()
            .with_lenient_timestamps(false)
            .with_skip_notifications(true);
        assert!(!config.lenient_timestamps);
        assert!(config.skip_notifications);
    }

    #[test]
    fn test_analysis_defaults() {
        let config = AnalysisConfig::default();
        assert!(config.stopwords.is_empty());
        assert_eq!(config.top_words, 20);
        assert_eq!(config.top_users, 5);
        assert!(config.exclude_participant_names);
        assert!(!config.exclude_name_parts);
        assert!(config.is_media_placeholder("image omitted"));
        assert!(config.is_media_placeholder("  Video Omitted "));
        assert!(config.is_media_placeholder("<Media omitted>"));
        assert!(!config.is_media_placeholder("image omitted lol"));
    }

    #[test]
    fn test_stopwords_text() {
        let config = AnalysisConfig::new().with_stopwords_text("Hai\n\n  the \nka\n");
        assert_eq!(config.stopwords.len(), 3);
        assert!(config.is_stopword("hai"));
        assert!(config.is_stopword("the"));
        assert!(!config.is_stopword(""));
    }

    #[test]
    fn test_custom_media_placeholders() {
        let config = AnalysisConfig::new().with_media_placeholders(["Bild weggelassen"]);
        assert!(config.is_media_placeholder("bild weggelassen"));
        assert!(!config.is_media_placeholder("image omitted"));
    }

    #[test]
    fn test_config_serde() {
        let config = AnalysisConfig::new().with_top_words(5);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.top_words, 5);
        assert_eq!(parsed.media_placeholders, config.media_placeholders);
    }
}
