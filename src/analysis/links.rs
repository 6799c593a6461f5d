//! URL extraction.

use regex::Regex;

/// Punctuation that usually closes the sentence around a link rather than
/// belonging to it.
const TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '\'', '"'];

/// Finds links in message bodies.
///
/// ```
/// use chatstat::analysis::UrlExtractor;
///
/// let urls = UrlExtractor::new();
/// assert_eq!(
///     urls.find_urls("see https://example.com/a, and www.rust-lang.org."),
///     vec!["https://example.com/a", "www.rust-lang.org"],
/// );
/// ```
#[derive(Debug, Clone)]
pub struct UrlExtractor {
    regex: Regex,
}

impl UrlExtractor {
    pub fn new() -> Self {
        Self {
            regex: Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"']+"#).expect("url pattern is valid"),
        }
    }

    /// Returns every link in `text`, in order.
    pub fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches(TRAILING))
            .filter(|url| !url.is_empty())
            .collect()
    }

    /// Number of links in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

impl Default for UrlExtractor {
    fn default() -> Self {
        Self::new()
    }
}
