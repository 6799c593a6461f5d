//! Splitting raw transcripts into logical lines.
//!
//! A physical line that starts with a recognized header opens a new logical
//! line. Anything else continues the open one (pasted text, multi-line
//! messages) and is joined with a single space. Text before the first header
//! has nothing to attach to and is discarded.

use std::str::Lines;

use super::clean::is_directional_mark;
use super::grammar::LineMatcher;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// One message unit after continuation lines have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the physical line that opened this logical line.
    pub line_number: usize,
    /// Merged text.
    pub text: String,
}

/// Iterator over the logical lines of a transcript.
///
/// Construct a new segmenter over the same text to restart.
pub struct Segmenter<'a> {
    lines: Lines<'a>,
    matcher: &'a LineMatcher,
    open: Option<LogicalLine>,
    line_number: usize,
    non_blank: usize,
    discarded: usize,
}

impl<'a> Segmenter<'a> {
    pub fn new(content: &'a str, matcher: &'a LineMatcher) -> Self {
        Self {
            lines: content.lines(),
            matcher,
            open: None,
            line_number: 0,
            non_blank: 0,
            discarded: 0,
        }
    }

    /// Non-blank physical lines seen so far.
    pub fn non_blank_lines(&self) -> usize {
        self.non_blank
    }

    /// Lines dropped because no message was open yet.
    pub fn discarded_lines(&self) -> usize {
        self.discarded
    }
}

impl Iterator for Segmenter<'_> {
    type Item = LogicalLine;

    fn next(&mut self) -> Option<Self::Item> {
        for raw in self.lines.by_ref() {
            self.line_number += 1;
            let line = prepare_line(raw);
            if line.is_empty() {
                continue;
            }
            self.non_blank += 1;

            if self.matcher.is_message_start(line) {
                let started = LogicalLine {
                    line_number: self.line_number,
                    text: line.to_string(),
                };
                if let Some(finished) = self.open.replace(started) {
                    return Some(finished);
                }
            } else if let Some(open) = self.open.as_mut() {
                open.text.push(' ');
                open.text.push_str(line);
            } else {
                self.discarded += 1;
            }
        }

        self.open.take()
    }
}

/// Trims whitespace, a byte-order mark and the directional marks iOS puts in
/// front of lines.
fn prepare_line(raw: &str) -> &str {
    raw.trim()
        .trim_start_matches(|c: char| c == BYTE_ORDER_MARK || is_directional_mark(c))
        .trim_start()
}

/// Collects the logical lines of a transcript.
pub fn segment(content: &str, matcher: &LineMatcher) -> Vec<LogicalLine> {
    Segmenter::new(content, matcher).collect()
}
