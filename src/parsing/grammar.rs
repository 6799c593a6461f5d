//! Export grammar detection and line matching.
//!
//! WhatsApp writes one of two header layouts in front of every message:
//!
//! - Bracketed (iOS): `[15/01/24, 10:30:45] Sender: Message`
//! - Dashed (Android): `15/01/2024, 10:30 - Sender: Message`
//!
//! The bracketed layout always carries seconds and is tried first; the dashed
//! layout is looser and would otherwise claim bracket-less variants of it.
//! Dates are always day-first.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::message::NOTIFICATION_AUTHOR;

/// Known export header layouts, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// `[DD/MM/YY[YY], HH:MM:SS[ AM|PM]] Remainder`
    ///
    /// Example: `[15/01/24, 10:30:45] Alice: Hello`
    Bracketed,
    /// `DD/MM/YY[YY], HH:MM[:SS][ AM|PM] - Remainder`
    ///
    /// Example: `15/01/2024, 10:30 pm - Alice: Hello`
    Dashed,
}

impl Grammar {
    /// Returns the header regex for this grammar.
    ///
    /// Captures: 1 = date, 2 = time, 3 = remainder after the header.
    pub fn pattern(self) -> &'static str {
        match self {
            // [15/01/24, 10:30:45] Sender: Message
            Grammar::Bracketed => {
                r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}:\d{2}(?:[ \x{00A0}\x{202F}]?[AaPp]\.?[Mm]\.?)?)\]\s?(.*)$"
            }
            // 15/01/2024, 10:30 - Sender: Message
            Grammar::Dashed => {
                r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s*(\d{1,2}:\d{2}(?::\d{2})?(?:[ \x{00A0}\x{202F}]?[AaPp]\.?[Mm]\.?)?)\s-\s(.*)$"
            }
        }
    }

    /// Returns all grammars in priority order.
    pub fn all() -> &'static [Grammar] {
        &[Grammar::Bracketed, Grammar::Dashed]
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grammar::Bracketed => write!(f, "bracketed"),
            Grammar::Dashed => write!(f, "dashed"),
        }
    }
}

/// The timestamp header of a recognized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Which grammar matched
    pub grammar: Grammar,
    /// Raw date text, e.g. `15/01/24`
    pub date: String,
    /// Raw time text, e.g. `10:30:45 PM`
    pub time: String,
}

/// Result of matching one logical line.
///
/// Exactly one variant holds per line: either an author was found after the
/// header, or the line is a system/notification line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEntry {
    /// A header followed by `Author: Body`.
    Authored {
        header: Header,
        author: String,
        body: String,
    },
    /// A group event, encryption notice, or unrecognized text.
    ///
    /// `header` is present when a grammar matched but no author separator
    /// followed it.
    System {
        header: Option<Header>,
        body: String,
    },
}

impl ParsedEntry {
    /// Returns the timestamp header, if the line had one.
    pub fn header(&self) -> Option<&Header> {
        match self {
            ParsedEntry::Authored { header, .. } => Some(header),
            ParsedEntry::System { header, .. } => header.as_ref(),
        }
    }

    /// Returns the author, or the notification sentinel for system lines.
    pub fn author(&self) -> &str {
        match self {
            ParsedEntry::Authored { author, .. } => author,
            ParsedEntry::System { .. } => NOTIFICATION_AUTHOR,
        }
    }

    /// Returns the raw (uncleaned) body.
    pub fn body(&self) -> &str {
        match self {
            ParsedEntry::Authored { body, .. } | ParsedEntry::System { body, .. } => body,
        }
    }

    /// Returns `true` for authored lines.
    pub fn is_authored(&self) -> bool {
        matches!(self, ParsedEntry::Authored { .. })
    }
}

/// Matches lines against the known grammars in priority order.
///
/// Regexes are compiled once per matcher and never mutated afterwards, so a
/// matcher can be shared between threads.
#[derive(Debug, Clone)]
pub struct LineMatcher {
    grammars: Vec<(Grammar, Regex)>,
}

impl LineMatcher {
    /// Compiles all grammars.
    pub fn new() -> Self {
        let grammars = Grammar::all()
            .iter()
            .map(|&g| (g, Regex::new(g.pattern()).expect("grammar patterns are valid")))
            .collect();
        Self { grammars }
    }

    /// Returns the header and the remainder of the line, trying each grammar in order.
    pub fn match_header<'a>(&self, line: &'a str) -> Option<(Header, &'a str)> {
        self.grammars.iter().find_map(|(grammar, regex)| {
            let caps = regex.captures(line)?;
            let header = Header {
                grammar: *grammar,
                date: caps.get(1).map_or("", |m| m.as_str()).to_string(),
                time: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            };
            let rest = caps.get(3).map_or("", |m| m.as_str());
            Some((header, rest))
        })
    }

    /// Returns the grammar that recognizes this line as a message start.
    pub fn detect(&self, line: &str) -> Option<Grammar> {
        self.grammars
            .iter()
            .find(|(_, regex)| regex.is_match(line))
            .map(|(grammar, _)| *grammar)
    }

    /// Returns `true` if the line opens a new message.
    pub fn is_message_start(&self, line: &str) -> bool {
        self.detect(line).is_some()
    }

    /// Classifies one logical line.
    ///
    /// Never fails: a line that matches no grammar becomes a system entry
    /// carrying the whole line as its body.
    pub fn parse_line(&self, line: &str) -> ParsedEntry {
        let Some((header, rest)) = self.match_header(line) else {
            return ParsedEntry::System {
                header: None,
                body: line.to_string(),
            };
        };

        match split_author(rest) {
            Some((author, body)) => ParsedEntry::Authored {
                header,
                author: author.trim().to_string(),
                body: body.to_string(),
            },
            None => ParsedEntry::System {
                header: Some(header),
                body: rest.to_string(),
            },
        }
    }
}

impl Default for LineMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Splits `Author: Body` at the first `": "` preceded by at least one character.
///
/// Logical lines arrive trimmed, so an empty body leaves the author followed
/// by a bare trailing colon.
fn split_author(rest: &str) -> Option<(&str, &str)> {
    let mut from = 0;
    while let Some(pos) = rest[from..].find(": ") {
        let idx = from + pos;
        if idx > 0 {
            return Some((&rest[..idx], &rest[idx + 2..]));
        }
        from = idx + 1;
    }
    rest.strip_suffix(':')
        .filter(|author| !author.trim().is_empty())
        .map(|author| (author, ""))
}
