//! Transcript parsing pipeline stages.
//!
//! - [`segment`] - raw text → logical lines (continuation merging)
//! - [`grammar`] - logical line → [`ParsedEntry`] (authored or system)
//! - [`timestamp`] - header date/time → [`chrono::NaiveDateTime`]
//! - [`clean`] - body text cleanup
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) drives these stages.

pub mod clean;
pub mod grammar;
pub mod segment;
pub mod timestamp;

// Re-export commonly used items
pub use clean::{DIRECTIONAL_MARKS, clean_body, is_directional_mark};
pub use grammar::{Grammar, Header, LineMatcher, ParsedEntry};
pub use segment::{LogicalLine, Segmenter, segment};
pub use timestamp::{normalize_timestamp, parse_day_first, parse_with_templates};
