//! Core record-set handling for chatstat.
//!
//! This module contains:
//! - [`models`] - The parsed [`Transcript`], its parse report and export configuration
//! - [`filter`] - Participant selection, date range and notification filtering
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use chatstat::core::{
//!     Message, OutputConfig, FilterConfig, Selection, Transcript,
//!     apply_filters, write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use filter::{FilterConfig, Selection, apply_filters, is_notification_text};
pub use models::{DateSpan, OutputConfig, ParseReport, Transcript, participants};

// Re-export Message from the crate root
pub use crate::Message;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
