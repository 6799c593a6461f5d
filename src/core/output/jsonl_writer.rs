//! JSON Lines (JSONL) output writer.
//!
//! One message per line, handy for `jq` pipelines and for loading large
//! transcripts record by record.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::export_records;
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2024-01-15 10:00:00","author":"Alice","body":"Hello"}
/// {"timestamp":"2024-01-15 10:01:00","author":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_lines(messages, BufWriter::new(file), config)
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(messages, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(messages: &[Message], mut writer: W, config: &OutputConfig) -> Result<()> {
    for record in export_records(messages, config) {
        let line = serde_json::to_string(&record)?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}
