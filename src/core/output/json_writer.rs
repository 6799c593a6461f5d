//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{ExportRecord, export_records};
use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-01-15 10:00:00", "author": "Alice", "body": "Hello"},
///   {"timestamp": "2024-01-15 10:01:00", "author": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_json(messages: &[Message], output_path: impl AsRef<Path>, config: &OutputConfig) -> Result<()> {
    let json = to_json(messages, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts messages to a pretty-printed JSON array.
///
/// Same format as [`write_json`], returned in memory.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let records: Vec<ExportRecord<'_>> = export_records(messages, config).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
