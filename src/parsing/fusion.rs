use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::core::record::FusionRecord;

/// Separator between the material pair and the result.
const RESULT_SEP: &str = " = ";

/// Separator between the two materials.
const MATERIAL_SEP: &str = " + ";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a fusion list file from disk.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read. The content itself
/// cannot fail to parse; see [`parse_text`].
pub fn parse_file(path: &Path) -> Result<Vec<FusionRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_text(&content))
}

/// Parse fusion list text, one `material1 + material2 = result` per line.
///
/// Splitting is on the literal separators `" + "` and `" = "`; a line that
/// does not produce exactly two parts at each split is malformed and silently
/// dropped. The three fields are trimmed but otherwise taken as-is, so a
/// field that is empty after trimming still yields a record (callers can
/// detect those via [`FusionRecord::has_empty_field`]).
///
/// Pure and order-preserving: the output sequence follows the input line
/// order, and parsing the same text twice yields equal sequences.
#[must_use]
pub fn parse_text(text: &str) -> Vec<FusionRecord> {
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for line in text.lines() {
        match parse_line(line) {
            Some(record) => records.push(record),
            None => {
                if !line.trim().is_empty() {
                    dropped += 1;
                }
            }
        }
    }

    if dropped > 0 {
        debug!("dropped {dropped} malformed line(s) while parsing fusion list");
    }

    records
}

/// Parse a single line, or `None` if it does not match the expected shape.
fn parse_line(line: &str) -> Option<FusionRecord> {
    let parts: Vec<&str> = line.split(RESULT_SEP).collect();
    if parts.len() != 2 {
        return None;
    }

    let materials: Vec<&str> = parts[0].split(MATERIAL_SEP).collect();
    if materials.len() != 2 {
        return None;
    }

    Some(FusionRecord::new(
        materials[0].trim(),
        materials[1].trim(),
        parts[1].trim(),
    ))
}
