//! Hazard list loading
//!
//! A hazard list holds one `<kind> <x> <y> <z>` record per line, where kind
//! is `B` (black hole), `K` (creature) or `P` (planet). Blank lines are
//! ignored.

use log::info;
use std::path::Path;

use crate::io::configuration::HAZARD_TAGS;
use crate::io::error::{Result, WithContext, parse_error};
use crate::spatial::{Coordinate, HazardRecord, TileKind};

/// Parse one line, returning `None` for blank lines
///
/// # Errors
///
/// Returns a parse error carrying `line_number` for unknown tags and for
/// missing, non-integer or out-of-range coordinates
pub fn parse_hazard_line(line: &str, line_number: usize) -> Result<Option<HazardRecord>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (tag, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    let kind = HAZARD_TAGS
        .contains(&tag)
        .then(|| TileKind::from_tag(tag))
        .flatten()
        .ok_or_else(|| {
            parse_error(
                line_number,
                &format!("unknown kind '{tag}', expected one of {HAZARD_TAGS:?}"),
            )
        })?;

    let position: Coordinate = rest
        .parse()
        .map_err(|err| parse_error(line_number, &err))?;

    Ok(Some(HazardRecord::new(kind, position)))
}

/// Parse a whole hazard list
///
/// # Errors
///
/// Returns the first line that fails to parse
pub fn parse_hazards(text: &str) -> Result<Vec<HazardRecord>> {
    let mut records = Vec::new();
    for (index, line) in text.lines().enumerate() {
        records.extend(parse_hazard_line(line, index + 1)?);
    }
    Ok(records)
}

/// Read and parse a hazard list file
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, or a parse error
/// for the first malformed line
pub fn load_hazards(path: &Path) -> Result<Vec<HazardRecord>> {
    let text = std::fs::read_to_string(path).with_path(path, "read hazard list")?;
    let records = parse_hazards(&text)?;
    info!("loaded {} hazard records from {}", records.len(), path.display());
    Ok(records)
}
