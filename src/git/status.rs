//! Status line parsing for `git status --short` and `git diff-index --name-status`.

use serde::Serialize;
use tracing::debug;

use crate::error::ParseError;
use crate::git::codes::describe_code;
use crate::git::format::LineFormat;

/// Lines at or below this many characters cannot hold a status and a path.
const MIN_LINE_LENGTH: usize = 4;

/// Marker git places between the two paths of a rename in status output.
const RENAME_ARROW: &str = " -> ";

/// One file change described by a single status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    /// Primary status code (index column for status lines).
    pub x: char,
    /// Secondary status code. Always a space for diff-index lines.
    pub y: char,
    /// Current path of the file, or the only path a status line gives.
    pub to: String,
    /// Origin path of a rename or move, empty otherwise.
    pub from: String,
}

impl ChangeRecord {
    /// Create a record with an unmodified secondary code.
    pub fn new(x: char, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            x,
            y: ' ',
            to: to.into(),
            from: from.into(),
        }
    }

    /// Describe the primary status code, e.g. "renamed".
    pub fn describe(&self) -> Option<&'static str> {
        describe_code(self.x)
    }
}

fn check_length(line: &str) -> Result<(), ParseError> {
    if line.chars().count() <= MIN_LINE_LENGTH {
        return Err(ParseError::InvalidInput(line.to_string()));
    }
    Ok(())
}

/// Parse a line from `git status --short`.
///
/// The layout is `XY PATH` or `XY PATH -> PATH` for renames.
pub fn parse_status_line(line: &str) -> Result<ChangeRecord, ParseError> {
    check_length(line)?;

    let mut chars = line.char_indices();
    let (_, x) = chars.next().unwrap_or((0, ' '));
    let (_, y) = chars.next().unwrap_or((0, ' '));
    // Skip the separator column.
    chars.next();
    let paths = chars.next().map_or("", |(start, _)| &line[start..]);

    // The left side of the arrow lands in `to`. git prints `ORIG -> PATH`, so
    // this reads backwards, but callers depend on it and rename/move
    // classification does not care about direction.
    let (to, from) = match paths.split_once(RENAME_ARROW) {
        Some((left, right)) => (left, right),
        None => (paths, ""),
    };

    let record = ChangeRecord {
        x,
        y,
        to: to.to_string(),
        from: from.to_string(),
    };
    debug!(?record, status = record.describe(), "Parsed status line");

    Ok(record)
}

/// Parse a line from `git diff-index --name-status`.
///
/// For a rename such as `R100`, the similarity score is discarded. The first
/// path goes to `from` and the optional second path to `to`.
pub fn parse_diff_index_line(line: &str) -> Result<ChangeRecord, ParseError> {
    check_length(line)?;

    let x = line.chars().next().unwrap_or(' ');

    let mut fields = line.split_whitespace().skip(1);
    let from = fields.next().unwrap_or_default();
    let to = fields.next().unwrap_or_default();

    let record = ChangeRecord::new(x, from, to);
    debug!(?record, status = record.describe(), "Parsed diff-index line");

    Ok(record)
}

/// Parse a line in the given format, detecting it when `Auto`.
pub fn parse_line(line: &str, format: LineFormat) -> Result<ChangeRecord, ParseError> {
    match format.resolve(line) {
        LineFormat::DiffIndex => parse_diff_index_line(line),
        _ => parse_status_line(line),
    }
}
