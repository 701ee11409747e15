//! End-to-end commit message generation from raw status lines.

use tracing::debug;

use crate::error::MessageError;
use crate::git::{ChangeRecord, LineFormat, parse_line};
use crate::summary::count::{ActionCounts, aggregate};
use crate::summary::format::format_message;

/// Parse and classify lines, returning the per-action file counts.
///
/// Fails on an empty batch, and on the first line that cannot be parsed or
/// classified. No partial result is returned.
pub fn summarize<S: AsRef<str>>(
    lines: &[S],
    format: LineFormat,
) -> Result<ActionCounts, MessageError> {
    if lines.is_empty() {
        return Err(MessageError::EmptyInput);
    }

    let records = lines
        .iter()
        .map(|line| parse_line(line.as_ref(), format))
        .collect::<Result<Vec<ChangeRecord>, _>>()?;

    debug!("Parsed {} lines as {}", records.len(), format);

    Ok(aggregate(&records)?)
}

/// Generate a commit message from lines in the given format.
pub fn generate_message_with_format<S: AsRef<str>>(
    lines: &[S],
    format: LineFormat,
) -> Result<String, MessageError> {
    let counts = summarize(lines, format)?;
    Ok(format_message(&counts))
}

/// Generate a commit message, detecting each line's format.
///
/// ```
/// use auto_commit_msg::generate_message;
///
/// let msg = generate_message(&["A  new.rs", "M  lib.rs", "M  main.rs"]).unwrap();
/// assert_eq!(msg, "create 1 file and update 2 files");
/// ```
pub fn generate_message<S: AsRef<str>>(lines: &[S]) -> Result<String, MessageError> {
    generate_message_with_format(lines, LineFormat::Auto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClassifyError, ParseError};

    #[test]
    fn test_generate_from_status_lines() {
        let lines = ["A  foo.txt", "M  bar.txt", "D  fizz.txt"];
        assert_eq!(
            generate_message(&lines).unwrap(),
            "create 1 file, update 1 file and delete 1 file"
        );
    }

    #[test]
    fn test_generate_from_diff_index_lines() {
        let lines = ["R100\tfoo.txt\tbar/foo.txt", "R090\tbaz.txt\tqux.txt"];
        assert_eq!(
            generate_message(&lines).unwrap(),
            "move 1 file and rename 1 file"
        );
    }

    #[test]
    fn test_generate_with_explicit_format() {
        let lines = ["M    src/a.rs"];
        assert_eq!(
            generate_message_with_format(&lines, LineFormat::DiffIndex).unwrap(),
            "update 1 file"
        );
    }

    #[test]
    fn test_generate_empty_input() {
        let lines: [&str; 0] = [];
        assert_eq!(generate_message(&lines), Err(MessageError::EmptyInput));
    }

    #[test]
    fn test_generate_short_line_aborts_batch() {
        let lines = ["A  foo.txt", "M  x"];
        assert_eq!(
            generate_message(&lines),
            Err(MessageError::Parse(ParseError::InvalidInput(
                "M  x".to_string()
            )))
        );
    }

    #[test]
    fn test_generate_unrecognized_code() {
        let lines = ["C  foo.txt -> bar.txt"];
        assert_eq!(
            generate_message(&lines),
            Err(MessageError::Classify(
                ClassifyError::UnrecognizedStatusCode('C')
            ))
        );
    }

    #[test]
    fn test_summarize_returns_counts() {
        let counts = summarize(&["A  a.txt", "A  b.txt"], LineFormat::Status).unwrap();
        assert_eq!(counts.total_files(), 2);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_generate_accepts_owned_strings() {
        let lines = vec!["D  gone.txt".to_string()];
        assert_eq!(generate_message(&lines).unwrap(), "delete 1 file");
    }
}
