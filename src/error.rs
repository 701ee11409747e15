//! Error types for auto-commit-msg modules using thiserror.

use thiserror::Error;

use crate::git::codes::describe_code;

/// Errors from parsing a single status or diff-index line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Input string must be at least 4 characters. Got: '{0}'")]
    InvalidInput(String),
}

/// Errors from mapping a change record to an action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Unrecognized status code '{code}'{suffix}", code = .0, suffix = describe_suffix(.0))]
    UnrecognizedStatusCode(char),
}

/// Errors from the end-to-end message pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MessageError {
    #[error("No file changes found")]
    EmptyInput,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Classify(#[from] ClassifyError),
}

fn describe_suffix(code: &char) -> String {
    describe_code(*code)
        .map(|description| format!(" ({description})"))
        .unwrap_or_default()
}
