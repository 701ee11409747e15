//! auto-commit-msg - summarize git status output as a commit message.
//!
//! # Overview
//!
//! Lines from `git status --short` or `git diff-index --name-status` are parsed
//! into change records, each change is classified as a create, update, delete,
//! rename, move or move-and-rename, and the per-action file counts are rendered
//! as a sentence such as "create 1 file and update 2 files".

pub mod error;
pub mod git;
pub mod summary;

// Re-export commonly used types
pub use error::{ClassifyError, MessageError, ParseError};
pub use git::{ChangeRecord, LineFormat, parse_diff_index_line, parse_status_line};
pub use summary::{
    ActionCategory, ActionCount, ActionCounts, aggregate, classify_change, format_message,
    generate_message, generate_message_with_format,
};
