//! Parsing of git status and diff-index output lines.

pub mod codes;
pub mod format;
pub mod status;

pub use codes::{STATUS_DESCRIPTIONS, describe_code};
pub use format::LineFormat;
pub use status::{ChangeRecord, parse_diff_index_line, parse_line, parse_status_line};
