//! Classification, counting and rendering of file changes as a message.

pub mod action;
pub mod count;
pub mod format;
pub mod message;

pub use action::{ActionCategory, classify_change, classify_rename_or_move};
pub use count::{ActionCount, ActionCounts, aggregate};
pub use format::{format_message, join_fragments};
pub use message::{generate_message, generate_message_with_format, summarize};
