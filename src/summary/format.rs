//! Rendering of action counts as an English sentence.

use crate::summary::count::{ActionCount, ActionCounts};

/// Render one action as e.g. "update 2 files".
fn format_fragment(category: &str, count: ActionCount) -> String {
    let noun = if count.file_count == 1 { "file" } else { "files" };
    format!("{} {} {}", category, count.file_count, noun)
}

/// Join items as an English list: "a", "a and b", "a, b and c".
pub fn join_fragments(fragments: &[String]) -> String {
    match fragments {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}

/// Render counts as a commit message, e.g. "create 1 file and update 2 files".
///
/// Actions appear in the order they were first seen.
pub fn format_message(counts: &ActionCounts) -> String {
    let fragments: Vec<String> = counts
        .iter()
        .map(|(category, count)| format_fragment(category.as_str(), *count))
        .collect();

    join_fragments(&fragments)
}
