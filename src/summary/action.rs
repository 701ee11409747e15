//! Mapping of change records to the action they represent.

use std::fmt;

use serde::Serialize;

use crate::error::ClassifyError;
use crate::git::ChangeRecord;

/// What a change did to a file, in the words used in the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Create,
    Update,
    Delete,
    Rename,
    Move,
    #[serde(rename = "move and rename")]
    MoveAndRename,
}

impl ActionCategory {
    /// Get the verb phrase used in commit messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Rename => "rename",
            Self::Move => "move",
            Self::MoveAndRename => "move and rename",
        }
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a change by its primary status code.
pub fn classify_change(record: &ChangeRecord) -> Result<ActionCategory, ClassifyError> {
    match record.x {
        'A' => Ok(ActionCategory::Create),
        'M' => Ok(ActionCategory::Update),
        'D' => Ok(ActionCategory::Delete),
        'R' => Ok(classify_rename_or_move(record)),
        code => Err(ClassifyError::UnrecognizedStatusCode(code)),
    }
}

/// Decide whether a rename record moved the file, renamed it, or both.
///
/// Purely lexical: each path is split at its last `/` and the directory and
/// base name are compared as strings, with no normalization. A record whose
/// paths are identical is a rename.
pub fn classify_rename_or_move(record: &ChangeRecord) -> ActionCategory {
    let (from_dir, from_name) = split_path(&record.from);
    let (to_dir, to_name) = split_path(&record.to);

    let dir_changed = from_dir != to_dir;
    let name_changed = from_name != to_name;

    match (dir_changed, name_changed) {
        (true, true) => ActionCategory::MoveAndRename,
        (true, false) => ActionCategory::Move,
        (false, _) => ActionCategory::Rename,
    }
}

/// Split a git path into directory and base name. Top-level files have an
/// empty directory.
fn split_path(path: &str) -> (&str, &str) {
    path.rsplit_once('/').unwrap_or(("", path))
}
