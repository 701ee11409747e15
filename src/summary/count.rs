//! Counting of file changes per action, in first-seen order.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::ClassifyError;
use crate::git::ChangeRecord;
use crate::summary::action::{ActionCategory, classify_change};

/// Number of files that share an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCount {
    pub file_count: usize,
}

/// File counts keyed by action.
///
/// Keeps the order in which each action was first seen, which is the order
/// the message lists them in. An action is only present with a count of at
/// least one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionCounts {
    entries: Vec<(ActionCategory, ActionCount)>,
}

impl ActionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more file for the action, adding it if unseen.
    pub fn increment(&mut self, category: ActionCategory) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, count)) => count.file_count += 1,
            None => self.entries.push((category, ActionCount { file_count: 1 })),
        }
    }

    /// Get the count for an action, if any file had it.
    pub fn get(&self, category: ActionCategory) -> Option<ActionCount> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ActionCategory, ActionCount)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of files across all actions.
    pub fn total_files(&self) -> usize {
        self.entries.iter().map(|(_, count)| count.file_count).sum()
    }
}

impl FromIterator<ActionCategory> for ActionCounts {
    fn from_iter<I: IntoIterator<Item = ActionCategory>>(iter: I) -> Self {
        let mut counts = Self::new();
        for category in iter {
            counts.increment(category);
        }
        counts
    }
}

impl Serialize for ActionCounts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, count) in &self.entries {
            map.serialize_entry(category.as_str(), count)?;
        }
        map.end()
    }
}

/// Classify each record and count files per action.
///
/// Stops at the first record with an unrecognized status code.
pub fn aggregate(records: &[ChangeRecord]) -> Result<ActionCounts, ClassifyError> {
    let counts = records
        .iter()
        .map(classify_change)
        .collect::<Result<ActionCounts, _>>()?;

    debug!(
        "Aggregated {} files into {} actions",
        counts.total_files(),
        counts.len()
    );

    Ok(counts)
}
