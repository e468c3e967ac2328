use serde::{Deserialize, Serialize};

pub const DEFAULT_DATASET_FILE: &str = "_data/pixels.json";

/// Files and line counts touched by a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    #[serde(default)]
    pub modified_files: Vec<String>,
    #[serde(default)]
    pub created_files: Vec<String>,
    #[serde(default)]
    pub deleted_files: Vec<String>,
    #[serde(default)]
    pub lines_of_code: u64,
}

impl ChangeSet {
    /// Modified, created, then deleted files, in that order.
    pub fn touched_files(&self) -> Vec<String> {
        self.modified_files
            .iter()
            .chain(&self.created_files)
            .chain(&self.deleted_files)
            .cloned()
            .collect()
    }

    pub fn has_only_dataset_changes(&self, dataset_file: &str) -> bool {
        matches!(self.modified_files.as_slice(), [only] if only == dataset_file)
            && self.created_files.is_empty()
            && self.deleted_files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeSetClass {
    Empty,
    DatasetOnly,
    ManualReview { files: Vec<String> },
}

pub fn classify_change_set(change_set: &ChangeSet, dataset_file: &str) -> ChangeSetClass {
    if change_set.lines_of_code == 0 {
        return ChangeSetClass::Empty;
    }
    if !change_set.has_only_dataset_changes(dataset_file) {
        return ChangeSetClass::ManualReview {
            files: change_set.touched_files(),
        };
    }
    ChangeSetClass::DatasetOnly
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
