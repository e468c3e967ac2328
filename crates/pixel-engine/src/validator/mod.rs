mod evaluate;
mod messages;

pub use evaluate::PatchValidator;

use pixel_core::{PatchPathError, Rejection, DEFAULT_RECORD_PATH_PREFIX, DEFAULT_UNCLAIMED_SENTINEL};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorOptions {
    #[serde(default = "default_unclaimed_sentinel")]
    pub unclaimed_sentinel: String,
    #[serde(default = "default_record_path_prefix")]
    pub record_path_prefix: String,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            unclaimed_sentinel: default_unclaimed_sentinel(),
            record_path_prefix: default_record_path_prefix(),
        }
    }
}

/// Outcome of validating one structured patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub passed: bool,
    #[serde(default)]
    pub reasons: Vec<Rejection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSide {
    Before,
    After,
}

impl Display for SnapshotSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotSide::Before => f.write_str("before"),
            SnapshotSide::After => f.write_str("after"),
        }
    }
}

/// Structural faults in the patch itself. These abort validation instead of
/// producing a rejection reason.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("malformed diff path: {0}")]
    Path(#[from] PatchPathError),
    #[error("{side} snapshot has no record at index {index} (referenced by `{path}`)")]
    MissingRecord {
        side: SnapshotSide,
        index: usize,
        path: String,
    },
}

fn default_unclaimed_sentinel() -> String {
    DEFAULT_UNCLAIMED_SENTINEL.to_string()
}

fn default_record_path_prefix() -> String {
    DEFAULT_RECORD_PATH_PREFIX.to_string()
}
