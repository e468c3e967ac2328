use crate::record::PixelRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

/// A before or after view of the dataset file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    #[serde(default)]
    pub data: Vec<PixelRecord>,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl DatasetSnapshot {
    pub fn new(data: Vec<PixelRecord>) -> Self {
        Self {
            data,
            extensions: Map::new(),
        }
    }

    pub fn record(&self, index: usize) -> Option<&PixelRecord> {
        self.data.get(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffOperationKind {
    Add,
    Remove,
    Replace,
    Test,
    Move,
    Copy,
}

impl DiffOperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DiffOperationKind::Add => "add",
            DiffOperationKind::Remove => "remove",
            DiffOperationKind::Replace => "replace",
            DiffOperationKind::Test => "test",
            DiffOperationKind::Move => "move",
            DiffOperationKind::Copy => "copy",
        }
    }
}

impl Display for DiffOperationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One RFC 6902 operation. Unknown `op` values fail to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DiffOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Test { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
}

impl DiffOperation {
    pub fn kind(&self) -> DiffOperationKind {
        match self {
            DiffOperation::Add { .. } => DiffOperationKind::Add,
            DiffOperation::Remove { .. } => DiffOperationKind::Remove,
            DiffOperation::Replace { .. } => DiffOperationKind::Replace,
            DiffOperation::Test { .. } => DiffOperationKind::Test,
            DiffOperation::Move { .. } => DiffOperationKind::Move,
            DiffOperation::Copy { .. } => DiffOperationKind::Copy,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            DiffOperation::Add { path, .. }
            | DiffOperation::Remove { path }
            | DiffOperation::Replace { path, .. }
            | DiffOperation::Test { path, .. }
            | DiffOperation::Move { path, .. }
            | DiffOperation::Copy { path, .. } => path,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            DiffOperation::Add { value, .. }
            | DiffOperation::Replace { value, .. }
            | DiffOperation::Test { value, .. } => Some(value),
            DiffOperation::Remove { .. } | DiffOperation::Move { .. } | DiffOperation::Copy { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredPatch {
    #[serde(default)]
    pub before: DatasetSnapshot,
    #[serde(default)]
    pub after: DatasetSnapshot,
    #[serde(default)]
    pub diff: Vec<DiffOperation>,
}

impl StructuredPatch {
    pub fn has_operation(&self, kind: DiffOperationKind) -> bool {
        self.diff.iter().any(|operation| operation.kind() == kind)
    }
}

#[cfg(test)]
#[path = "patch_test.rs"]
mod tests;
