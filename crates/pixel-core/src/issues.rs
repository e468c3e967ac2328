use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// Wrong files touched, empty change, or a change spanning several records.
    Structural,
    /// Deleting or overwriting a record claimed by someone else.
    Ownership,
    IdentityMismatch,
    FieldValidity,
}

impl RejectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectionKind::Structural => "structural",
            RejectionKind::Ownership => "ownership",
            RejectionKind::IdentityMismatch => "identity_mismatch",
            RejectionKind::FieldValidity => "field_validity",
        }
    }
}

/// A soft rejection reported back to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub reference: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pointer: Option<String>,
}

impl Rejection {
    pub fn new(kind: RejectionKind, reference: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            reference: reference.to_string(),
            message: message.into(),
            pointer: None,
        }
    }

    pub fn at(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = Some(pointer.into());
        self
    }
}

impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod tests;
