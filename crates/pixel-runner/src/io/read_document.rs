use pixel_core::StructuredPatch;
use pixel_engine::{ChangeSet, PatchSource, PatchSourceError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A pull request as handed over by the CI integration: who opened it, which
/// files it touches, and the structured patch for each JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequestEvent {
    pub submitter: String,
    #[serde(default)]
    pub change_set: ChangeSet,
    #[serde(default)]
    pub patches: BTreeMap<String, StructuredPatch>,
}

impl PatchSource for PullRequestEvent {
    fn json_patch_for_file(&self, path: &str) -> Result<StructuredPatch, PatchSourceError> {
        self.patches
            .get(path)
            .cloned()
            .ok_or_else(|| PatchSourceError::MissingFile(path.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentLoadError {
    #[error("read file failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("decode failed `{path}`: {reason}")]
    Decode { path: String, reason: String },
    #[error("document `{path}` is invalid: {reason}")]
    Invalid { path: String, reason: String },
}

pub fn load_pull_request_event(path: &Path) -> Result<PullRequestEvent, DocumentLoadError> {
    let event: PullRequestEvent = load_document(path)?;
    if event.submitter.trim().is_empty() {
        return Err(DocumentLoadError::Invalid {
            path: path.display().to_string(),
            reason: "submitter must be non-empty".to_string(),
        });
    }
    Ok(event)
}

pub fn load_structured_patch(path: &Path) -> Result<StructuredPatch, DocumentLoadError> {
    load_document(path)
}

fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| DocumentLoadError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let decode_error = |reason: String| DocumentLoadError::Decode {
        path: path.display().to_string(),
        reason,
    };
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(raw.as_str())
            .map_err(|error| decode_error(format!("yaml decode error: {error}"))),
        Some("json") => serde_json::from_str(raw.as_str())
            .map_err(|error| decode_error(format!("json decode error: {error}"))),
        _ => serde_json::from_str(raw.as_str())
            .or_else(|_| serde_yaml::from_str(raw.as_str()))
            .map_err(|error| decode_error(error.to_string())),
    }
}

#[cfg(test)]
#[path = "read_document_test.rs"]
mod tests;
