use regex::Regex;
use std::fmt::{Display, Formatter};

pub const DEFAULT_RECORD_PATH_PREFIX: &str = "/data/";

/// A diff path resolved to a record position and an optional nested field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PatchPath {
    pub record_index: usize,
    pub field: Vec<String>,
}

impl PatchPath {
    pub fn is_whole_record(&self) -> bool {
        self.field.is_empty()
    }

    /// Last field segment, the property being changed.
    pub fn property(&self) -> Option<&str> {
        self.field.last().map(String::as_str)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchPathError {
    #[error("invalid record path prefix `{prefix}`: {reason}")]
    InvalidPrefix { prefix: String, reason: String },
    #[error("path `{path}` does not start with `{prefix}`")]
    MissingPrefix { path: String, prefix: String },
    #[error("path `{path}` does not carry a numeric record index")]
    InvalidIndex { path: String },
    #[error("path `{path}` contains an empty field segment")]
    EmptySegment { path: String },
}

#[derive(Debug, Clone)]
pub struct PatchPathParser {
    prefix: String,
    pattern: Regex,
}

impl PatchPathParser {
    pub fn new(prefix: impl Into<String>) -> Result<Self, PatchPathError> {
        let prefix = prefix.into();
        if !prefix.starts_with('/') || !prefix.ends_with('/') {
            return Err(PatchPathError::InvalidPrefix {
                prefix,
                reason: "prefix must start and end with '/'".to_string(),
            });
        }
        let pattern = Regex::new(&format!(r"^{}(\d+)(?:/(.*))?$", regex::escape(&prefix))).map_err(
            |error| PatchPathError::InvalidPrefix {
                prefix: prefix.clone(),
                reason: error.to_string(),
            },
        )?;
        Ok(Self { prefix, pattern })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn parse(&self, path: &str) -> Result<PatchPath, PatchPathError> {
        if !path.starts_with(&self.prefix) {
            return Err(PatchPathError::MissingPrefix {
                path: path.to_string(),
                prefix: self.prefix.clone(),
            });
        }
        let captures = self
            .pattern
            .captures(path)
            .ok_or_else(|| PatchPathError::InvalidIndex {
                path: path.to_string(),
            })?;
        let record_index = captures
            .get(1)
            .and_then(|index| index.as_str().parse::<usize>().ok())
            .ok_or_else(|| PatchPathError::InvalidIndex {
                path: path.to_string(),
            })?;

        let mut field = Vec::new();
        if let Some(rest) = captures.get(2) {
            for segment in rest.as_str().split('/') {
                if segment.is_empty() {
                    return Err(PatchPathError::EmptySegment {
                        path: path.to_string(),
                    });
                }
                field.push(unescape_segment(segment));
            }
        }

        Ok(PatchPath {
            record_index,
            field,
        })
    }

    /// Renders a path back into pointer form under this parser's prefix.
    pub fn pointer(&self, path: &PatchPath) -> String {
        let mut out = format!("{}{}", self.prefix, path.record_index);
        for segment in &path.field {
            out.push('/');
            out.push_str(&escape_segment(segment));
        }
        out
    }
}

impl Default for PatchPathParser {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_PATH_PREFIX).expect("default record path prefix must compile")
    }
}

impl Display for PatchPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.record_index)?;
        for segment in &self.field {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}

fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
#[path = "patch_path_test.rs"]
mod tests;
