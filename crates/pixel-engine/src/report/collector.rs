use super::Reporter;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLevel {
    Message,
    Fail,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub level: ReportLevel,
    pub text: String,
}

/// Keeps reported entries in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCollector {
    entries: Vec<ReportEntry>,
}

impl ReportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ReportEntry> {
        self.entries
    }

    pub fn failures(&self) -> impl Iterator<Item = &str> {
        self.texts(ReportLevel::Fail)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.texts(ReportLevel::Message)
    }

    pub fn markdowns(&self) -> impl Iterator<Item = &str> {
        self.texts(ReportLevel::Markdown)
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Hex SHA-256 over the ordered entries. Identical reports share a digest.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for entry in &self.entries {
            let level = match entry.level {
                ReportLevel::Message => "message",
                ReportLevel::Fail => "fail",
                ReportLevel::Markdown => "markdown",
            };
            hasher.update(level.as_bytes());
            hasher.update([0u8]);
            hasher.update(entry.text.as_bytes());
            hasher.update([0u8]);
        }
        format!("{:x}", hasher.finalize())
    }

    fn texts(&self, level: ReportLevel) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |entry| entry.level == level)
            .map(|entry| entry.text.as_str())
    }

    fn push(&mut self, level: ReportLevel, text: &str) {
        self.entries.push(ReportEntry {
            level,
            text: text.to_string(),
        });
    }
}

impl Reporter for ReportCollector {
    fn message(&mut self, text: &str) {
        self.push(ReportLevel::Message, text);
    }

    fn fail(&mut self, reason: &str) {
        self.push(ReportLevel::Fail, reason);
    }

    fn markdown(&mut self, text: &str) {
        self.push(ReportLevel::Markdown, text);
    }
}

#[cfg(test)]
#[path = "collector_test.rs"]
mod tests;
