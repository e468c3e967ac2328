use pixel_core::{PatchPathParser, DEFAULT_RECORD_PATH_PREFIX, DEFAULT_UNCLAIMED_SENTINEL};
use pixel_engine::{ReviewOptions, ValidatorOptions, DEFAULT_DATASET_FILE, DEFAULT_THANK_YOU_MESSAGE};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_schema")]
    pub schema: String,
    #[serde(default = "default_dataset_file")]
    pub dataset_file: String,
    #[serde(default = "default_unclaimed_sentinel")]
    pub unclaimed_sentinel: String,
    #[serde(default = "default_record_path_prefix")]
    pub record_path_prefix: String,
    #[serde(default = "default_thank_you_message")]
    pub thank_you_message: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema: default_runner_schema(),
            dataset_file: default_dataset_file(),
            unclaimed_sentinel: default_unclaimed_sentinel(),
            record_path_prefix: default_record_path_prefix(),
            thank_you_message: default_thank_you_message(),
        }
    }
}

impl RunnerConfig {
    pub fn validator_options(&self) -> ValidatorOptions {
        ValidatorOptions {
            unclaimed_sentinel: self.unclaimed_sentinel.clone(),
            record_path_prefix: self.record_path_prefix.clone(),
        }
    }

    pub fn review_options(&self) -> ReviewOptions {
        ReviewOptions {
            dataset_file: self.dataset_file.clone(),
            thank_you_message: self.thank_you_message.clone(),
            validator: self.validator_options(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigIssue {
    pub field: String,
    pub reference: String,
    pub message: String,
}

impl Display for ConfigIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} [{}]", self.field, self.message, self.reference)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerConfigError {
    #[error("read runner config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config parse failed: {0}")]
    Parse(String),
    #[error("runner config validation failed: {}", render_issues(.0))]
    Validation(Vec<ConfigIssue>),
}

pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str()).map_err(RunnerConfigError::Parse)?;
    let config: RunnerConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("json decode error: {error}"))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("yaml decode error: {error}"))
        })?,
        _ => serde_yaml::from_str(expanded.as_str())
            .or_else(|_| serde_json::from_str(expanded.as_str()))
            .map_err(|error| RunnerConfigError::Parse(error.to_string()))?,
    };

    let issues = validate_runner_config(&config);
    if !issues.is_empty() {
        return Err(RunnerConfigError::Validation(issues));
    }
    Ok(config)
}

/// Loads `path` when given, otherwise falls back to the built-in defaults.
pub fn resolve_runner_config(path: Option<&Path>) -> Result<RunnerConfig, RunnerConfigError> {
    match path {
        Some(path) => load_runner_config(path),
        None => Ok(RunnerConfig::default()),
    }
}

pub fn validate_runner_config(config: &RunnerConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    if config.schema != default_runner_schema() {
        issues.push(config_issue(
            "schema",
            "runner.config.schema",
            format!(
                "unsupported runner config schema `{}` (expected `{}`)",
                config.schema,
                default_runner_schema()
            ),
        ));
    }
    if config.dataset_file.trim().is_empty() {
        issues.push(config_issue(
            "dataset_file",
            "runner.config.dataset_file.non_empty",
            "dataset_file must name the pixel dataset file".to_string(),
        ));
    } else if config.dataset_file.starts_with('/') {
        issues.push(config_issue(
            "dataset_file",
            "runner.config.dataset_file.relative",
            format!(
                "dataset_file `{}` must be relative to the repository root",
                config.dataset_file
            ),
        ));
    }
    if config.unclaimed_sentinel.is_empty() {
        issues.push(config_issue(
            "unclaimed_sentinel",
            "runner.config.unclaimed_sentinel.non_empty",
            "unclaimed_sentinel must be non-empty".to_string(),
        ));
    }
    if let Err(error) = PatchPathParser::new(config.record_path_prefix.clone()) {
        issues.push(config_issue(
            "record_path_prefix",
            "runner.config.record_path_prefix",
            error.to_string(),
        ));
    }
    if config.thank_you_message.trim().is_empty() {
        issues.push(config_issue(
            "thank_you_message",
            "runner.config.thank_you_message.non_empty",
            "thank_you_message must be non-empty".to_string(),
        ));
    }
    issues
}

fn config_issue(field: &str, reference: &str, message: String) -> ConfigIssue {
    ConfigIssue {
        field: field.to_string(),
        reference: reference.to_string(),
        message,
    }
}

fn render_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ConfigIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn default_runner_schema() -> String {
    "pixel-runner/0.0.1".to_string()
}

fn default_dataset_file() -> String {
    DEFAULT_DATASET_FILE.to_string()
}

fn default_unclaimed_sentinel() -> String {
    DEFAULT_UNCLAIMED_SENTINEL.to_string()
}

fn default_record_path_prefix() -> String {
    DEFAULT_RECORD_PATH_PREFIX.to_string()
}

fn default_thank_you_message() -> String {
    DEFAULT_THANK_YOU_MESSAGE.to_string()
}

fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    while let Some(start_offset) = input[cursor..].find("${") {
        let start = cursor + start_offset;
        out.push_str(&input[cursor..start]);
        let var_start = start + 2;
        let Some(end_offset) = input[var_start..].find('}') else {
            return Err("unterminated env placeholder `${...`".to_string());
        };
        let end = var_start + end_offset;
        let key = &input[var_start..end];
        if key.is_empty() {
            return Err("empty env placeholder `${}`".to_string());
        }
        let value = std::env::var(key)
            .map_err(|_| format!("missing env var for placeholder `${{{key}}}`"))?;
        out.push_str(value.as_str());
        cursor = end + 1;
    }
    out.push_str(&input[cursor..]);
    Ok(out)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
