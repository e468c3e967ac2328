use crate::cli::{CheckCommand, OutputFormat, ValidateCommand};
use crate::config::{resolve_runner_config, RunnerConfigError};
use crate::io::{load_pull_request_event, load_structured_patch, DocumentLoadError};
use pixel_engine::{
    review_pull_request, PatchError, PatchValidator, ReportCollector, ReportLevel, Reporter,
    ReviewError, ReviewOutcome, Verdict,
};
use serde_json::json;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("runner config load failed: {0}")]
    Config(#[from] RunnerConfigError),
    #[error(transparent)]
    Document(#[from] DocumentLoadError),
    #[error("review failed: {0}")]
    Review(#[from] ReviewError),
    #[error("patch validation aborted: {0}")]
    Patch(#[from] PatchError),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

/// Rendered report plus whether the contribution may be merged automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub rendered: String,
    pub passed: bool,
}

pub fn execute_check(command: &CheckCommand) -> Result<CommandOutput, RunnerError> {
    let config = resolve_runner_config(command.config.as_deref())?;
    let event = load_pull_request_event(&command.event)?;
    info!(
        submitter = %event.submitter,
        dataset_file = %config.dataset_file,
        "reviewing pull request event"
    );

    let mut reporter = ReportCollector::new();
    let outcome = review_pull_request(
        &event.change_set,
        &event,
        &event.submitter,
        &config.review_options(),
        &mut reporter,
    )?;

    let rendered = render_check_output(&command.format, &event.submitter, &outcome, &reporter)?;
    Ok(CommandOutput {
        rendered,
        passed: outcome.is_accepted(),
    })
}

pub fn execute_validate(command: &ValidateCommand) -> Result<CommandOutput, RunnerError> {
    let config = resolve_runner_config(command.config.as_deref())?;
    let patch = load_structured_patch(&command.patch)?;
    let validator = PatchValidator::new(config.validator_options())?;
    let verdict = validator.evaluate(&patch, &command.submitter)?;
    info!(
        submitter = %command.submitter,
        passed = verdict.passed,
        reasons = verdict.reasons.len(),
        "patch validated"
    );

    let rendered = render_validate_output(&command.format, &command.submitter, &verdict)?;
    Ok(CommandOutput {
        rendered,
        passed: verdict.passed,
    })
}

fn render_check_output(
    format: &OutputFormat,
    submitter: &str,
    outcome: &ReviewOutcome,
    reporter: &ReportCollector,
) -> Result<String, RunnerError> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "schema": "pixel-runner-check/0.0.1",
            "status": outcome.status(),
            "submitter": submitter,
            "outcome": outcome,
            "report": reporter.entries(),
            "digest": reporter.digest(),
        }))?,
        OutputFormat::Text => {
            let mut lines = vec![
                "pixel review".to_string(),
                format!("status: {}", outcome.status()),
                format!("submitter: {submitter}"),
                format!("digest: {}", reporter.digest()),
            ];
            for entry in reporter.entries() {
                match entry.level {
                    ReportLevel::Fail => lines.push(format!("fail: {}", entry.text)),
                    ReportLevel::Message => lines.push(format!("message: {}", entry.text)),
                    ReportLevel::Markdown => {
                        lines.push("markdown:".to_string());
                        lines.push(entry.text.clone());
                    }
                }
            }
            lines.join("\n")
        }
        OutputFormat::Markdown => render_markdown(reporter),
    };
    Ok(output)
}

fn render_markdown(reporter: &ReportCollector) -> String {
    let mut sections = Vec::<String>::new();
    let failures = reporter.failures().collect::<Vec<_>>();
    if !failures.is_empty() {
        let mut block = vec!["| | Fails |".to_string(), "| --- | --- |".to_string()];
        block.extend(failures.iter().map(|text| format!("| :no_entry_sign: | {text} |")));
        sections.push(block.join("\n"));
    }
    let messages = reporter.messages().collect::<Vec<_>>();
    if !messages.is_empty() {
        let mut block = vec!["| | Messages |".to_string(), "| --- | --- |".to_string()];
        block.extend(messages.iter().map(|text| format!("| :book: | {text} |")));
        sections.push(block.join("\n"));
    }
    sections.extend(reporter.markdowns().map(str::to_string));
    sections.join("\n\n")
}

fn render_validate_output(
    format: &OutputFormat,
    submitter: &str,
    verdict: &Verdict,
) -> Result<String, RunnerError> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "schema": "pixel-runner-validate/0.0.1",
            "submitter": submitter,
            "passed": verdict.passed,
            "reasons": verdict.reasons,
        }))?,
        OutputFormat::Text => {
            let mut lines = vec![
                "pixel validate".to_string(),
                format!("submitter: {submitter}"),
                format!("passed: {}", verdict.passed),
                format!("reasons: {}", verdict.reasons.len()),
            ];
            for reason in &verdict.reasons {
                lines.push(format!(
                    "- [{}] {} ({})",
                    reason.kind.as_str(),
                    reason.message,
                    reason.pointer.as_deref().unwrap_or("-")
                ));
            }
            lines.join("\n")
        }
        OutputFormat::Markdown => {
            let mut reporter = ReportCollector::new();
            for reason in &verdict.reasons {
                reporter.fail(&reason.message);
            }
            render_markdown(&reporter)
        }
    };
    Ok(output)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
