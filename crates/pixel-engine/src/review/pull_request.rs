use crate::changeset::{
    classify_change_set, manual_review_faq, manual_review_reason, ChangeSet, ChangeSetClass,
    DEFAULT_DATASET_FILE,
};
use crate::report::Reporter;
use crate::validator::{PatchError, PatchValidator, ValidatorOptions, Verdict};
use pixel_core::StructuredPatch;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_THANK_YOU_MESSAGE: &str = "Thank you so much for contributing your pixel! 💖";

const EMPTY_CHANGE_SET: &str = "This PR is empty and needs a manual review";

/// Supplies the structured patch for one file of the pull request.
pub trait PatchSource {
    fn json_patch_for_file(&self, path: &str) -> Result<StructuredPatch, PatchSourceError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchSourceError {
    #[error("no structured patch available for `{0}`")]
    MissingFile(String),
    #[error("structured patch for `{path}` could not be read: {reason}")]
    Unreadable { path: String, reason: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("patch retrieval failed: {0}")]
    PatchSource(#[from] PatchSourceError),
    #[error("patch validation aborted: {0}")]
    Patch(#[from] PatchError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOptions {
    pub dataset_file: String,
    pub thank_you_message: String,
    pub validator: ValidatorOptions,
}

impl Default for ReviewOptions {
    fn default() -> Self {
        Self {
            dataset_file: DEFAULT_DATASET_FILE.to_string(),
            thank_you_message: DEFAULT_THANK_YOU_MESSAGE.to_string(),
            validator: ValidatorOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReviewOutcome {
    Empty,
    ManualReview { files: Vec<String> },
    Rejected { verdict: Verdict },
    Accepted { verdict: Verdict },
}

impl ReviewOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ReviewOutcome::Accepted { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            ReviewOutcome::Empty => "empty",
            ReviewOutcome::ManualReview { .. } => "manual_review",
            ReviewOutcome::Rejected { .. } => "rejected",
            ReviewOutcome::Accepted { .. } => "accepted",
        }
    }
}

/// Runs the change-set gate, then the patch validator on the dataset file.
/// Every finding goes to `reporter`; the returned outcome mirrors it.
pub fn review_pull_request(
    change_set: &ChangeSet,
    source: &dyn PatchSource,
    submitter: &str,
    options: &ReviewOptions,
    reporter: &mut dyn Reporter,
) -> Result<ReviewOutcome, ReviewError> {
    match classify_change_set(change_set, &options.dataset_file) {
        ChangeSetClass::Empty => {
            info!(submitter, "change set is empty");
            reporter.fail(EMPTY_CHANGE_SET);
            Ok(ReviewOutcome::Empty)
        }
        ChangeSetClass::ManualReview { files } => {
            info!(submitter, files = files.len(), "change set touches more than the dataset file");
            reporter.fail(&manual_review_reason(&options.dataset_file));
            reporter.markdown(&manual_review_faq(&files, &options.dataset_file));
            Ok(ReviewOutcome::ManualReview { files })
        }
        ChangeSetClass::DatasetOnly => {
            let patch = source.json_patch_for_file(&options.dataset_file)?;
            let validator = PatchValidator::new(options.validator.clone())?;
            let verdict = validator.evaluate(&patch, submitter)?;
            for reason in &verdict.reasons {
                reporter.fail(&reason.message);
            }
            if verdict.passed {
                info!(submitter, "pixel contribution accepted");
                reporter.message(&options.thank_you_message);
                Ok(ReviewOutcome::Accepted { verdict })
            } else {
                warn!(submitter, reasons = verdict.reasons.len(), "pixel contribution rejected");
                Ok(ReviewOutcome::Rejected { verdict })
            }
        }
    }
}

#[cfg(test)]
#[path = "pull_request_test.rs"]
mod tests;
