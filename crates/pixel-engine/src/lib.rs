pub mod changeset;
pub mod report;
pub mod review;
pub mod validator;

pub use changeset::{
    classify_change_set, manual_review_faq, ChangeSet, ChangeSetClass, DEFAULT_DATASET_FILE,
};
pub use report::{ReportCollector, ReportEntry, ReportLevel, Reporter};
pub use review::{
    review_pull_request, PatchSource, PatchSourceError, ReviewError, ReviewOptions, ReviewOutcome,
    DEFAULT_THANK_YOU_MESSAGE,
};
pub use validator::{PatchError, PatchValidator, SnapshotSide, ValidatorOptions, Verdict};
