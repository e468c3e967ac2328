use super::{
    review_pull_request, PatchSource, PatchSourceError, ReviewError, ReviewOptions, ReviewOutcome,
    DEFAULT_THANK_YOU_MESSAGE,
};
use crate::changeset::ChangeSet;
use crate::report::{ReportCollector, ReportLevel};
use pixel_core::StructuredPatch;
use serde_json::{json, Value};
use std::cell::Cell;

struct FixedPatchSource {
    file: String,
    patch: StructuredPatch,
    calls: Cell<usize>,
}

impl FixedPatchSource {
    fn new(diff: Value, before: Value, after: Value) -> Self {
        Self {
            file: "_data/pixels.json".to_string(),
            patch: serde_json::from_value(json!({
                "before": {"data": before},
                "after": {"data": after},
                "diff": diff
            }))
            .expect("patch fixture must decode"),
            calls: Cell::new(0),
        }
    }
}

impl PatchSource for FixedPatchSource {
    fn json_patch_for_file(&self, path: &str) -> Result<StructuredPatch, PatchSourceError> {
        self.calls.set(self.calls.get() + 1);
        if path == self.file {
            Ok(self.patch.clone())
        } else {
            Err(PatchSourceError::MissingFile(path.to_string()))
        }
    }
}

fn dataset_change(lines: u64) -> ChangeSet {
    ChangeSet {
        modified_files: vec!["_data/pixels.json".to_string()],
        lines_of_code: lines,
        ..ChangeSet::default()
    }
}

fn add_source(username: &str) -> FixedPatchSource {
    FixedPatchSource::new(
        json!([{"op": "add", "path": "/data/0", "value": {"x": 1, "y": 2, "color": "#fff", "username": username}}]),
        json!([]),
        json!([{"x": 1, "y": 2, "color": "#fff", "username": username}]),
    )
}

#[test]
fn accepted_contribution_is_thanked() {
    let source = add_source("alice");
    let mut reporter = ReportCollector::new();

    let outcome = review_pull_request(
        &dataset_change(1),
        &source,
        "alice",
        &ReviewOptions::default(),
        &mut reporter,
    )
    .expect("review must succeed");

    assert!(outcome.is_accepted());
    assert_eq!(outcome.status(), "accepted");
    assert!(!reporter.has_failures());
    assert_eq!(reporter.messages().collect::<Vec<_>>(), vec![DEFAULT_THANK_YOU_MESSAGE]);
}

#[test]
fn rejected_contribution_reports_each_reason_as_failure() {
    let source = FixedPatchSource::new(
        json!([{"op": "add", "path": "/data/0", "value": {"username": "bob"}}]),
        json!([]),
        json!([]),
    );
    let mut reporter = ReportCollector::new();

    let outcome = review_pull_request(
        &dataset_change(1),
        &source,
        "alice",
        &ReviewOptions::default(),
        &mut reporter,
    )
    .expect("review must succeed");

    match outcome {
        ReviewOutcome::Rejected { verdict } => assert_eq!(verdict.reasons.len(), 4),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(reporter.failures().count(), 4);
    assert_eq!(reporter.messages().count(), 0);
}

#[test]
fn multi_file_change_skips_the_validator() {
    let source = add_source("alice");
    let mut reporter = ReportCollector::new();
    let change_set = ChangeSet {
        modified_files: vec!["_data/pixels.json".to_string(), "README.md".to_string()],
        lines_of_code: 7,
        ..ChangeSet::default()
    };

    let outcome = review_pull_request(&change_set, &source, "alice", &ReviewOptions::default(), &mut reporter)
        .expect("review must succeed");

    assert_eq!(
        outcome,
        ReviewOutcome::ManualReview {
            files: vec!["_data/pixels.json".to_string(), "README.md".to_string()],
        }
    );
    assert_eq!(source.calls.get(), 0);
    let entries = reporter.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].level, ReportLevel::Fail);
    assert!(entries[0].text.contains("requires a manual review"));
    assert_eq!(entries[1].level, ReportLevel::Markdown);
    assert!(entries[1].text.contains("- README.md"));
    assert!(entries[1].text.contains("- _data/pixels.json"));
}

#[test]
fn empty_change_set_is_flagged_without_fetching_the_patch() {
    let source = add_source("alice");
    let mut reporter = ReportCollector::new();

    let outcome = review_pull_request(
        &dataset_change(0),
        &source,
        "alice",
        &ReviewOptions::default(),
        &mut reporter,
    )
    .expect("review must succeed");

    assert_eq!(outcome, ReviewOutcome::Empty);
    assert_eq!(source.calls.get(), 0);
    assert_eq!(
        reporter.failures().collect::<Vec<_>>(),
        vec!["This PR is empty and needs a manual review"]
    );
}

#[test]
fn patch_source_failure_propagates() {
    let source = add_source("alice");
    let mut reporter = ReportCollector::new();
    let options = ReviewOptions {
        dataset_file: "data/grid.json".to_string(),
        ..ReviewOptions::default()
    };
    let change_set = ChangeSet {
        modified_files: vec!["data/grid.json".to_string()],
        lines_of_code: 2,
        ..ChangeSet::default()
    };

    let error = review_pull_request(&change_set, &source, "alice", &options, &mut reporter)
        .expect_err("missing patch must fail");
    assert_eq!(
        error,
        ReviewError::PatchSource(PatchSourceError::MissingFile("data/grid.json".to_string()))
    );
    assert!(reporter.entries().is_empty());
}

#[test]
fn malformed_patch_aborts_the_review() {
    let source = FixedPatchSource::new(
        json!([
            {"op": "replace", "path": "/data/0/color", "value": "#fff"},
            {"op": "replace", "path": "/rows/0/color", "value": "#fff"}
        ]),
        json!([]),
        json!([]),
    );
    let mut reporter = ReportCollector::new();

    let error = review_pull_request(
        &dataset_change(2),
        &source,
        "alice",
        &ReviewOptions::default(),
        &mut reporter,
    )
    .expect_err("malformed path must fail");
    assert!(matches!(error, ReviewError::Patch(_)));
}
