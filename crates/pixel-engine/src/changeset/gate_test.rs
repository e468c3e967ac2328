use super::{classify_change_set, ChangeSet, ChangeSetClass, DEFAULT_DATASET_FILE};

fn change_set(modified: &[&str], created: &[&str], deleted: &[&str], lines: u64) -> ChangeSet {
    ChangeSet {
        modified_files: modified.iter().map(|name| name.to_string()).collect(),
        created_files: created.iter().map(|name| name.to_string()).collect(),
        deleted_files: deleted.iter().map(|name| name.to_string()).collect(),
        lines_of_code: lines,
    }
}

#[test]
fn dataset_only_change_passes_the_gate() {
    let class = classify_change_set(&change_set(&[DEFAULT_DATASET_FILE], &[], &[], 4), DEFAULT_DATASET_FILE);
    assert_eq!(class, ChangeSetClass::DatasetOnly);
}

#[test]
fn extra_modified_file_needs_manual_review() {
    let class = classify_change_set(
        &change_set(&["_data/pixels.json", "README.md"], &[], &[], 6),
        DEFAULT_DATASET_FILE,
    );
    assert_eq!(
        class,
        ChangeSetClass::ManualReview {
            files: vec!["_data/pixels.json".to_string(), "README.md".to_string()],
        }
    );
}

#[test]
fn created_or_deleted_files_need_manual_review() {
    let class = classify_change_set(
        &change_set(&[DEFAULT_DATASET_FILE], &["new.txt"], &["old.txt"], 3),
        DEFAULT_DATASET_FILE,
    );
    match class {
        ChangeSetClass::ManualReview { files } => {
            assert_eq!(files, vec![DEFAULT_DATASET_FILE, "new.txt", "old.txt"]);
        }
        other => panic!("expected manual review, got {other:?}"),
    }
}

#[test]
fn other_single_file_needs_manual_review() {
    let class = classify_change_set(&change_set(&["index.html"], &[], &[], 1), DEFAULT_DATASET_FILE);
    assert!(matches!(class, ChangeSetClass::ManualReview { .. }));
}

#[test]
fn zero_changed_lines_is_empty_before_anything_else() {
    let class = classify_change_set(&change_set(&["README.md"], &[], &[], 0), DEFAULT_DATASET_FILE);
    assert_eq!(class, ChangeSetClass::Empty);
}
