use super::messages;
use super::{PatchError, SnapshotSide, ValidatorOptions, Verdict};
use pixel_core::{
    Axis, DiffOperation, DiffOperationKind, PatchPath, PatchPathParser, PixelRecord, Rejection,
    RejectionKind, StructuredPatch,
};
use tracing::debug;

/// Decides whether a structured patch is an acceptable single-pixel change.
///
/// Structural checks stop at the first failure. Field checks on a record run
/// to completion so that every problem with a submission is reported at once.
#[derive(Debug, Clone)]
pub struct PatchValidator {
    options: ValidatorOptions,
    paths: PatchPathParser,
}

impl PatchValidator {
    pub fn new(options: ValidatorOptions) -> Result<Self, PatchError> {
        let paths = PatchPathParser::new(options.record_path_prefix.clone())?;
        Ok(Self { options, paths })
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    pub fn evaluate(&self, patch: &StructuredPatch, submitter: &str) -> Result<Verdict, PatchError> {
        let mut reasons = Vec::new();
        let passed = self.evaluate_into(patch, submitter, &mut reasons)?;
        debug!(
            submitter,
            operations = patch.diff.len(),
            passed,
            reasons = reasons.len(),
            "patch evaluated"
        );
        Ok(Verdict { passed, reasons })
    }

    fn evaluate_into(
        &self,
        patch: &StructuredPatch,
        submitter: &str,
        reasons: &mut Vec<Rejection>,
    ) -> Result<bool, PatchError> {
        if let [operation] = patch.diff.as_slice() {
            debug!(op = %operation.kind(), path = operation.path(), "single operation patch");
            return match operation {
                DiffOperation::Add { path, value } => Ok(self.is_valid_new_pixel_submission(
                    &PixelRecord::from_value(value),
                    submitter,
                    path,
                    reasons,
                )),
                DiffOperation::Remove { path } => {
                    reasons.push(
                        Rejection::new(RejectionKind::Ownership, "pixel.remove", messages::REMOVE_REFUSED)
                            .at(path.as_str()),
                    );
                    Ok(false)
                }
                DiffOperation::Replace { .. } | DiffOperation::Test { .. } => {
                    self.is_valid_pixel_update(patch, operation, submitter, reasons)
                }
                DiffOperation::Move { path, .. } | DiffOperation::Copy { path, .. } => {
                    reasons.push(
                        Rejection::new(
                            RejectionKind::Structural,
                            "pixel.one_per_identity",
                            messages::ONE_PIXEL_PER_IDENTITY,
                        )
                        .at(path.as_str()),
                    );
                    Ok(false)
                }
            };
        }

        debug!(operations = patch.diff.len(), "multi operation patch");
        if !self.all_patches_are_for_the_same_pixel(patch, reasons)? {
            return Ok(false);
        }
        let Some(representative) = patch.diff.first() else {
            reasons.push(Rejection::new(
                RejectionKind::Structural,
                "change.empty_patch",
                messages::EMPTY_PATCH,
            ));
            return Ok(false);
        };
        self.is_valid_pixel_update(patch, representative, submitter, reasons)
    }

    /// Checks a record as a fresh claim by `submitter`. All four field checks
    /// run regardless of earlier failures.
    pub fn is_valid_new_pixel_submission(
        &self,
        record: &PixelRecord,
        submitter: &str,
        pointer: &str,
        reasons: &mut Vec<Rejection>,
    ) -> bool {
        let mut result = true;

        if !record.is_owned_by(submitter) {
            reasons.push(
                Rejection::new(
                    RejectionKind::IdentityMismatch,
                    "pixel.username.mismatch",
                    messages::username_mismatch(submitter, &record.display_username()),
                )
                .at(field_pointer(pointer, "username")),
            );
            result = false;
        }

        if !record.has_color() {
            reasons.push(
                Rejection::new(RejectionKind::FieldValidity, "pixel.color.missing", messages::MISSING_COLOR)
                    .at(field_pointer(pointer, "color")),
            );
            result = false;
        }

        for axis in [Axis::X, Axis::Y] {
            if !record.has_valid_coordinate(axis) {
                let reference = match axis {
                    Axis::X => "pixel.x.invalid",
                    Axis::Y => "pixel.y.invalid",
                };
                reasons.push(
                    Rejection::new(
                        RejectionKind::FieldValidity,
                        reference,
                        messages::invalid_coordinate(axis.label()),
                    )
                    .at(field_pointer(pointer, axis.label())),
                );
                result = false;
            }
        }

        result
    }

    /// Every operation must address the same record. Deleting a claimed
    /// record is reported first and wins over an index mismatch.
    pub fn all_patches_are_for_the_same_pixel(
        &self,
        patch: &StructuredPatch,
        reasons: &mut Vec<Rejection>,
    ) -> Result<bool, PatchError> {
        if patch.has_operation(DiffOperationKind::Remove) {
            let mut deleted = Vec::new();
            for operation in &patch.diff {
                let DiffOperation::Remove { path } = operation else {
                    continue;
                };
                let index = self.index_from_path(path)?;
                let record = record_at(patch, SnapshotSide::Before, index, path)?;
                if !record.is_unclaimed(&self.options.unclaimed_sentinel) {
                    deleted.push(record.display_username());
                }
            }

            if !deleted.is_empty() {
                debug!(usernames = ?deleted, "patch deletes claimed records");
                reasons.push(Rejection::new(
                    RejectionKind::Ownership,
                    "pixel.remove.claimed",
                    messages::ACCIDENTAL_DELETION,
                ));
                reasons.push(Rejection::new(
                    RejectionKind::Ownership,
                    "pixel.remove.claimed_usernames",
                    messages::deleted_usernames(&deleted),
                ));
                return Ok(false);
            }
        }

        let mut current_index = None;
        for operation in &patch.diff {
            let index = self.index_from_path(operation.path())?;
            match current_index {
                None => current_index = Some(index),
                Some(expected) if expected != index => {
                    debug!(expected, found = index, "patch spans several records");
                    reasons.push(
                        Rejection::new(RejectionKind::Structural, "change.same_row", messages::SAME_ROW)
                            .at(operation.path()),
                    );
                    return Ok(false);
                }
                Some(_) => {}
            }
        }
        Ok(true)
    }

    /// Validates a change to an existing record, driven by one operation.
    pub fn is_valid_pixel_update(
        &self,
        patch: &StructuredPatch,
        operation: &DiffOperation,
        submitter: &str,
        reasons: &mut Vec<Rejection>,
    ) -> Result<bool, PatchError> {
        let path = self.paths.parse(operation.path())?;
        let record_pointer = self.paths.pointer(&PatchPath {
            record_index: path.record_index,
            field: Vec::new(),
        });
        if path.is_whole_record() {
            // A record-level path names the dataset array rather than a pixel,
            // so no field check can hold.
            debug!(path = operation.path(), "update targets a whole record");
            return Ok(self.is_valid_new_pixel_submission(
                &PixelRecord::default(),
                submitter,
                &record_pointer,
                reasons,
            ));
        }
        let new_entry = record_at(patch, SnapshotSide::After, path.record_index, operation.path())?;

        if path.property() == Some("username") {
            let old_entry = record_at(patch, SnapshotSide::Before, path.record_index, operation.path())?;
            if !old_entry.is_unclaimed(&self.options.unclaimed_sentinel) {
                reasons.push(
                    Rejection::new(RejectionKind::Ownership, "pixel.override", messages::OVERRIDE_REFUSED)
                        .at(operation.path()),
                );
                return Ok(false);
            }
            if !new_entry.is_owned_by(submitter) {
                reasons.push(
                    Rejection::new(
                        RejectionKind::IdentityMismatch,
                        "pixel.username.mismatch",
                        messages::username_mismatch(submitter, &new_entry.display_username()),
                    )
                    .at(operation.path()),
                );
                return Ok(false);
            }
        }

        Ok(self.is_valid_new_pixel_submission(new_entry, submitter, &record_pointer, reasons))
    }

    pub fn index_from_path(&self, path: &str) -> Result<usize, PatchError> {
        Ok(self.paths.parse(path)?.record_index)
    }
}

impl Default for PatchValidator {
    fn default() -> Self {
        Self {
            options: ValidatorOptions::default(),
            paths: PatchPathParser::default(),
        }
    }
}

fn record_at<'a>(
    patch: &'a StructuredPatch,
    side: SnapshotSide,
    index: usize,
    path: &str,
) -> Result<&'a PixelRecord, PatchError> {
    let snapshot = match side {
        SnapshotSide::Before => &patch.before,
        SnapshotSide::After => &patch.after,
    };
    snapshot.record(index).ok_or_else(|| PatchError::MissingRecord {
        side,
        index,
        path: path.to_string(),
    })
}

fn field_pointer(record_pointer: &str, field: &str) -> String {
    format!("{}/{field}", record_pointer.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "evaluate_test.rs"]
mod tests;
