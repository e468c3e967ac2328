pub mod issues;
pub mod patch;
pub mod patch_path;
pub mod record;

pub use issues::{Rejection, RejectionKind};
pub use patch::{DatasetSnapshot, DiffOperation, DiffOperationKind, StructuredPatch};
pub use patch_path::{PatchPath, PatchPathError, PatchPathParser, DEFAULT_RECORD_PATH_PREFIX};
pub use record::{Axis, PixelRecord, DEFAULT_UNCLAIMED_SENTINEL};
