mod faq;
mod gate;

pub use faq::manual_review_faq;
pub(crate) use faq::manual_review_reason;
pub use gate::{classify_change_set, ChangeSet, ChangeSetClass, DEFAULT_DATASET_FILE};
