mod read_document;

pub use read_document::{
    load_pull_request_event, load_structured_patch, DocumentLoadError, PullRequestEvent,
};
