mod pull_request;

pub use pull_request::{
    review_pull_request, PatchSource, PatchSourceError, ReviewError, ReviewOptions, ReviewOutcome,
    DEFAULT_THANK_YOU_MESSAGE,
};
