mod collector;

pub use collector::{ReportCollector, ReportEntry, ReportLevel};

/// Sink for everything a review wants to tell the submitter.
pub trait Reporter {
    fn message(&mut self, text: &str);
    fn fail(&mut self, reason: &str);
    fn markdown(&mut self, text: &str);
}
