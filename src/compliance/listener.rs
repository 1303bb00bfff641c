//! Observers of a run in progress.

use super::result::CheckRecord;
use crate::model::PomDescriptor;

/// Receives records as the checker produces them.
pub trait CheckListener {
    /// A POM is about to be checked.
    fn pom_started(&mut self, _pom: &PomDescriptor) {}

    /// A check completed.
    fn record(&mut self, record: &CheckRecord);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListener;

impl CheckListener for NullListener {
    fn record(&mut self, _record: &CheckRecord) {}
}

/// Collects records in memory, in emission order.
impl CheckListener for Vec<CheckRecord> {
    fn record(&mut self, record: &CheckRecord) {
        self.push(record.clone());
    }
}
