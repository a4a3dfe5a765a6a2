//! Submission batch types.

use crate::record::Dissertation;

/// Header metadata stamped onto a batch at construction time.
///
/// Each batch is an independent submission unit and carries its own id and
/// timestamp; the registration protocol requires distinct ids per unit.
#[derive(Debug, Clone)]
pub struct BatchHeader {
    /// Run timestamp in whole seconds, offset per batch when pinned.
    pub batch_id: i64,
    /// High-resolution timestamp in nanoseconds.
    pub timestamp: i64,
    pub depositor_name: String,
    pub depositor_email: String,
    pub registrant: String,
}

/// A bounded ordered group of assigned dissertations.
///
/// Immutable after construction; consumed by the renderer.
#[derive(Debug, Clone)]
pub struct Batch {
    pub header: BatchHeader,
    pub records: Vec<Dissertation>,
}

impl Batch {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
