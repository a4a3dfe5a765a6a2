//! Run outcome reported to the operator.

use std::path::PathBuf;

use serde::Serialize;

/// Counts and output locations for one completed run.
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Rows read from the export, including skipped ones.
    pub records_read: usize,
    /// Rows skipped because the export already carries a DOI URL.
    pub skipped_existing: usize,
    /// Dissertations assigned a DOI and written out.
    pub registered: usize,
    pub batch_count: usize,
    pub xml_paths: Vec<PathBuf>,
    pub report_path: PathBuf,
}
