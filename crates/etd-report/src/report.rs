//! CSV audit report mapping source records to assigned DOIs.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use etd_model::Batch;

/// Appends `source_uuid,doi` rows batch by batch. The `URI,DOI` header is
/// written once per report file, not once per batch.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl ReportWriter<File> {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        Self::from_writer(file)
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer
            .write_record(["URI", "DOI"])
            .context("write report header")?;
        Ok(Self { writer })
    }

    pub fn append_batch(&mut self, batch: &Batch) -> Result<()> {
        for record in &batch.records {
            self.writer
                .write_record([record.source_uuid.as_str(), record.doi.as_str()])
                .with_context(|| format!("report row for {}", record.source_uuid))?;
        }
        Ok(())
    }

    /// Flush buffered rows; the report is complete only after this returns.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush().context("flush report")?;
        Ok(())
    }
}
