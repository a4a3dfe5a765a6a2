//! Conversion pipeline with explicit stages.
//!
//! 1. **Collect**: read the export, validate each row, mint a DOI per record
//! 2. **Batch**: group assigned records into submission units
//! 3. **Render**: write batch XML documents and the audit report
//!
//! Output files are created only after the whole input has validated and
//! every DOI is assigned, so a fatal row never leaves a half-written batch or
//! report behind.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use etd_core::{Confirm, DoiMinter, build_batches, has_registered_doi, validate_record};
use etd_ingest::ExportReader;
use etd_model::{Batch, Dissertation, RunConfig, RunSummary};
use etd_report::{ReportWriter, batch_output_path, write_crossref_xml};

/// Result of the collect stage.
#[derive(Debug)]
pub struct CollectResult {
    /// Validated records in input order, each with its DOI assigned.
    pub dissertations: Vec<Dissertation>,
    /// Rows read from the export, including skipped ones.
    pub records_read: usize,
    /// Rows skipped because they already carry a DOI URL.
    pub skipped_existing: usize,
}

/// Read, validate, and assign DOIs across the whole export in one pass.
pub fn collect(
    input: &Path,
    config: &RunConfig,
    confirm: &mut dyn Confirm,
) -> Result<CollectResult> {
    let collect_span = info_span!("collect", input = %input.display());
    let _collect_guard = collect_span.enter();
    let collect_start = Instant::now();

    let mut reader =
        ExportReader::open(input).with_context(|| format!("open {}", input.display()))?;
    let mut minter = DoiMinter::new(config);
    let mut dissertations = Vec::new();
    let mut records_read = 0usize;
    let mut skipped_existing = 0usize;

    while let Some(record) = reader.next_record() {
        let record = record.context("read export")?;
        records_read += 1;

        if has_registered_doi(&record) {
            skipped_existing += 1;
            debug!(line = record.line, "record already has a doi, skipped");
            continue;
        }

        let mut dissertation = validate_record(&record, config, confirm)?;
        dissertation.doi = minter.mint(&dissertation)?;
        dissertations.push(dissertation);
    }

    info!(
        records_read,
        skipped_existing,
        registered = dissertations.len(),
        duration_ms = collect_start.elapsed().as_millis(),
        "collect complete"
    );

    Ok(CollectResult {
        dissertations,
        records_read,
        skipped_existing,
    })
}

/// Paths produced by the render stage.
#[derive(Debug)]
pub struct RenderResult {
    pub xml_paths: Vec<PathBuf>,
    pub report_path: PathBuf,
}

/// Write every batch document plus the audit report.
pub fn render(
    batches: &[Batch],
    xml_path: &Path,
    report_path: &Path,
    config: &RunConfig,
) -> Result<RenderResult> {
    let render_span = info_span!("render");
    let _render_guard = render_span.enter();
    let render_start = Instant::now();

    let mut report = ReportWriter::create(report_path)?;
    let mut xml_paths = Vec::new();
    for (index, batch) in batches.iter().enumerate() {
        let path = batch_output_path(xml_path, index);
        write_crossref_xml(&path, batch, config)?;
        report.append_batch(batch)?;
        debug!(
            batch_id = batch.header.batch_id,
            record_count = batch.record_count(),
            path = %path.display(),
            "batch written"
        );
        xml_paths.push(path);
    }
    report.finish()?;

    info!(
        batch_count = batches.len(),
        report = %report_path.display(),
        duration_ms = render_start.elapsed().as_millis(),
        "render complete"
    );

    Ok(RenderResult {
        xml_paths,
        report_path: report_path.to_path_buf(),
    })
}

/// Run the whole pipeline and describe the outcome.
pub fn run(
    input: &Path,
    xml_path: &Path,
    report_path: &Path,
    config: &RunConfig,
    confirm: &mut dyn Confirm,
) -> Result<RunSummary> {
    let collected = collect(input, config, confirm)?;
    let batches = build_batches(collected.dissertations, config);
    let rendered = render(&batches, xml_path, report_path, config)?;

    Ok(RunSummary {
        records_read: collected.records_read,
        skipped_existing: collected.skipped_existing,
        registered: batches.iter().map(Batch::record_count).sum(),
        batch_count: batches.len(),
        xml_paths: rendered.xml_paths,
        report_path: rendered.report_path,
    })
}
