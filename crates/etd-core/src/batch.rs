//! Batch construction.

use etd_model::{Batch, BatchHeader, Dissertation, RunConfig};

/// Group assigned dissertations into submission batches.
///
/// With a size cap, records split into consecutive chunks of exactly
/// `max_batch_size` plus a shorter final chunk when a remainder exists;
/// concatenating the batches reproduces the input order. Without a cap the
/// whole run is one batch, even when empty.
///
/// Each batch is an independent submission unit with its own header; ids and
/// timestamps are offset by the batch index and stay distinct even on
/// pinned-timestamp runs.
pub fn build_batches(records: Vec<Dissertation>, config: &RunConfig) -> Vec<Batch> {
    if config.max_batch_size == 0 {
        return vec![Batch {
            header: batch_header(config, 0),
            records,
        }];
    }

    let mut batches = Vec::new();
    let mut rest = records;
    while !rest.is_empty() {
        let take = rest.len().min(config.max_batch_size);
        let remainder = rest.split_off(take);
        batches.push(Batch {
            header: batch_header(config, batches.len()),
            records: rest,
        });
        rest = remainder;
    }
    batches
}

fn batch_header(config: &RunConfig, index: usize) -> BatchHeader {
    let offset = index as i64;
    BatchHeader {
        batch_id: config.run_at.timestamp() + offset,
        timestamp: config.run_at.timestamp_nanos_opt().unwrap_or_default() + offset,
        depositor_name: config.depositor_name.clone(),
        depositor_email: config.depositor_email.clone(),
        registrant: config.registrant.clone(),
    }
}
