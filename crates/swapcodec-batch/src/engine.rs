//! `BatchEngine` — orchestrates chunked, parallel batch decoding.

use crate::request::{BatchRequest, RawTransaction};
use rayon::prelude::*;
use std::sync::Arc;
use swapcodec_core::{BatchDecodeError, CalldataDecoder, DecodeError, ErrorMode, SwapRecord};
use tracing::{info, warn};

/// Result of a batch decode job.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Decoded records, in input order
    pub records: Vec<SwapRecord>,
    /// (original_index, error) pairs — only populated in Collect mode
    pub errors: Vec<(usize, DecodeError)>,
    /// Transactions dropped in Skip mode
    pub skipped: usize,
    /// Total transactions processed
    pub total_input: usize,
}

/// Decode `txs` in parallel.
///
/// Records come back in input order; errors are paired with the index of the
/// failing transaction.
pub fn parallel_decode(
    decoder: &dyn CalldataDecoder,
    txs: &[RawTransaction],
) -> (Vec<SwapRecord>, Vec<(usize, DecodeError)>) {
    let results: Vec<(usize, Result<Vec<SwapRecord>, DecodeError>)> = txs
        .par_iter()
        .enumerate()
        .map(|(idx, tx)| (idx, decoder.decode(&tx.calldata, tx.version, &tx.meta)))
        .collect();

    let mut records = Vec::with_capacity(txs.len());
    let mut errors = Vec::new();
    for (idx, r) in results {
        match r {
            Ok(recs) => records.extend(recs),
            Err(e) => errors.push((idx, e)),
        }
    }
    (records, errors)
}

/// Batch decode engine.
pub struct BatchEngine {
    decoder: Arc<dyn CalldataDecoder>,
}

impl BatchEngine {
    pub fn new(decoder: Arc<dyn CalldataDecoder>) -> Self {
        Self { decoder }
    }

    /// Execute a batch decode request.
    pub fn decode(&self, req: BatchRequest) -> Result<BatchResult, BatchDecodeError> {
        let total_input = req.txs.len();
        let chunk_size = req.chunk_size.max(1);
        info!(
            "BatchEngine: decoding {} transactions with {} (chunk_size={}, mode={:?})",
            total_input,
            self.decoder.protocol(),
            chunk_size,
            req.error_mode
        );

        let mut result = BatchResult {
            records: Vec::with_capacity(total_input),
            total_input,
            ..Default::default()
        };
        let mut global_offset = 0usize;

        for chunk in req.txs.chunks(chunk_size) {
            let (records, errors) = parallel_decode(self.decoder.as_ref(), chunk);

            if !errors.is_empty() {
                warn!(
                    "BatchEngine: {} of {} transactions failed in chunk at {}",
                    errors.len(),
                    chunk.len(),
                    global_offset
                );
            }

            match req.error_mode {
                ErrorMode::Throw => {
                    // results are index-ordered, so the first error is the lowest index
                    if let Some((idx, source)) = errors.into_iter().next() {
                        let index = global_offset + idx;
                        warn!(
                            "BatchEngine: aborting at transaction {} ({}): {}",
                            index, chunk[idx].meta.tx_hash, source
                        );
                        return Err(BatchDecodeError::ItemFailed { index, source });
                    }
                }
                ErrorMode::Collect => {
                    result
                        .errors
                        .extend(errors.into_iter().map(|(i, e)| (global_offset + i, e)));
                }
                ErrorMode::Skip => result.skipped += errors.len(),
            }

            result.records.extend(records);
            global_offset += chunk.len();

            if let Some(cb) = &req.on_progress {
                cb.on_progress(global_offset, total_input);
            }
        }

        info!(
            "BatchEngine: complete — {} records, {} errors, {} skipped",
            result.records.len(),
            result.errors.len(),
            result.skipped
        );
        Ok(result)
    }
}
