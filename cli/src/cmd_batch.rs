//! `swapcodec batch` — decode a JSONL file of transactions.
//!
//! Input format, one object per line:
//! ```json
//! {"calldata": "0x38ed1739...", "version": "v2", "txHash": "0xabc...", "to": "0x7a25...", "value": "0"}
//! ```
//! Records are written to stdout as JSONL.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::io::{BufRead, BufReader};
use std::sync::Arc;
use std::time::Instant;
use swapcodec_batch::{BatchEngine, BatchRequest, RawTransaction};
use swapcodec_core::{BatchConfig, DecoderConfig, ProtocolVersion, TxMetadata};
use swapcodec_observability::SwapCodecMetrics;
use swapcodec_uniswap::{router, UniswapDecoder};
use tracing::info;

#[derive(Deserialize)]
struct Line {
    calldata: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(rename = "txHash", default)]
    tx_hash: String,
    #[serde(default)]
    to: String,
    #[serde(default = "zero")]
    value: String,
}

fn zero() -> String {
    "0".into()
}

impl Line {
    fn into_raw(self) -> Result<RawTransaction> {
        let version: ProtocolVersion = match &self.version {
            Some(v) => v.parse()?,
            None => router::version_for_router(&self.to)
                .with_context(|| format!("no version and unknown router '{}'", self.to))?,
        };
        let meta = TxMetadata::new(self.tx_hash, self.to).with_value(self.value);
        Ok(RawTransaction::from_hex(&self.calldata, version, meta)?)
    }
}

pub fn run(decoder_cfg: &DecoderConfig, batch_cfg: &BatchConfig, input: &str) -> Result<()> {
    let file = std::fs::File::open(input).with_context(|| format!("open '{}'", input))?;

    let mut txs = Vec::new();
    for (n, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: Line = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid JSON", input, n + 1))?;
        txs.push(parsed.into_raw().with_context(|| format!("{}:{}", input, n + 1))?);
    }

    let metrics = SwapCodecMetrics::global();
    metrics.record_batch(txs.len());

    let engine = BatchEngine::new(Arc::new(UniswapDecoder::with_config(decoder_cfg.clone())));
    let req = BatchRequest::with_config(txs, batch_cfg).on_progress(|done, total| {
        info!("batch progress: {}/{}", done, total);
    });

    let start = Instant::now();
    let result = engine.decode(req)?;
    let elapsed = start.elapsed();
    metrics.record_latency(elapsed.as_secs_f64() * 1_000.0, "batch");

    for rec in &result.records {
        metrics.record_decoded(rec);
        println!("{}", serde_json::to_string(rec)?);
    }
    for (idx, err) in &result.errors {
        metrics.record_error("batch", err);
        eprintln!("  ✗ transaction {}: {}", idx, err);
    }

    eprintln!();
    eprintln!("Results:");
    eprintln!("  Transactions: {}", result.total_input);
    eprintln!("  Records:      {}", result.records.len());
    eprintln!("  Errors:       {}", result.errors.len());
    eprintln!("  Skipped:      {}", result.skipped);
    eprintln!("  Duration:     {:.3}s", elapsed.as_secs_f64());
    Ok(())
}
