//! # swapcodec-observability
//!
//! OpenTelemetry-based observability for SwapCodec.
//!
//! ## Built-in metrics
//! - `swapcodec.records_decoded`    — counter, tagged with version + method
//! - `swapcodec.decode_errors`      — counter, tagged with version + error_type
//! - `swapcodec.multicall_elements` — histogram of inner calls per multicall
//! - `swapcodec.decode_latency_ms`  — histogram
//! - `swapcodec.batch_size`         — histogram
//!
//! ## Structured logging
//! JSON-structured logs compatible with ELK, Loki, CloudWatch.
//! Log levels configurable per component, or through `SWAPCODEC_LOG`.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::SwapCodecMetrics;
pub use tracing_setup::{init_tracing, LogConfig, LOG_ENV};
