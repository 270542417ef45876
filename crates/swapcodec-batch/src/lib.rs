//! # swapcodec-batch
//!
//! High-throughput batch decoding of router transactions, e.g. a whole block
//! or a historical backfill.
//!
//! ## Features
//! - Memory-bounded chunking (default 10,000 transactions per chunk)
//! - CPU-parallel decoding via Rayon
//! - Progress callbacks (for progress bars / ETAs)
//! - Three error modes: Skip, Collect, Throw
//!
//! ## Usage
//! ```no_run
//! use std::sync::Arc;
//! use swapcodec_batch::{BatchEngine, BatchRequest};
//!
//! // let engine = BatchEngine::new(Arc::new(UniswapDecoder::new()));
//! // let result = engine.decode(BatchRequest::new(txs))?;
//! ```

pub mod engine;
pub mod request;

pub use engine::{parallel_decode, BatchEngine, BatchResult};
pub use request::{BatchRequest, RawTransaction};
