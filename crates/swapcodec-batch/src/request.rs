//! Batch decode request configuration.

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};
use swapcodec_core::{
    BatchConfig, DecodeError, ErrorMode, ProgressCallback, ProtocolVersion, TxMetadata,
};

/// One transaction queued for decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Full calldata, selector included
    pub calldata: Bytes,
    /// Which router registry to decode against
    pub version: ProtocolVersion,
    pub meta: TxMetadata,
}

impl RawTransaction {
    pub fn new(calldata: impl Into<Bytes>, version: ProtocolVersion, meta: TxMetadata) -> Self {
        Self {
            calldata: calldata.into(),
            version,
            meta,
        }
    }

    /// Build from `0x` hex calldata.
    pub fn from_hex(
        calldata: &str,
        version: ProtocolVersion,
        meta: TxMetadata,
    ) -> Result<Self, DecodeError> {
        let bytes = swapcodec_core::word::decode_hex(calldata)?;
        Ok(Self::new(bytes, version, meta))
    }
}

/// Configuration for a batch decode job.
pub struct BatchRequest {
    /// The transactions to decode
    pub txs: Vec<RawTransaction>,
    /// Max transactions per chunk (memory safety)
    pub chunk_size: usize,
    /// How to handle decode errors
    pub error_mode: ErrorMode,
    /// Optional progress callback
    pub on_progress: Option<Box<dyn ProgressCallback>>,
}

impl BatchRequest {
    pub fn new(txs: Vec<RawTransaction>) -> Self {
        Self::with_config(txs, &BatchConfig::default())
    }

    /// Start from the chunk size and error mode of a loaded config.
    pub fn with_config(txs: Vec<RawTransaction>, config: &BatchConfig) -> Self {
        Self {
            txs,
            chunk_size: config.chunk_size,
            error_mode: config.error_mode,
            on_progress: None,
        }
    }

    pub fn chunk_size(mut self, n: usize) -> Self {
        self.chunk_size = n;
        self
    }

    pub fn error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    pub fn on_progress<F: Fn(usize, usize) + Send + Sync + 'static>(mut self, f: F) -> Self {
        self.on_progress = Some(Box::new(f));
        self
    }
}
