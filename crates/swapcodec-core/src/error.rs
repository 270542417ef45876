//! Error types for the SwapCodec decode pipeline.
//!
//! Every variant is recoverable at the per-transaction boundary: one bad
//! transaction never aborts the processing of a block.

use crate::version::ProtocolVersion;
use thiserror::Error;

/// Errors that can occur while decoding a single transaction's calldata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Unknown {version} selector 0x{selector}")]
    UnknownSelector {
        selector: String,
        version: ProtocolVersion,
    },

    #[error("Calldata truncated: need {needed} bytes at offset {offset}, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Out of bounds: {reason}")]
    OutOfBounds { reason: String },

    #[error("Malformed ABI encoding: {reason}")]
    MalformedEncoding { reason: String },

    #[error("Invalid hex input: {reason}")]
    InvalidHex { reason: String },

    #[error("Unknown protocol version '{input}' (expected V2 or V3)")]
    UnknownVersion { input: String },
}

impl DecodeError {
    /// Stable label for logs and metric tags.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::UnknownSelector { .. } => "unknown_selector",
            DecodeError::Truncated { .. } => "truncated",
            DecodeError::OutOfBounds { .. } => "out_of_bounds",
            DecodeError::MalformedEncoding { .. } => "malformed_encoding",
            DecodeError::InvalidHex { .. } => "invalid_hex",
            DecodeError::UnknownVersion { .. } => "unknown_version",
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        DecodeError::MalformedEncoding {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during batch decoding.
#[derive(Debug, Error)]
pub enum BatchDecodeError {
    #[error("Decode error at index {index}: {source}")]
    ItemFailed {
        index: usize,
        #[source]
        source: DecodeError,
    },

    #[error("{0}")]
    Other(String),
}
