//! The `CalldataDecoder` trait and batch error-handling modes.
//!
//! Protocol decoders implement `CalldataDecoder`. The trait is object-safe so
//! decoders can be stored as `Arc<dyn CalldataDecoder>` in the batch engine
//! and the CLI.

use crate::error::DecodeError;
use crate::record::{SwapRecord, TxMetadata};
use crate::version::ProtocolVersion;
use serde::{Deserialize, Serialize};

/// Callback invoked by the batch engine during long-running decodes.
/// `processed` is the number of transactions handled so far;
/// `total` is the number in the current request.
pub trait ProgressCallback: Send + Sync {
    fn on_progress(&self, processed: usize, total: usize);
}

/// Blanket impl so closures can be used as progress callbacks.
impl<F: Fn(usize, usize) + Send + Sync> ProgressCallback for F {
    fn on_progress(&self, processed: usize, total: usize) {
        self(processed, total)
    }
}

/// Controls how the batch engine reacts to individual decode failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorMode {
    /// Drop transactions that fail to decode.
    #[default]
    Skip,
    /// Collect decode errors alongside successes and return both at the end.
    Collect,
    /// Abort the whole batch on the first failing transaction.
    Throw,
}

impl std::str::FromStr for ErrorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(ErrorMode::Skip),
            "collect" => Ok(ErrorMode::Collect),
            "throw" => Ok(ErrorMode::Throw),
            other => Err(format!("unknown error mode '{other}' (skip|collect|throw)")),
        }
    }
}

/// A router calldata decoder.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; decoding is pure, so one instance
/// is shared by every Rayon worker without locking.
pub trait CalldataDecoder: Send + Sync {
    /// Human-readable protocol name, e.g. `"Uniswap"`.
    fn protocol(&self) -> &str;

    /// Decode one transaction's calldata into zero or more records.
    ///
    /// A plain router call yields exactly one record; a multicall yields one
    /// record per inner call.
    fn decode(
        &self,
        calldata: &[u8],
        version: ProtocolVersion,
        tx: &TxMetadata,
    ) -> Result<Vec<SwapRecord>, DecodeError>;
}
