//! # swapcodec-core
//!
//! Core types, word primitives, and the error taxonomy shared by every
//! SwapCodec crate. Protocol decoders, the batch engine, and the CLI are all
//! built on the interfaces defined here.

pub mod config;
pub mod decoder;
pub mod error;
pub mod record;
pub mod version;
pub mod word;

pub use config::{BatchConfig, DecoderConfig, SwapCodecConfig};
pub use decoder::{CalldataDecoder, ErrorMode, ProgressCallback};
pub use error::{BatchDecodeError, DecodeError};
pub use record::{SwapFields, SwapRecord, TxMetadata, EXCHANGE_UNISWAP};
pub use version::ProtocolVersion;
