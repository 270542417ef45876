//! # swapcodec-uniswap
//!
//! Decodes transactions sent to the Uniswap V2 router and V3 `SwapRouter`
//! into `SwapRecord`s.
//!
//! ## Usage
//! ```no_run
//! use swapcodec_core::{ProtocolVersion, TxMetadata};
//! use swapcodec_uniswap::UniswapDecoder;
//!
//! let decoder = UniswapDecoder::new();
//! let tx = TxMetadata::new("0xabc...", "0x7a250d5630b4cf539739df2c5dacb4c659f2488d");
//! let records = decoder.decode_hex("0x38ed1739...", ProtocolVersion::V2, &tx);
//! ```

pub mod multicall;
pub mod registry;
pub mod router;
pub mod selector;
pub mod v2;
pub mod v3;

pub use registry::{resolve, MethodTag, V2Method, V3Method};

use swapcodec_core::{
    word::{decode_hex, slice},
    CalldataDecoder, DecodeError, DecoderConfig, ProtocolVersion, SwapRecord, TxMetadata,
};
use tracing::debug;

/// The 4-byte selector at the head of `calldata`.
pub(crate) fn selector_bytes(calldata: &[u8]) -> Result<[u8; 4], DecodeError> {
    let head = slice(calldata, 0, 4)?;
    Ok([head[0], head[1], head[2], head[3]])
}

/// Uniswap router calldata decoder.
///
/// Stateless apart from its configuration; one instance can be shared across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct UniswapDecoder {
    config: DecoderConfig,
}

impl UniswapDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one transaction's calldata.
    ///
    /// A plain router call yields one record; a multicall yields one record per
    /// inner call (and none for an empty multicall). Multicall selectors are
    /// recognised whatever `version` says.
    pub fn decode(
        &self,
        calldata: &[u8],
        version: ProtocolVersion,
        tx: &TxMetadata,
    ) -> Result<Vec<SwapRecord>, DecodeError> {
        self.decode_at_depth(calldata, version, tx, 0)
    }

    /// Decode `0x`-prefixed hex calldata.
    pub fn decode_hex(
        &self,
        calldata: &str,
        version: ProtocolVersion,
        tx: &TxMetadata,
    ) -> Result<Vec<SwapRecord>, DecodeError> {
        self.decode(&decode_hex(calldata)?, version, tx)
    }

    /// Classify the call without decoding its parameters.
    pub fn method(
        &self,
        calldata: &[u8],
        version: ProtocolVersion,
    ) -> Result<MethodTag, DecodeError> {
        let selector = selector_bytes(calldata)?;
        match V3Method::from_selector(selector).filter(|m| m.is_multicall()) {
            Some(m) => Ok(MethodTag::V3(m)),
            None => resolve(selector, version),
        }
    }

    /// Staging record for a multicall: call count and raw inner calls only.
    pub fn stage_multicall(
        &self,
        calldata: &[u8],
        tx: &TxMetadata,
    ) -> Result<SwapRecord, DecodeError> {
        multicall::stage_multicall(calldata, tx)
            .map(|rec| rec.with_exchange(self.config.exchange.as_str()))
    }

    /// `depth` is the number of multicalls enclosing `calldata`.
    pub(crate) fn decode_at_depth(
        &self,
        calldata: &[u8],
        version: ProtocolVersion,
        tx: &TxMetadata,
        depth: usize,
    ) -> Result<Vec<SwapRecord>, DecodeError> {
        let selector = selector_bytes(calldata)?;
        let params = &calldata[4..];

        if let Some(m) = V3Method::from_selector(selector).filter(|m| m.is_multicall()) {
            return multicall::decode_multicall(self, m, params, tx, depth + 1);
        }

        let tag = resolve(selector, version)?;
        let fields = match tag {
            MethodTag::V2(m) => v2::decode(m, params)?,
            MethodTag::V3(m) => v3::decode(m, params)?,
        };
        debug!(
            tx_hash = %tx.tx_hash,
            version = %version,
            method = tag.name(),
            "decoded router call"
        );

        let record = SwapRecord::new(tx, version, tag.selector_hex(), tag.name(), fields)
            .with_exchange(self.config.exchange.as_str());
        Ok(vec![record])
    }
}

impl CalldataDecoder for UniswapDecoder {
    fn protocol(&self) -> &str {
        &self.config.exchange
    }

    fn decode(
        &self,
        calldata: &[u8],
        version: ProtocolVersion,
        tx: &TxMetadata,
    ) -> Result<Vec<SwapRecord>, DecodeError> {
        UniswapDecoder::decode(self, calldata, version, tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXACT_INPUT_SINGLE: &str = "0x414bf389000000000000000000000000c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2000000000000000000000000ee2a03aa6dacf51c18679c516ad5283d8e7c26370000000000000000000000000000000000000000000000000000000000000bb8000000000000000000000000f5213a6a2f0890321712520b8048d9886c1a9900000000000000000000000000000000000000000000000000000000006736f0e40000000000000000000000000000000000000000000000000b9eafe9ee6f4000000000000000000000000000000000000000000000000000000019fe199f2e100000000000000000000000000000000000000000000000000000000000000000";

    fn tx() -> TxMetadata {
        TxMetadata::new(
            "0x3dd149b18dd892a585577dd5abce476b554eac984c380cd8055b35dd05a42fb0",
            "0xe592427a0aece92de3edee1f18e0157c05861564",
        )
        .with_value("0")
    }

    #[test]
    fn stamps_identity_fields() {
        let records = UniswapDecoder::new()
            .decode_hex(EXACT_INPUT_SINGLE, ProtocolVersion::V3, &tx())
            .unwrap();
        assert_eq!(records.len(), 1);
        let rec = &records[0];
        assert_eq!(rec.method_id, "414bf389");
        assert_eq!(rec.method_name, "ExactInputSingle");
        assert_eq!(rec.version, ProtocolVersion::V3);
        assert_eq!(rec.exchange, "Uniswap");
        assert_eq!(rec.tx_hash, tx().tx_hash);
        assert_eq!(rec.to_address, "0xe592427a0aece92de3edee1f18e0157c05861564");
        assert_eq!(rec.tx_value, "0");
        assert_eq!(rec.number_of_calls, None);
        assert_eq!(rec.value, None);
        assert_eq!(rec.field("amount_in"), Some("837300000000000000"));
    }

    #[test]
    fn short_calldata_is_truncated() {
        let decoder = UniswapDecoder::new();
        for cd in [&[][..], &[0x41][..], &[0x41, 0x4b, 0xf3][..]] {
            assert!(matches!(
                decoder.decode(cd, ProtocolVersion::V3, &tx()),
                Err(DecodeError::Truncated { .. })
            ));
        }
        // selector only: the method decoder runs out of words
        assert!(matches!(
            decoder.decode(&[0x41, 0x4b, 0xf3, 0x89], ProtocolVersion::V3, &tx()),
            Err(DecodeError::Truncated { .. })
        ));
    }

    #[test]
    fn unknown_selector_yields_no_record() {
        let err = UniswapDecoder::new()
            .decode(&[0xde, 0xad, 0xbe, 0xef, 0, 0], ProtocolVersion::V2, &tx())
            .unwrap_err();
        assert_eq!(err.kind(), "unknown_selector");
    }

    #[test]
    fn version_selects_registry() {
        // exactInputSingle is not a V2 router method
        let err = UniswapDecoder::new()
            .decode_hex(EXACT_INPUT_SINGLE, ProtocolVersion::V2, &tx())
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnknownSelector { .. }));
    }

    #[test]
    fn decoding_is_deterministic() {
        let decoder = UniswapDecoder::new();
        let a = decoder.decode_hex(EXACT_INPUT_SINGLE, ProtocolVersion::V3, &tx()).unwrap();
        let b = decoder.decode_hex(EXACT_INPUT_SINGLE, ProtocolVersion::V3, &tx()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn method_classification() {
        let decoder = UniswapDecoder::new();
        let cd = decode_hex(EXACT_INPUT_SINGLE).unwrap();
        let tag = decoder.method(&cd, ProtocolVersion::V3).unwrap();
        assert_eq!(tag, MethodTag::V3(V3Method::ExactInputSingle));
        assert!(!tag.is_eth_input());

        let tag = decoder
            .method(&[0xac, 0x96, 0x50, 0xd8], ProtocolVersion::V2)
            .unwrap();
        assert_eq!(tag, MethodTag::V3(V3Method::Multicall));
    }

    #[test]
    fn custom_exchange_label() {
        let decoder = UniswapDecoder::with_config(DecoderConfig {
            exchange: "UniswapV3-Arbitrum".into(),
            ..Default::default()
        });
        let rec = &decoder
            .decode_hex(EXACT_INPUT_SINGLE, ProtocolVersion::V3, &tx())
            .unwrap()[0];
        assert_eq!(rec.exchange, "UniswapV3-Arbitrum");
        assert_eq!(CalldataDecoder::protocol(&decoder), "UniswapV3-Arbitrum");
    }

    #[test]
    fn invalid_hex_input() {
        let err = UniswapDecoder::new()
            .decode_hex("0xnope", ProtocolVersion::V2, &tx())
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_hex");
    }
}
