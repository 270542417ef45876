//! Decoded swap / liquidity records.
//!
//! A `SwapRecord` is the output of decoding one router call (a top-level call
//! or one element of a multicall). Amounts are base-10 strings of the raw
//! on-chain integer and are never scaled by token decimals; addresses are
//! lowercase `0x`-prefixed hex.

use crate::version::ProtocolVersion;
use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

/// Value of `SwapRecord::exchange` for every Uniswap router call.
pub const EXCHANGE_UNISWAP: &str = "Uniswap";

/// Transaction-level fields supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxMetadata {
    pub tx_hash: String,
    /// Destination of the transaction, i.e. the router address.
    pub to_address: String,
    /// Native value attached to the transaction, in wei (base 10).
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl TxMetadata {
    pub fn new(tx_hash: impl Into<String>, to_address: impl Into<String>) -> Self {
        Self {
            tx_hash: tx_hash.into(),
            to_address: to_address.into(),
            value: "0".into(),
            chain_id: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }
}

/// Method-specific fields recovered from a call's parameter block.
///
/// Per-method decoders return this value; which fields are set depends on the
/// function signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapFields {
    // --- swaps ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_out_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_in_max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_path_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_path_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    /// V3 fee tier as packed 3-byte hex, e.g. `0x000bb8`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,

    // --- liquidity ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_a: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_b: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_a_desired: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_b_desired: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_a_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_b_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_token_desired: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_token_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_eth_min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<String>,
}

impl SwapFields {
    /// Look up a field by its snake_case name.
    pub fn get(&self, name: &str) -> Option<&str> {
        let field = match name {
            "amount_in" => &self.amount_in,
            "amount_out_min" => &self.amount_out_min,
            "amount_out" => &self.amount_out,
            "amount_in_max" => &self.amount_in_max,
            "token_path_from" => &self.token_path_from,
            "token_path_to" => &self.token_path_to,
            "recipient" => &self.recipient,
            "fee" => &self.fee,
            "token_a" => &self.token_a,
            "token_b" => &self.token_b,
            "amount_a_desired" => &self.amount_a_desired,
            "amount_b_desired" => &self.amount_b_desired,
            "amount_a_min" => &self.amount_a_min,
            "amount_b_min" => &self.amount_b_min,
            "amount_token_desired" => &self.amount_token_desired,
            "amount_token_min" => &self.amount_token_min,
            "amount_eth_min" => &self.amount_eth_min,
            "liquidity" => &self.liquidity,
            _ => return None,
        };
        field.as_deref()
    }

    /// True when no field was populated (e.g. `refundETH()`).
    pub fn is_empty(&self) -> bool {
        *self == SwapFields::default()
    }
}

/// One decoded router call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRecord {
    pub tx_hash: String,
    pub version: ProtocolVersion,
    pub exchange: String,
    /// Selector as 8 lowercase hex characters, no `0x`.
    pub method_id: String,
    pub method_name: String,
    /// Router the transaction was sent to.
    pub to_address: String,
    /// Native value attached to the enclosing transaction, in wei.
    pub tx_value: String,

    #[serde(flatten)]
    pub fields: SwapFields,

    /// USD value; filled in by the valuation layer, never by the decoder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    /// Declared inner-call count of the enclosing multicall.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_calls: Option<usize>,

    /// Raw inner calls; only populated on a multicall staging record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub calls_data: Vec<Bytes>,
}

impl SwapRecord {
    /// Assemble a record from identity fields plus decoded method fields.
    pub fn new(
        tx: &TxMetadata,
        version: ProtocolVersion,
        method_id: impl Into<String>,
        method_name: impl Into<String>,
        fields: SwapFields,
    ) -> Self {
        Self {
            tx_hash: tx.tx_hash.clone(),
            version,
            exchange: EXCHANGE_UNISWAP.to_string(),
            method_id: method_id.into(),
            method_name: method_name.into(),
            to_address: tx.to_address.clone(),
            tx_value: tx.value.clone(),
            fields,
            value: None,
            number_of_calls: None,
            calls_data: Vec::new(),
        }
    }

    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = exchange.into();
        self
    }

    pub fn with_number_of_calls(mut self, n: usize) -> Self {
        self.number_of_calls = Some(n);
        self
    }

    /// Look up a decoded field by name (see `SwapFields::get`).
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name)
    }

    /// Selector as `0x`-prefixed hex.
    pub fn selector_hex(&self) -> String {
        format!("0x{}", self.method_id)
    }
}
