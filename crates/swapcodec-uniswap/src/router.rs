//! Canonical Ethereum mainnet Uniswap router addresses.
//!
//! Deciding which registry applies is the caller's job; this is the usual way
//! to do it when the transaction's destination is known.

use swapcodec_core::ProtocolVersion;

/// `UniswapV2Router02`.
pub const V2_ROUTER: &str = "0x7a250d5630b4cf539739df2c5dacb4c659f2488d";
/// `SwapRouter`.
pub const V3_ROUTER: &str = "0xe592427a0aece92de3edee1f18e0157c05861564";
/// `SwapRouter02`.
pub const V3_ROUTER_02: &str = "0x68b3465833fb72a70ecdf485e0e4c7bd8665fc45";

/// Protocol version served by the router at `address` (any hex case).
pub fn version_for_router(address: &str) -> Option<ProtocolVersion> {
    let addr = address.trim().to_ascii_lowercase();
    match addr.as_str() {
        V2_ROUTER => Some(ProtocolVersion::V2),
        V3_ROUTER | V3_ROUTER_02 => Some(ProtocolVersion::V3),
        _ => None,
    }
}
