//! Uniswap router method registries.
//!
//! Two closed tables, one per router generation. Each entry carries its
//! 4-byte selector, canonical Solidity signature, display name, and the
//! eth-in / eth-out flags consumed by the valuation layer.

use serde::Serialize;
use swapcodec_core::{DecodeError, ProtocolVersion};

/// Methods exposed by the Uniswap V2 router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum V2Method {
    SwapExactTokensForTokens,
    SwapTokensForExactTokens,
    SwapExactETHForTokens,
    SwapTokensForExactETH,
    SwapExactTokensForETH,
    SwapETHForExactTokens,
    SwapExactTokensForTokensSupportingFeeOnTransferTokens,
    SwapExactETHForTokensSupportingFeeOnTransferTokens,
    SwapExactTokensForETHSupportingFeeOnTransferTokens,
    AddLiquidity,
    AddLiquidityETH,
    RemoveLiquidity,
    RemoveLiquidityETH,
    RemoveLiquidityETHWithPermit,
    RemoveLiquidityETHWithPermitSupportingFeeOnTransferTokens,
    RemoveLiquidityETHSupportingFeeOnTransferTokens,
    RemoveLiquidityWithPermit,
}

impl V2Method {
    pub const ALL: [V2Method; 17] = [
        V2Method::SwapExactTokensForTokens,
        V2Method::SwapTokensForExactTokens,
        V2Method::SwapExactETHForTokens,
        V2Method::SwapTokensForExactETH,
        V2Method::SwapExactTokensForETH,
        V2Method::SwapETHForExactTokens,
        V2Method::SwapExactTokensForTokensSupportingFeeOnTransferTokens,
        V2Method::SwapExactETHForTokensSupportingFeeOnTransferTokens,
        V2Method::SwapExactTokensForETHSupportingFeeOnTransferTokens,
        V2Method::AddLiquidity,
        V2Method::AddLiquidityETH,
        V2Method::RemoveLiquidity,
        V2Method::RemoveLiquidityETH,
        V2Method::RemoveLiquidityETHWithPermit,
        V2Method::RemoveLiquidityETHWithPermitSupportingFeeOnTransferTokens,
        V2Method::RemoveLiquidityETHSupportingFeeOnTransferTokens,
        V2Method::RemoveLiquidityWithPermit,
    ];

    pub const fn selector(self) -> [u8; 4] {
        match self {
            V2Method::SwapExactTokensForTokens => [0x38, 0xed, 0x17, 0x39],
            V2Method::SwapTokensForExactTokens => [0x88, 0x03, 0xdb, 0xee],
            V2Method::SwapExactETHForTokens => [0x7f, 0xf3, 0x6a, 0xb5],
            V2Method::SwapTokensForExactETH => [0x4a, 0x25, 0xd9, 0x4a],
            V2Method::SwapExactTokensForETH => [0x18, 0xcb, 0xaf, 0xe5],
            V2Method::SwapETHForExactTokens => [0xfb, 0x3b, 0xdb, 0x41],
            V2Method::SwapExactTokensForTokensSupportingFeeOnTransferTokens => {
                [0x5c, 0x11, 0xd7, 0x95]
            }
            V2Method::SwapExactETHForTokensSupportingFeeOnTransferTokens => {
                [0xb6, 0xf9, 0xde, 0x95]
            }
            V2Method::SwapExactTokensForETHSupportingFeeOnTransferTokens => {
                [0x79, 0x1a, 0xc9, 0x47]
            }
            V2Method::AddLiquidity => [0xe8, 0xe3, 0x37, 0x00],
            V2Method::AddLiquidityETH => [0xf3, 0x05, 0xd7, 0x19],
            V2Method::RemoveLiquidity => [0xba, 0xa2, 0xab, 0xde],
            V2Method::RemoveLiquidityETH => [0x02, 0x75, 0x1c, 0xec],
            V2Method::RemoveLiquidityETHWithPermit => [0xde, 0xd9, 0x38, 0x2a],
            V2Method::RemoveLiquidityETHWithPermitSupportingFeeOnTransferTokens => {
                [0x5b, 0x0d, 0x59, 0x84]
            }
            V2Method::RemoveLiquidityETHSupportingFeeOnTransferTokens => [0xaf, 0x29, 0x79, 0xeb],
            V2Method::RemoveLiquidityWithPermit => [0x21, 0x95, 0x99, 0x5c],
        }
    }

    pub fn from_selector(selector: [u8; 4]) -> Option<V2Method> {
        let method = match selector {
            [0x38, 0xed, 0x17, 0x39] => V2Method::SwapExactTokensForTokens,
            [0x88, 0x03, 0xdb, 0xee] => V2Method::SwapTokensForExactTokens,
            [0x7f, 0xf3, 0x6a, 0xb5] => V2Method::SwapExactETHForTokens,
            [0x4a, 0x25, 0xd9, 0x4a] => V2Method::SwapTokensForExactETH,
            [0x18, 0xcb, 0xaf, 0xe5] => V2Method::SwapExactTokensForETH,
            [0xfb, 0x3b, 0xdb, 0x41] => V2Method::SwapETHForExactTokens,
            [0x5c, 0x11, 0xd7, 0x95] => {
                V2Method::SwapExactTokensForTokensSupportingFeeOnTransferTokens
            }
            [0xb6, 0xf9, 0xde, 0x95] => {
                V2Method::SwapExactETHForTokensSupportingFeeOnTransferTokens
            }
            [0x79, 0x1a, 0xc9, 0x47] => {
                V2Method::SwapExactTokensForETHSupportingFeeOnTransferTokens
            }
            [0xe8, 0xe3, 0x37, 0x00] => V2Method::AddLiquidity,
            [0xf3, 0x05, 0xd7, 0x19] => V2Method::AddLiquidityETH,
            [0xba, 0xa2, 0xab, 0xde] => V2Method::RemoveLiquidity,
            [0x02, 0x75, 0x1c, 0xec] => V2Method::RemoveLiquidityETH,
            [0xde, 0xd9, 0x38, 0x2a] => V2Method::RemoveLiquidityETHWithPermit,
            [0x5b, 0x0d, 0x59, 0x84] => {
                V2Method::RemoveLiquidityETHWithPermitSupportingFeeOnTransferTokens
            }
            [0xaf, 0x29, 0x79, 0xeb] => V2Method::RemoveLiquidityETHSupportingFeeOnTransferTokens,
            [0x21, 0x95, 0x99, 0x5c] => V2Method::RemoveLiquidityWithPermit,
            _ => return None,
        };
        Some(method)
    }

    /// Canonical Solidity signature; `keccak256(signature)[..4] == selector()`.
    pub const fn signature(self) -> &'static str {
        match self {
            V2Method::SwapExactTokensForTokens => {
                "swapExactTokensForTokens(uint256,uint256,address[],address,uint256)"
            }
            V2Method::SwapTokensForExactTokens => {
                "swapTokensForExactTokens(uint256,uint256,address[],address,uint256)"
            }
            V2Method::SwapExactETHForTokens => {
                "swapExactETHForTokens(uint256,address[],address,uint256)"
            }
            V2Method::SwapTokensForExactETH => {
                "swapTokensForExactETH(uint256,uint256,address[],address,uint256)"
            }
            V2Method::SwapExactTokensForETH => {
                "swapExactTokensForETH(uint256,uint256,address[],address,uint256)"
            }
            V2Method::SwapETHForExactTokens => {
                "swapETHForExactTokens(uint256,address[],address,uint256)"
            }
            V2Method::SwapExactTokensForTokensSupportingFeeOnTransferTokens => {
                "swapExactTokensForTokensSupportingFeeOnTransferTokens(uint256,uint256,address[],address,uint256)"
            }
            V2Method::SwapExactETHForTokensSupportingFeeOnTransferTokens => {
                "swapExactETHForTokensSupportingFeeOnTransferTokens(uint256,address[],address,uint256)"
            }
            V2Method::SwapExactTokensForETHSupportingFeeOnTransferTokens => {
                "swapExactTokensForETHSupportingFeeOnTransferTokens(uint256,uint256,address[],address,uint256)"
            }
            V2Method::AddLiquidity => {
                "addLiquidity(address,address,uint256,uint256,uint256,uint256,address,uint256)"
            }
            V2Method::AddLiquidityETH => {
                "addLiquidityETH(address,uint256,uint256,uint256,address,uint256)"
            }
            V2Method::RemoveLiquidity => {
                "removeLiquidity(address,address,uint256,uint256,uint256,address,uint256)"
            }
            V2Method::RemoveLiquidityETH => {
                "removeLiquidityETH(address,uint256,uint256,uint256,address,uint256)"
            }
            V2Method::RemoveLiquidityETHWithPermit => {
                "removeLiquidityETHWithPermit(address,uint256,uint256,uint256,address,uint256,bool,uint8,bytes32,bytes32)"
            }
            V2Method::RemoveLiquidityETHWithPermitSupportingFeeOnTransferTokens => {
                "removeLiquidityETHWithPermitSupportingFeeOnTransferTokens(address,uint256,uint256,uint256,address,uint256,bool,uint8,bytes32,bytes32)"
            }
            V2Method::RemoveLiquidityETHSupportingFeeOnTransferTokens => {
                "removeLiquidityETHSupportingFeeOnTransferTokens(address,uint256,uint256,uint256,address,uint256)"
            }
            V2Method::RemoveLiquidityWithPermit => {
                "removeLiquidityWithPermit(address,address,uint256,uint256,uint256,address,uint256,bool,uint8,bytes32,bytes32)"
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            V2Method::SwapExactTokensForTokens => "SwapExactTokensForTokens",
            V2Method::SwapTokensForExactTokens => "SwapTokensForExactTokens",
            V2Method::SwapExactETHForTokens => "SwapExactETHForTokens",
            V2Method::SwapTokensForExactETH => "SwapTokensForExactETH",
            V2Method::SwapExactTokensForETH => "SwapExactTokensForETH",
            V2Method::SwapETHForExactTokens => "SwapETHForExactTokens",
            V2Method::SwapExactTokensForTokensSupportingFeeOnTransferTokens => {
                "SwapExactTokensForTokensSupportingFeeOnTransferTokens"
            }
            V2Method::SwapExactETHForTokensSupportingFeeOnTransferTokens => {
                "SwapExactETHForTokensSupportingFeeOnTransferTokens"
            }
            V2Method::SwapExactTokensForETHSupportingFeeOnTransferTokens => {
                "SwapExactTokensForETHSupportingFeeOnTransferTokens"
            }
            V2Method::AddLiquidity => "AddLiquidity",
            V2Method::AddLiquidityETH => "AddLiquidityETH",
            V2Method::RemoveLiquidity => "RemoveLiquidity",
            V2Method::RemoveLiquidityETH => "RemoveLiquidityETH",
            V2Method::RemoveLiquidityETHWithPermit => "RemoveLiquidityETHWithPermit",
            V2Method::RemoveLiquidityETHWithPermitSupportingFeeOnTransferTokens => {
                "RemoveLiquidityETHWithPermitSupportingFeeOnTransferTokens"
            }
            V2Method::RemoveLiquidityETHSupportingFeeOnTransferTokens => {
                "RemoveLiquidityETHSupportingFeeOnTransferTokens"
            }
            V2Method::RemoveLiquidityWithPermit => "RemoveLiquidityWithPermit",
        }
    }

    /// Native ETH flows into the router with this call.
    ///
    /// The removal-family flags follow the historical classification used by
    /// downstream valuation, not the direction of funds on-chain.
    pub const fn is_eth_input(self) -> bool {
        matches!(
            self,
            V2Method::SwapExactETHForTokens
                | V2Method::SwapETHForExactTokens
                | V2Method::SwapExactETHForTokensSupportingFeeOnTransferTokens
                | V2Method::AddLiquidityETH
                | V2Method::RemoveLiquidityETH
                | V2Method::RemoveLiquidityETHWithPermit
        )
    }

    /// Native ETH flows out of the router with this call.
    pub const fn is_eth_output(self) -> bool {
        matches!(
            self,
            V2Method::SwapTokensForExactETH
                | V2Method::SwapExactTokensForETH
                | V2Method::SwapExactTokensForETHSupportingFeeOnTransferTokens
                | V2Method::RemoveLiquidityETH
                | V2Method::RemoveLiquidityETHWithPermit
                | V2Method::RemoveLiquidityETHSupportingFeeOnTransferTokens
        )
    }
}

/// Methods exposed by the Uniswap V3 `SwapRouter` / `SwapRouter02`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum V3Method {
    ExactInputSingle,
    ExactInput,
    ExactOutputSingle,
    ExactOutput,
    Multicall,
    MulticallWithValue,
    UnwrapWETH9,
    SweepToken,
    RefundETH,
}

impl V3Method {
    pub const ALL: [V3Method; 9] = [
        V3Method::ExactInputSingle,
        V3Method::ExactInput,
        V3Method::ExactOutputSingle,
        V3Method::ExactOutput,
        V3Method::Multicall,
        V3Method::MulticallWithValue,
        V3Method::UnwrapWETH9,
        V3Method::SweepToken,
        V3Method::RefundETH,
    ];

    pub const fn selector(self) -> [u8; 4] {
        match self {
            V3Method::ExactInputSingle => [0x41, 0x4b, 0xf3, 0x89],
            V3Method::ExactInput => [0xc0, 0x4b, 0x8d, 0x59],
            V3Method::ExactOutputSingle => [0xdb, 0x3e, 0x21, 0x98],
            V3Method::ExactOutput => [0xf2, 0x8c, 0x04, 0x98],
            V3Method::Multicall => [0xac, 0x96, 0x50, 0xd8],
            V3Method::MulticallWithValue => [0x5a, 0xe4, 0x01, 0xdc],
            V3Method::UnwrapWETH9 => [0x49, 0x40, 0x4b, 0x7c],
            V3Method::SweepToken => [0xdf, 0x2a, 0xb5, 0xbb],
            V3Method::RefundETH => [0x12, 0x21, 0x0e, 0x8a],
        }
    }

    pub fn from_selector(selector: [u8; 4]) -> Option<V3Method> {
        let method = match selector {
            [0x41, 0x4b, 0xf3, 0x89] => V3Method::ExactInputSingle,
            [0xc0, 0x4b, 0x8d, 0x59] => V3Method::ExactInput,
            [0xdb, 0x3e, 0x21, 0x98] => V3Method::ExactOutputSingle,
            [0xf2, 0x8c, 0x04, 0x98] => V3Method::ExactOutput,
            [0xac, 0x96, 0x50, 0xd8] => V3Method::Multicall,
            [0x5a, 0xe4, 0x01, 0xdc] => V3Method::MulticallWithValue,
            [0x49, 0x40, 0x4b, 0x7c] => V3Method::UnwrapWETH9,
            [0xdf, 0x2a, 0xb5, 0xbb] => V3Method::SweepToken,
            [0x12, 0x21, 0x0e, 0x8a] => V3Method::RefundETH,
            _ => return None,
        };
        Some(method)
    }

    pub const fn signature(self) -> &'static str {
        match self {
            V3Method::ExactInputSingle => {
                "exactInputSingle((address,address,uint24,address,uint256,uint256,uint256,uint160))"
            }
            V3Method::ExactInput => "exactInput((bytes,address,uint256,uint256,uint256))",
            V3Method::ExactOutputSingle => {
                "exactOutputSingle((address,address,uint24,address,uint256,uint256,uint256,uint160))"
            }
            V3Method::ExactOutput => "exactOutput((bytes,address,uint256,uint256,uint256))",
            V3Method::Multicall => "multicall(bytes[])",
            V3Method::MulticallWithValue => "multicall(uint256,bytes[])",
            V3Method::UnwrapWETH9 => "unwrapWETH9(uint256,address)",
            V3Method::SweepToken => "sweepToken(address,uint256,address)",
            V3Method::RefundETH => "refundETH()",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            V3Method::ExactInputSingle => "ExactInputSingle",
            V3Method::ExactInput => "ExactInput",
            V3Method::ExactOutputSingle => "ExactOutputSingle",
            V3Method::ExactOutput => "ExactOutput",
            V3Method::Multicall => "Multicall",
            V3Method::MulticallWithValue => "MulticallWithValue",
            V3Method::UnwrapWETH9 => "UnwrapWETH9",
            V3Method::SweepToken => "SweepToken",
            V3Method::RefundETH => "RefundETH",
        }
    }

    pub const fn is_eth_input(self) -> bool {
        false
    }

    pub const fn is_eth_output(self) -> bool {
        matches!(self, V3Method::UnwrapWETH9 | V3Method::RefundETH)
    }

    pub const fn is_multicall(self) -> bool {
        matches!(self, V3Method::Multicall | V3Method::MulticallWithValue)
    }

    /// Word index of the `bytes[]` head slot for multicall variants.
    pub const fn multicall_head_word(self) -> Option<usize> {
        match self {
            V3Method::Multicall => Some(0),
            V3Method::MulticallWithValue => Some(1),
            _ => None,
        }
    }
}

/// A registry entry of either router generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MethodTag {
    V2(V2Method),
    V3(V3Method),
}

impl MethodTag {
    pub const fn version(self) -> ProtocolVersion {
        match self {
            MethodTag::V2(_) => ProtocolVersion::V2,
            MethodTag::V3(_) => ProtocolVersion::V3,
        }
    }

    pub const fn selector(self) -> [u8; 4] {
        match self {
            MethodTag::V2(m) => m.selector(),
            MethodTag::V3(m) => m.selector(),
        }
    }

    /// Selector as 8 lowercase hex characters, no `0x`.
    pub fn selector_hex(self) -> String {
        hex::encode(self.selector())
    }

    pub const fn name(self) -> &'static str {
        match self {
            MethodTag::V2(m) => m.name(),
            MethodTag::V3(m) => m.name(),
        }
    }

    pub const fn signature(self) -> &'static str {
        match self {
            MethodTag::V2(m) => m.signature(),
            MethodTag::V3(m) => m.signature(),
        }
    }

    pub const fn is_eth_input(self) -> bool {
        match self {
            MethodTag::V2(m) => m.is_eth_input(),
            MethodTag::V3(m) => m.is_eth_input(),
        }
    }

    pub const fn is_eth_output(self) -> bool {
        match self {
            MethodTag::V2(m) => m.is_eth_output(),
            MethodTag::V3(m) => m.is_eth_output(),
        }
    }

    /// Every registered method of `version`, in table order.
    pub fn all(version: ProtocolVersion) -> Vec<MethodTag> {
        match version {
            ProtocolVersion::V2 => V2Method::ALL.into_iter().map(MethodTag::V2).collect(),
            ProtocolVersion::V3 => V3Method::ALL.into_iter().map(MethodTag::V3).collect(),
        }
    }
}

impl std::fmt::Display for MethodTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{})", self.name(), self.selector_hex())
    }
}

/// Look `selector` up in the registry of `version`.
pub fn resolve(selector: [u8; 4], version: ProtocolVersion) -> Result<MethodTag, DecodeError> {
    let tag = match version {
        ProtocolVersion::V2 => V2Method::from_selector(selector).map(MethodTag::V2),
        ProtocolVersion::V3 => V3Method::from_selector(selector).map(MethodTag::V3),
    };
    tag.ok_or_else(|| DecodeError::UnknownSelector {
        selector: hex::encode(selector),
        version,
    })
}

/// Parse `"0x38ed1739"` / `"38ED1739"` into selector bytes.
pub fn parse_selector(input: &str) -> Result<[u8; 4], DecodeError> {
    let bytes = swapcodec_core::word::decode_hex(input)?;
    <[u8; 4]>::try_from(bytes.as_slice()).map_err(|_| DecodeError::InvalidHex {
        reason: format!("selector must be 4 bytes, got {}", bytes.len()),
    })
}
