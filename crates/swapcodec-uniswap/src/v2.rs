//! Uniswap V2 router decoders.
//!
//! Every function here receives the parameter block (calldata with the
//! selector stripped) and returns the decoded `SwapFields`. Word `[i]` lives at
//! byte offset `32 * i`.

use crate::registry::V2Method;
use swapcodec_core::{
    word::{at, read_address, read_offset, read_uint, read_uint_range, WORD_SIZE},
    DecodeError, SwapFields,
};
use tracing::trace;

/// Byte offset of the liquidity slice read by the ETH removal family.
const REMOVE_ETH_LIQUIDITY_OFFSET: usize = 54;
/// Width of that slice.
const REMOVE_ETH_LIQUIDITY_LEN: usize = 10;

/// Decode the parameter block of `method`.
pub fn decode(method: V2Method, params: &[u8]) -> Result<SwapFields, DecodeError> {
    match method {
        V2Method::SwapExactTokensForTokens
        | V2Method::SwapExactTokensForETH
        | V2Method::SwapExactTokensForTokensSupportingFeeOnTransferTokens
        | V2Method::SwapExactTokensForETHSupportingFeeOnTransferTokens => exact_in(params),

        V2Method::SwapTokensForExactTokens | V2Method::SwapTokensForExactETH => exact_out(params),

        V2Method::SwapExactETHForTokens
        | V2Method::SwapExactETHForTokensSupportingFeeOnTransferTokens => exact_eth_in(params),

        V2Method::SwapETHForExactTokens => eth_for_exact(params),

        V2Method::AddLiquidity => add_liquidity(params),
        V2Method::AddLiquidityETH => add_liquidity_eth(params),

        V2Method::RemoveLiquidity | V2Method::RemoveLiquidityWithPermit => {
            remove_liquidity(params)
        }

        V2Method::RemoveLiquidityETH
        | V2Method::RemoveLiquidityETHWithPermit
        | V2Method::RemoveLiquidityETHSupportingFeeOnTransferTokens
        | V2Method::RemoveLiquidityETHWithPermitSupportingFeeOnTransferTokens => {
            remove_liquidity_eth(params)
        }
    }
}

/// First and last entry of the `address[] path` whose offset is in word `[slot]`.
pub fn read_path(params: &[u8], slot: usize) -> Result<(String, String), DecodeError> {
    let offset = read_offset(params, at(slot))?;
    let len = read_offset(params, offset)?;
    trace!(offset, len, "v2 path");
    if len < 2 {
        return Err(DecodeError::malformed(format!(
            "swap path needs at least 2 tokens, got {len}"
        )));
    }
    let first = offset.checked_add(WORD_SIZE);
    let last = len
        .checked_mul(WORD_SIZE)
        .and_then(|tail| offset.checked_add(tail));
    match (first, last) {
        (Some(first), Some(last)) => {
            Ok((read_address(params, first)?, read_address(params, last)?))
        }
        _ => Err(DecodeError::OutOfBounds {
            reason: format!("path of {len} entries at offset {offset} overflows"),
        }),
    }
}

// swap*(amountIn, amountOutMin, path, to, deadline)
fn exact_in(p: &[u8]) -> Result<SwapFields, DecodeError> {
    let (from, to) = read_path(p, 2)?;
    Ok(SwapFields {
        amount_in: Some(read_uint(p, at(0))?),
        amount_out_min: Some(read_uint(p, at(1))?),
        token_path_from: Some(from),
        token_path_to: Some(to),
        recipient: Some(read_address(p, at(3))?),
        ..Default::default()
    })
}

// swapTokensForExact*(amountOut, amountInMax, path, to, deadline)
fn exact_out(p: &[u8]) -> Result<SwapFields, DecodeError> {
    let (from, to) = read_path(p, 2)?;
    Ok(SwapFields {
        amount_out: Some(read_uint(p, at(0))?),
        amount_in_max: Some(read_uint(p, at(1))?),
        token_path_from: Some(from),
        token_path_to: Some(to),
        recipient: Some(read_address(p, at(3))?),
        ..Default::default()
    })
}

// swapExactETHForTokens*(amountOutMin, path, to, deadline)
fn exact_eth_in(p: &[u8]) -> Result<SwapFields, DecodeError> {
    let (from, to) = read_path(p, 1)?;
    Ok(SwapFields {
        amount_out_min: Some(read_uint(p, at(0))?),
        token_path_from: Some(from),
        token_path_to: Some(to),
        recipient: Some(read_address(p, at(2))?),
        ..Default::default()
    })
}

// swapETHForExactTokens(amountOut, path, to, deadline)
fn eth_for_exact(p: &[u8]) -> Result<SwapFields, DecodeError> {
    let (from, to) = read_path(p, 1)?;
    Ok(SwapFields {
        amount_out: Some(read_uint(p, at(0))?),
        token_path_from: Some(from),
        token_path_to: Some(to),
        recipient: Some(read_address(p, at(2))?),
        ..Default::default()
    })
}

fn add_liquidity(p: &[u8]) -> Result<SwapFields, DecodeError> {
    Ok(SwapFields {
        token_a: Some(read_address(p, at(0))?),
        token_b: Some(read_address(p, at(1))?),
        amount_a_desired: Some(read_uint(p, at(2))?),
        amount_b_desired: Some(read_uint(p, at(3))?),
        amount_a_min: Some(read_uint(p, at(4))?),
        amount_b_min: Some(read_uint(p, at(5))?),
        recipient: Some(read_address(p, at(6))?),
        ..Default::default()
    })
}

fn add_liquidity_eth(p: &[u8]) -> Result<SwapFields, DecodeError> {
    Ok(SwapFields {
        token_a: Some(read_address(p, at(0))?),
        amount_token_desired: Some(read_uint(p, at(1))?),
        amount_token_min: Some(read_uint(p, at(2))?),
        amount_eth_min: Some(read_uint(p, at(3))?),
        recipient: Some(read_address(p, at(4))?),
        ..Default::default()
    })
}

fn remove_liquidity(p: &[u8]) -> Result<SwapFields, DecodeError> {
    Ok(SwapFields {
        token_a: Some(read_address(p, at(0))?),
        token_b: Some(read_address(p, at(1))?),
        liquidity: Some(read_uint(p, at(2))?),
        amount_a_min: Some(read_uint(p, at(3))?),
        amount_b_min: Some(read_uint(p, at(4))?),
        recipient: Some(read_address(p, at(5))?),
        ..Default::default()
    })
}

/// ETH removal family: `(token, liquidity, amountTokenMin, amountETHMin, to, ...)`.
///
/// Liquidity is read from the low 10 bytes of word `[1]` (bytes 54..64), which
/// covers every LP balance below 2^80.
fn remove_liquidity_eth(p: &[u8]) -> Result<SwapFields, DecodeError> {
    Ok(SwapFields {
        token_a: Some(read_address(p, at(0))?),
        liquidity: Some(read_uint_range(
            p,
            REMOVE_ETH_LIQUIDITY_OFFSET,
            REMOVE_ETH_LIQUIDITY_LEN,
        )?),
        amount_token_min: Some(read_uint(p, at(2))?),
        amount_eth_min: Some(read_uint(p, at(3))?),
        recipient: Some(read_address(p, at(4))?),
        ..Default::default()
    })
}
