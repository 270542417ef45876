//! Uniswap V3 `SwapRouter` decoders.
//!
//! The single-hop entry points take a static params struct, so its fields sit
//! inline in the parameter block. The multi-hop entry points take a struct with
//! a dynamic `bytes path`, encoded as a tuple offset followed by the tuple body.
//!
//! Packed path layout: `token(20) | fee(3) | token(20) | fee(3) | ... | token(20)`.

use crate::registry::V3Method;
use swapcodec_core::{
    word::{
        at, read_address, read_address_packed, read_hex_range, read_offset, read_uint, slice,
        ADDRESS_SIZE, WORD_SIZE,
    },
    DecodeError, SwapFields,
};
use tracing::trace;

/// Width of a packed fee tier.
pub const FEE_SIZE: usize = 3;
/// Shortest valid packed path: one pool.
pub const MIN_PATH_LEN: usize = ADDRESS_SIZE + FEE_SIZE + ADDRESS_SIZE;

/// Decode the parameter block of a non-multicall V3 method.
///
/// Multicall variants are routed by the dispatcher before reaching here; if
/// one does arrive, it is rejected as malformed.
pub fn decode(method: V3Method, params: &[u8]) -> Result<SwapFields, DecodeError> {
    match method {
        V3Method::ExactInputSingle => exact_input_single(params),
        V3Method::ExactOutputSingle => exact_output_single(params),
        V3Method::ExactInput => exact_input(params),
        V3Method::ExactOutput => exact_output(params),
        V3Method::UnwrapWETH9 => unwrap_weth9(params),
        V3Method::SweepToken => sweep_token(params),
        V3Method::RefundETH => Ok(SwapFields::default()),
        V3Method::Multicall | V3Method::MulticallWithValue => Err(DecodeError::malformed(
            format!("{} must be decoded as a multicall", method.name()),
        )),
    }
}

/// Endpoints and first fee tier of a packed V3 path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPath {
    pub first: String,
    pub last: String,
    /// First fee tier as `0x` + 6 hex chars.
    pub fee: String,
    /// Number of pools the path crosses.
    pub hops: usize,
}

/// Parse the packed path held in `bytes` at `offset` (length word + data).
pub fn read_packed_path(buf: &[u8], offset: usize) -> Result<PackedPath, DecodeError> {
    let len = read_offset(buf, offset)?;
    trace!(offset, len, "v3 packed path");
    if len < MIN_PATH_LEN || (len - ADDRESS_SIZE) % (ADDRESS_SIZE + FEE_SIZE) != 0 {
        return Err(DecodeError::malformed(format!(
            "packed path length {len} is not 20 + 23k (k >= 1)"
        )));
    }
    let start = offset.checked_add(WORD_SIZE).ok_or_else(|| DecodeError::OutOfBounds {
        reason: format!("path offset {offset} overflows"),
    })?;
    let path = slice(buf, start, len)?;
    Ok(PackedPath {
        first: read_address_packed(path, 0)?,
        fee: read_hex_range(path, ADDRESS_SIZE, FEE_SIZE)?,
        last: read_address_packed(path, len - ADDRESS_SIZE)?,
        hops: (len - ADDRESS_SIZE) / (ADDRESS_SIZE + FEE_SIZE),
    })
}

// (tokenIn, tokenOut, fee, recipient, deadline, amountIn, amountOutMinimum, sqrtPriceLimitX96)
fn exact_input_single(p: &[u8]) -> Result<SwapFields, DecodeError> {
    Ok(SwapFields {
        token_path_from: Some(read_address(p, at(0))?),
        token_path_to: Some(read_address(p, at(1))?),
        recipient: Some(read_address(p, at(3))?),
        amount_in: Some(read_uint(p, at(5))?),
        amount_out_min: Some(read_uint(p, at(6))?),
        ..Default::default()
    })
}

// (tokenIn, tokenOut, fee, recipient, deadline, amountOut, amountInMaximum, sqrtPriceLimitX96)
fn exact_output_single(p: &[u8]) -> Result<SwapFields, DecodeError> {
    let amount_in_max = read_uint(p, at(6))?;
    Ok(SwapFields {
        token_path_from: Some(read_address(p, at(0))?),
        token_path_to: Some(read_address(p, at(1))?),
        recipient: Some(read_address(p, at(3))?),
        amount_out: Some(read_uint(p, at(5))?),
        amount_in: Some(amount_in_max.clone()),
        amount_in_max: Some(amount_in_max),
        ..Default::default()
    })
}

/// Resolve the `(bytes path, address recipient, uint256 deadline, uint256, uint256)`
/// tuple: returns the tuple body and its decoded path.
fn path_tuple(p: &[u8]) -> Result<(&[u8], PackedPath), DecodeError> {
    let tuple_offset = read_offset(p, at(0))?;
    let tuple = p.get(tuple_offset..).ok_or(DecodeError::Truncated {
        offset: tuple_offset,
        needed: WORD_SIZE,
        available: 0,
    })?;
    // path offset is relative to the start of the tuple
    let path_offset = read_offset(tuple, at(0))?;
    let path = read_packed_path(tuple, path_offset)?;
    Ok((tuple, path))
}

// ((path, recipient, deadline, amountIn, amountOutMinimum))
fn exact_input(p: &[u8]) -> Result<SwapFields, DecodeError> {
    let (t, path) = path_tuple(p)?;
    Ok(SwapFields {
        token_path_from: Some(path.first),
        token_path_to: Some(path.last),
        fee: Some(path.fee),
        recipient: Some(read_address(t, at(1))?),
        amount_in: Some(read_uint(t, at(3))?),
        amount_out_min: Some(read_uint(t, at(4))?),
        ..Default::default()
    })
}

// ((path, recipient, deadline, amountOut, amountInMaximum)); path is output-first
fn exact_output(p: &[u8]) -> Result<SwapFields, DecodeError> {
    let (t, path) = path_tuple(p)?;
    let amount_in_max = read_uint(t, at(4))?;
    Ok(SwapFields {
        token_path_from: Some(path.last),
        token_path_to: Some(path.first),
        fee: Some(path.fee),
        recipient: Some(read_address(t, at(1))?),
        amount_out: Some(read_uint(t, at(3))?),
        amount_in: Some(amount_in_max.clone()),
        amount_in_max: Some(amount_in_max),
        ..Default::default()
    })
}

fn unwrap_weth9(p: &[u8]) -> Result<SwapFields, DecodeError> {
    Ok(SwapFields {
        amount_out_min: Some(read_uint(p, at(0))?),
        recipient: Some(read_address(p, at(1))?),
        ..Default::default()
    })
}

fn sweep_token(p: &[u8]) -> Result<SwapFields, DecodeError> {
    Ok(SwapFields {
        token_path_to: Some(read_address(p, at(0))?),
        amount_out_min: Some(read_uint(p, at(1))?),
        recipient: Some(read_address(p, at(2))?),
        ..Default::default()
    })
}
