//! `multicall(bytes[])` and `multicall(uint256,bytes[])` decoding.
//!
//! The `bytes[]` argument is laid out as:
//! ```text
//! [head]  offset to the array (always 32 * (head_word + 1))
//! [base - 32] N
//! [base + 32*i] offset of element i, relative to base
//! [base + offset_i] length L_i, then L_i bytes of inner calldata
//! ```
//! Each inner call is a complete router call (selector + params) and is fed
//! back through the dispatcher with the version fixed to V3.

use crate::registry::{MethodTag, V3Method};
use crate::UniswapDecoder;
use alloy_primitives::Bytes;
use swapcodec_core::{
    word::{at, read_offset, WORD_SIZE},
    DecodeError, ProtocolVersion, SwapFields, SwapRecord, TxMetadata,
};
use tracing::{debug, trace};

/// Split the `bytes[]` whose head slot is word `head_word` into its elements.
///
/// Returned slices borrow from `params` and hold exactly the declared bytes of
/// each element (padding excluded).
pub fn split_calls(params: &[u8], head_word: usize) -> Result<Vec<&[u8]>, DecodeError> {
    let array_offset = read_offset(params, at(head_word))?;
    let expected = at(head_word + 1);
    if array_offset != expected {
        return Err(DecodeError::malformed(format!(
            "multicall array offset is {array_offset}, expected {expected}"
        )));
    }

    let count = read_offset(params, array_offset)?;
    let base = array_offset + WORD_SIZE;
    let available = params.len().saturating_sub(base);
    if count > available / WORD_SIZE {
        return Err(DecodeError::Truncated {
            offset: base,
            needed: count.saturating_mul(WORD_SIZE),
            available,
        });
    }
    trace!(count, base, "multicall array");

    let offsets = (0..count)
        .map(|i| read_offset(params, base + at(i)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut calls = Vec::with_capacity(count);
    for (i, rel) in offsets.iter().enumerate() {
        let start = base.checked_add(*rel);
        let end = match offsets.get(i + 1) {
            Some(next) => base.checked_add(*next),
            None => Some(params.len()),
        };
        let (start, end) = match (start, end) {
            (Some(s), Some(e)) if s <= e && e <= params.len() => (s, e),
            _ => {
                return Err(DecodeError::malformed(format!(
                    "multicall element {i} region is out of order or past the end"
                )))
            }
        };
        let region = &params[start..end];
        let len = read_offset(region, 0)?;
        if len > region.len() - WORD_SIZE {
            return Err(DecodeError::malformed(format!(
                "multicall element {i} declares {len} bytes, region holds {}",
                region.len() - WORD_SIZE
            )));
        }
        trace!(index = i, start, len, "multicall element");
        calls.push(&region[WORD_SIZE..WORD_SIZE + len]);
    }
    Ok(calls)
}

/// The `bytes[]` head slot for a multicall selector, or `UnknownSelector`.
fn multicall_method(calldata: &[u8]) -> Result<V3Method, DecodeError> {
    let selector = crate::selector_bytes(calldata)?;
    V3Method::from_selector(selector)
        .filter(|m| m.is_multicall())
        .ok_or_else(|| DecodeError::UnknownSelector {
            selector: hex::encode(selector),
            version: ProtocolVersion::V3,
        })
}

/// Build the staging record for a multicall: the declared call count plus the
/// raw inner calldata, without decoding any element.
pub fn stage_multicall(calldata: &[u8], tx: &TxMetadata) -> Result<SwapRecord, DecodeError> {
    let method = multicall_method(calldata)?;
    let head_word = method.multicall_head_word().unwrap_or(0);
    let calls = split_calls(&calldata[4..], head_word)?;
    let mut record = SwapRecord::new(
        tx,
        ProtocolVersion::V3,
        MethodTag::V3(method).selector_hex(),
        method.name(),
        SwapFields::default(),
    )
    .with_number_of_calls(calls.len());
    record.calls_data = calls.into_iter().map(Bytes::copy_from_slice).collect();
    Ok(record)
}

/// Decode every inner call of a multicall at nesting level `depth` (1 for a
/// top-level multicall).
///
/// Fail-fast: the first inner error aborts the whole multicall and no partial
/// records are returned.
///
/// Nested multicalls are flattened in place: the output holds one record per
/// leaf call, so it has `n` records only when no element is itself a multicall.
/// An empty nested multicall contributes nothing.
pub fn decode_multicall(
    decoder: &UniswapDecoder,
    method: V3Method,
    params: &[u8],
    tx: &TxMetadata,
    depth: usize,
) -> Result<Vec<SwapRecord>, DecodeError> {
    let max = decoder.config().max_multicall_depth;
    if depth > max {
        return Err(DecodeError::malformed(format!(
            "multicall nesting depth {depth} exceeds the limit of {max}"
        )));
    }
    let head_word = method.multicall_head_word().unwrap_or(0);
    let calls = split_calls(params, head_word)?;
    let n = calls.len();
    debug!(method = method.name(), calls = n, depth, "decoding multicall");

    let mut records = Vec::with_capacity(n);
    for (i, inner) in calls.into_iter().enumerate() {
        let decoded = decoder
            .decode_at_depth(inner, ProtocolVersion::V3, tx, depth)
            .map_err(|e| {
                debug!(index = i, error = %e, "multicall element failed");
                e
            })?;
        records.extend(decoded);
    }
    for rec in &mut records {
        // records of a nested multicall keep their own count
        rec.number_of_calls.get_or_insert(n);
    }
    Ok(records)
}
