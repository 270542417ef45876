//! Fixed-width ABI word access over untrusted byte buffers.
//!
//! Solidity ABI encoding lays parameters out in 32-byte big-endian words.
//! Addresses occupy the low 20 bytes of their word; integers are
//! right-aligned. Every reader here is bounds-checked and returns
//! `DecodeError::Truncated` instead of panicking on short input.

use crate::error::DecodeError;
use alloy_primitives::U256;

/// Size of one ABI word in bytes.
pub const WORD_SIZE: usize = 32;

/// Size of an EVM address in bytes.
pub const ADDRESS_SIZE: usize = 20;

/// Byte offset of word `index`.
#[inline]
pub const fn at(index: usize) -> usize {
    index * WORD_SIZE
}

/// Bounds-checked sub-slice `buf[start..start + len]`.
pub fn slice(buf: &[u8], start: usize, len: usize) -> Result<&[u8], DecodeError> {
    let end = start.checked_add(len).ok_or_else(|| DecodeError::OutOfBounds {
        reason: format!("range {start}+{len} overflows"),
    })?;
    buf.get(start..end).ok_or(DecodeError::Truncated {
        offset: start,
        needed: len,
        available: buf.len().saturating_sub(start),
    })
}

/// The 32-byte word starting at `offset`.
pub fn word(buf: &[u8], offset: usize) -> Result<&[u8; WORD_SIZE], DecodeError> {
    let bytes = slice(buf, offset, WORD_SIZE)?;
    // slice() returned exactly WORD_SIZE bytes
    bytes.try_into().map_err(|_| DecodeError::OutOfBounds {
        reason: format!("word at {offset} is not {WORD_SIZE} bytes"),
    })
}

/// Lowercase `0x`-prefixed hex of an address-sized byte slice.
pub fn format_address(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Read the address held in the low 20 bytes of the word at `offset`.
/// The upper 12 bytes are ignored, whatever they contain.
pub fn read_address(buf: &[u8], offset: usize) -> Result<String, DecodeError> {
    let w = word(buf, offset)?;
    Ok(format_address(&w[WORD_SIZE - ADDRESS_SIZE..]))
}

/// Read a tightly packed 20-byte address starting at `start` (V3 paths).
pub fn read_address_packed(buf: &[u8], start: usize) -> Result<String, DecodeError> {
    Ok(format_address(slice(buf, start, ADDRESS_SIZE)?))
}

/// Read the full word at `offset` as an unsigned integer, in base 10.
pub fn read_uint(buf: &[u8], offset: usize) -> Result<String, DecodeError> {
    let w = word(buf, offset)?;
    Ok(U256::from_be_bytes(*w).to_string())
}

/// Read the unsigned big-endian integer encoded in `buf[start..start + len]`,
/// in base 10. `len` may be anything from 0 to 32 bytes.
pub fn read_uint_range(buf: &[u8], start: usize, len: usize) -> Result<String, DecodeError> {
    if len > WORD_SIZE {
        return Err(DecodeError::OutOfBounds {
            reason: format!("integer slice of {len} bytes exceeds {WORD_SIZE}"),
        });
    }
    let bytes = slice(buf, start, len)?;
    let mut padded = [0u8; WORD_SIZE];
    padded[WORD_SIZE - len..].copy_from_slice(bytes);
    Ok(U256::from_be_bytes(padded).to_string())
}

/// Raw bytes of `buf[start..start + len]` as lowercase `0x` hex.
pub fn read_hex_range(buf: &[u8], start: usize, len: usize) -> Result<String, DecodeError> {
    Ok(format!("0x{}", hex::encode(slice(buf, start, len)?)))
}

/// Read the word at `offset` as a length or offset.
///
/// Values that do not fit in 64 bits can never point inside a real buffer
/// and are reported as `OutOfBounds`.
pub fn read_offset(buf: &[u8], offset: usize) -> Result<usize, DecodeError> {
    let w = word(buf, offset)?;
    let (high, low) = w.split_at(WORD_SIZE - 8);
    if high.iter().any(|b| *b != 0) {
        return Err(DecodeError::OutOfBounds {
            reason: format!("offset word at {offset} does not fit in 64 bits"),
        });
    }
    let mut be = [0u8; 8];
    be.copy_from_slice(low);
    usize::try_from(u64::from_be_bytes(be)).map_err(|_| DecodeError::OutOfBounds {
        reason: format!("offset word at {offset} exceeds usize"),
    })
}

/// Parse `0x`-prefixed (or bare) hex into bytes.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, DecodeError> {
    let trimmed = input.trim();
    let stripped = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(stripped).map_err(|e| DecodeError::InvalidHex {
        reason: e.to_string(),
    })
}
