//! Function selector computation.
//!
//! The selector of a Solidity function is the first four bytes of the
//! keccak256 hash of its canonical signature, e.g.:
//!   keccak256("multicall(bytes[])")[..4] → 0xac9650d8

use tiny_keccak::{Hasher, Keccak};

/// keccak256 of a canonical signature string.
pub fn keccak256_signature(signature: &str) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(signature.as_bytes());
    hasher.finalize(&mut output);
    output
}

/// The 4-byte selector of `"name(type1,type2,...)"`.
pub fn selector_of(signature: &str) -> [u8; 4] {
    let hash = keccak256_signature(signature);
    [hash[0], hash[1], hash[2], hash[3]]
}
