//! Router protocol version.

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Uniswap router generation a transaction was sent to.
///
/// Callers decide the version (usually from the destination address, see
/// `swapcodec_uniswap::router`). Parsing is case-insensitive and happens once
/// at the boundary; everything downstream matches on the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtocolVersion {
    #[serde(alias = "v2")]
    V2,
    #[serde(alias = "v3")]
    V3,
}

impl ProtocolVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtocolVersion::V2 => "V2",
            ProtocolVersion::V3 => "V3",
        }
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtocolVersion {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("v2") => Ok(ProtocolVersion::V2),
            v if v.eq_ignore_ascii_case("v3") => Ok(ProtocolVersion::V3),
            other => Err(DecodeError::UnknownVersion {
                input: other.to_string(),
            }),
        }
    }
}
