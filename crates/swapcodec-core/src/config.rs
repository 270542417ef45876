//! Decoder and batch configuration.

use crate::decoder::ErrorMode;
use crate::record::EXCHANGE_UNISWAP;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration for the calldata decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// How many multicalls may be nested inside one another.
    #[serde(default = "default_max_multicall_depth")]
    pub max_multicall_depth: usize,
    /// Value stamped into `SwapRecord::exchange`.
    #[serde(default = "default_exchange")]
    pub exchange: String,
}

fn default_max_multicall_depth() -> usize { 4 }
fn default_exchange() -> String { EXCHANGE_UNISWAP.to_string() }

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_multicall_depth: default_max_multicall_depth(),
            exchange: default_exchange(),
        }
    }
}

/// Configuration for batch decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Max transactions per chunk (memory safety)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// How to handle per-transaction decode errors
    #[serde(default)]
    pub error_mode: ErrorMode,
}

fn default_chunk_size() -> usize { 10_000 }

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            error_mode: ErrorMode::Skip,
        }
    }
}

/// Log settings as they appear in a config file.
/// Mirrors `swapcodec_observability::LogConfig` without depending on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// "trace" | "debug" | "info" | "warn" | "error"
    #[serde(default = "default_level")]
    pub level: String,
    /// component_name → level
    #[serde(default)]
    pub components: HashMap<String, String>,
    /// Emit JSON structured logs
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String { "info".to_string() }

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            components: HashMap::new(),
            json: false,
        }
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapCodecConfig {
    #[serde(default)]
    pub decoder: DecoderConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub log: LogSettings,
}

impl SwapCodecConfig {
    /// Parse a JSON config document.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SwapCodecConfig::default();
        assert_eq!(cfg.decoder.max_multicall_depth, 4);
        assert_eq!(cfg.decoder.exchange, "Uniswap");
        assert_eq!(cfg.batch.chunk_size, 10_000);
        assert_eq!(cfg.batch.error_mode, ErrorMode::Skip);
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg =
            SwapCodecConfig::from_json(r#"{ "batch": { "error_mode": "collect" } }"#).unwrap();
        assert_eq!(cfg.batch.error_mode, ErrorMode::Collect);
        assert_eq!(cfg.batch.chunk_size, 10_000);
        assert_eq!(cfg.decoder, DecoderConfig::default());
    }

    #[test]
    fn yaml_document() {
        let yaml = "decoder:\n  max_multicall_depth: 2\nlog:\n  level: debug\n  json: true\n";
        let cfg: SwapCodecConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.decoder.max_multicall_depth, 2);
        assert_eq!(cfg.decoder.exchange, "Uniswap");
        assert!(cfg.log.json);
        assert_eq!(cfg.log.level, "debug");
    }
}
