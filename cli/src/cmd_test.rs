//! `swapcodec test` — run golden test fixture files.
//!
//! Fixture format (JSON):
//! ```json
//! {
//!   "description": "V3 exactInput, two hops",
//!   "version": "v3",
//!   "txHash": "0xabc...",
//!   "to": "0xe592427a0aece92de3edee1f18e0157c05861564",
//!   "value": "0",
//!   "calldata": "0xc04b8d59...",
//!   "expectedRecords": [
//!     {
//!       "methodId": "c04b8d59",
//!       "methodName": "ExactInput",
//!       "fields": { "token_path_from": "0x...", "amount_in": "1000" }
//!     }
//!   ]
//! }
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use swapcodec_core::{DecoderConfig, ProtocolVersion, SwapRecord, TxMetadata};
use swapcodec_uniswap::UniswapDecoder;

#[derive(Deserialize)]
struct Fixture {
    description: Option<String>,
    version: ProtocolVersion,
    #[serde(rename = "txHash", default)]
    tx_hash: String,
    #[serde(default)]
    to: String,
    #[serde(default)]
    value: String,
    calldata: String,
    #[serde(rename = "expectedRecords")]
    expected_records: Vec<ExpectedRecord>,
}

#[derive(Deserialize)]
struct ExpectedRecord {
    #[serde(rename = "methodId")]
    method_id: String,
    #[serde(rename = "methodName")]
    method_name: String,
    #[serde(rename = "numberOfCalls", default)]
    number_of_calls: Option<usize>,
    #[serde(default)]
    fields: BTreeMap<String, String>,
}

pub fn run(config: &DecoderConfig, fixtures_dir: &str, verbose: bool) -> Result<()> {
    let dir = Path::new(fixtures_dir);
    if !dir.exists() {
        println!("Fixtures directory '{}' not found — skipping", fixtures_dir);
        return Ok(());
    }

    let decoder = UniswapDecoder::with_config(config.clone());
    let mut passed = 0usize;
    let mut failed = 0usize;

    let mut fixture_paths: Vec<_> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
        .map(|e| e.into_path())
        .collect();
    fixture_paths.sort();

    for path in &fixture_paths {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("  ✗ {}: read error: {}", path.display(), e);
                failed += 1;
                continue;
            }
        };

        let fixture: Fixture = match serde_json::from_str(&content) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("  ✗ {}: parse error: {}", path.display(), e);
                failed += 1;
                continue;
            }
        };

        let desc = fixture
            .description
            .clone()
            .unwrap_or_else(|| path.display().to_string());

        let tx = TxMetadata::new(fixture.tx_hash.as_str(), fixture.to.as_str())
            .with_value(fixture.value.as_str());
        let records = match decoder.decode_hex(&fixture.calldata, fixture.version, &tx) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("  ✗ {}: decode error: {}", desc, e);
                failed += 1;
                continue;
            }
        };

        let errors = compare(&records, &fixture.expected_records);
        if errors.is_empty() {
            println!("  ✓ {}", desc);
            if verbose {
                for rec in &records {
                    println!("      {} ({} fields)", rec.method_name, populated(rec).len());
                }
            }
            passed += 1;
        } else {
            eprintln!("  ✗ {}", desc);
            for e in &errors {
                eprintln!("      {}", e);
            }
            failed += 1;
        }
    }

    println!();
    println!(
        "Results: {} passed, {} failed  (total fixtures: {})",
        passed,
        failed,
        fixture_paths.len()
    );

    if failed > 0 {
        anyhow::bail!("{} fixture(s) failed", failed);
    }
    Ok(())
}

/// Populated fields of `rec`, by name.
fn populated(rec: &SwapRecord) -> BTreeMap<String, String> {
    serde_json::to_value(&rec.fields)
        .ok()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

fn compare(records: &[SwapRecord], expected: &[ExpectedRecord]) -> Vec<String> {
    let mut errors = Vec::new();
    if records.len() != expected.len() {
        errors.push(format!(
            "record count: got {}, want {}",
            records.len(),
            expected.len()
        ));
        return errors;
    }

    for (i, (rec, want)) in records.iter().zip(expected).enumerate() {
        if rec.method_id != want.method_id.to_lowercase() {
            errors.push(format!(
                "[{}] methodId: got '{}', want '{}'",
                i, rec.method_id, want.method_id
            ));
        }
        if rec.method_name != want.method_name {
            errors.push(format!(
                "[{}] methodName: got '{}', want '{}'",
                i, rec.method_name, want.method_name
            ));
        }
        if rec.number_of_calls != want.number_of_calls {
            errors.push(format!(
                "[{}] numberOfCalls: got {:?}, want {:?}",
                i, rec.number_of_calls, want.number_of_calls
            ));
        }

        let actual = populated(rec);
        for (field, expected_val) in &want.fields {
            match actual.get(field) {
                None => errors.push(format!("[{}] missing field '{}'", i, field)),
                Some(v) if v.to_lowercase() != expected_val.to_lowercase() => {
                    errors.push(format!(
                        "[{}] field '{}': got '{}', want '{}'",
                        i, field, v, expected_val
                    ));
                }
                Some(_) => {}
            }
        }
        for field in actual.keys().filter(|k| !want.fields.contains_key(*k)) {
            errors.push(format!("[{}] unexpected field '{}'", i, field));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures_dir() -> String {
        format!("{}/../fixtures", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn bundled_fixtures_pass() {
        run(&DecoderConfig::default(), &fixtures_dir(), false).unwrap();
    }

    #[test]
    fn missing_directory_is_skipped() {
        run(&DecoderConfig::default(), "/nonexistent/fixtures", false).unwrap();
    }

    #[test]
    fn compare_reports_mismatches() {
        let tx = TxMetadata::new("0x1", "0x2");
        let rec = SwapRecord::new(
            &tx,
            ProtocolVersion::V3,
            "49404b7c",
            "UnwrapWETH9",
            swapcodec_core::SwapFields {
                amount_out_min: Some("5".into()),
                ..Default::default()
            },
        );
        let want = ExpectedRecord {
            method_id: "49404B7C".into(),
            method_name: "UnwrapWETH9".into(),
            number_of_calls: None,
            fields: BTreeMap::from([("amount_out_min".to_string(), "6".to_string())]),
        };
        let errors = compare(&[rec], &[want]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("amount_out_min"));
    }
}
