//! Golden fixture integration tests.
//!
//! Each fixture in `fixtures/uniswap/` holds real (or hand-encoded) router
//! calldata together with the records it must decode to. Every fixture is
//! decoded through the public `UniswapDecoder` API and compared field by field.

use serde_json::Value;
use swapcodec_core::{DecodeError, ProtocolVersion, SwapRecord, TxMetadata};
use swapcodec_uniswap::UniswapDecoder;

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// The fixtures live two levels above the crate root.
fn fixture_path(name: &str) -> std::path::PathBuf {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push("../../fixtures/uniswap");
    p.push(name);
    p
}

fn load(name: &str) -> Value {
    let json = std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("fixture {name} not found: {e}"));
    serde_json::from_str(&json).unwrap()
}

fn tx_from_fixture(f: &Value) -> TxMetadata {
    TxMetadata::new(
        f["txHash"].as_str().unwrap(),
        f["to"].as_str().unwrap(),
    )
    .with_value(f["value"].as_str().unwrap_or("0"))
}

fn decode_fixture(f: &Value) -> Result<Vec<SwapRecord>, DecodeError> {
    let version: ProtocolVersion = f["version"].as_str().unwrap().parse().unwrap();
    UniswapDecoder::new().decode_hex(f["calldata"].as_str().unwrap(), version, &tx_from_fixture(f))
}

/// Assert that `records` match the fixture's `expectedRecords`.
fn assert_matches(name: &str, f: &Value, records: &[SwapRecord]) {
    let expected = f["expectedRecords"].as_array().unwrap();
    assert_eq!(records.len(), expected.len(), "{name}: record count");

    for (i, (rec, want)) in records.iter().zip(expected).enumerate() {
        assert_eq!(rec.method_id, want["methodId"].as_str().unwrap(), "{name}[{i}] methodId");
        assert_eq!(rec.method_name, want["methodName"].as_str().unwrap(), "{name}[{i}] methodName");
        assert_eq!(
            rec.number_of_calls,
            want["numberOfCalls"].as_u64().map(|n| n as usize),
            "{name}[{i}] numberOfCalls"
        );
        assert_eq!(rec.tx_hash, f["txHash"].as_str().unwrap());
        assert_eq!(rec.to_address, f["to"].as_str().unwrap());
        assert_eq!(rec.tx_value, f["value"].as_str().unwrap());
        assert_eq!(rec.exchange, "Uniswap");

        let fields = want["fields"].as_object().unwrap();
        for (field, value) in fields {
            assert_eq!(
                rec.field(field),
                value.as_str(),
                "{name}[{i}] field '{field}'"
            );
        }
        // nothing beyond the expected fields may be populated
        let populated = serde_json::to_value(&rec.fields).unwrap();
        assert_eq!(
            populated.as_object().unwrap().len(),
            fields.len(),
            "{name}[{i}] unexpected extra fields: {populated}"
        );
    }
}

fn run(name: &str) {
    let f = load(name);
    let records = decode_fixture(&f).unwrap_or_else(|e| panic!("{name}: {e}"));
    assert_matches(name, &f, &records);
}

// ─── V2 ───────────────────────────────────────────────────────────────────────

#[test]
fn v2_swap_exact_tokens_for_tokens() {
    run("v2-swap-exact-tokens-for-tokens.json");
}

#[test]
fn v2_swap_exact_tokens_for_eth_fee_on_transfer() {
    run("v2-swap-exact-tokens-for-eth-fot.json");
}

#[test]
fn v2_swap_exact_eth_for_tokens() {
    run("v2-swap-exact-eth-for-tokens.json");
}

#[test]
fn v2_swap_tokens_for_exact_tokens_three_hops() {
    run("v2-swap-tokens-for-exact-tokens-3hop.json");
}

#[test]
fn v2_add_liquidity() {
    run("v2-add-liquidity.json");
}

#[test]
fn v2_remove_liquidity() {
    run("v2-remove-liquidity.json");
    run("v2-remove-liquidity-dai-weth.json");
}

#[test]
fn v2_remove_liquidity_eth() {
    run("v2-remove-liquidity-eth.json");
}

// ─── V3 ───────────────────────────────────────────────────────────────────────

#[test]
fn v3_exact_input_single() {
    run("v3-exact-input-single.json");
}

#[test]
fn v3_exact_input() {
    run("v3-exact-input.json");
}

#[test]
fn v3_exact_output_single() {
    run("v3-exact-output-single.json");
}

#[test]
fn v3_exact_output() {
    run("v3-exact-output.json");
}

#[test]
fn v3_sweep_token() {
    run("v3-sweep-token.json");
}

// ─── Multicall ────────────────────────────────────────────────────────────────

#[test]
fn v3_multicall_two_calls() {
    run("v3-multicall-two-calls.json");
}

#[test]
fn v3_multicall_one_call() {
    run("v3-multicall-one-call.json");
}

#[test]
fn v3_multicall_with_deadline() {
    run("v3-multicall-with-deadline.json");
}

#[test]
fn v3_multicall_empty() {
    run("v3-multicall-empty.json");
}

#[test]
fn multicall_element_matches_standalone_decode() {
    let multi = decode_fixture(&load("v3-multicall-two-calls.json")).unwrap();
    let f = load("v3-multicall-two-calls.json");
    let standalone = UniswapDecoder::new()
        .decode(
            &multi_inner(&f, 0),
            ProtocolVersion::V3,
            &tx_from_fixture(&f),
        )
        .unwrap();
    assert_eq!(multi[0].fields, standalone[0].fields);
    assert_eq!(multi[0].method_id, standalone[0].method_id);
}

fn multi_inner(f: &Value, index: usize) -> Vec<u8> {
    let cd = swapcodec_core::word::decode_hex(f["calldata"].as_str().unwrap()).unwrap();
    let calls = swapcodec_uniswap::multicall::split_calls(&cd[4..], 0).unwrap();
    calls[index].to_vec()
}

// ─── Robustness ───────────────────────────────────────────────────────────────

#[test]
fn every_fixture_truncation_fails_without_panic() {
    let dir = fixture_path("");
    let mut names: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|n| n.ends_with(".json"))
        .collect();
    names.sort();
    assert!(!names.is_empty());

    for name in names {
        let f = load(&name);
        if f["expectedRecords"].as_array().map_or(true, |r| r.is_empty()) {
            continue;
        }
        let version: ProtocolVersion = f["version"].as_str().unwrap().parse().unwrap();
        let cd = swapcodec_core::word::decode_hex(f["calldata"].as_str().unwrap()).unwrap();
        let tx = tx_from_fixture(&f);
        let decoder = UniswapDecoder::new();
        for len in 0..cd.len() {
            let result = decoder.decode(&cd[..len], version, &tx);
            // selector plus less than one parameter word never decodes
            if len < 36 {
                assert!(result.is_err(), "{name}: prefix of {len} bytes decoded");
            }
        }
    }
}

#[test]
fn fixed_layout_prefixes_are_truncated() {
    // addLiquidity reads words [0]..[6]
    let f = load("v2-add-liquidity.json");
    let cd = swapcodec_core::word::decode_hex(f["calldata"].as_str().unwrap()).unwrap();
    let tx = tx_from_fixture(&f);
    let decoder = UniswapDecoder::new();
    for len in 0..4 + 7 * 32 {
        assert!(
            matches!(
                decoder.decode(&cd[..len], ProtocolVersion::V2, &tx),
                Err(DecodeError::Truncated { .. })
            ),
            "prefix of {len} bytes"
        );
    }
}

#[test]
fn records_serialize_to_json() {
    let records = decode_fixture(&load("v3-exact-input.json")).unwrap();
    let json = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(json["fee"], "0x002710");
    assert_eq!(json["method_name"], "ExactInput");
    assert_eq!(json["version"], "V3");
}
