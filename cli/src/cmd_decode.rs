//! `swapcodec decode` and `swapcodec methods`.

use anyhow::{anyhow, Context, Result};
use swapcodec_core::{ProtocolVersion, SwapCodecConfig, SwapRecord, TxMetadata};
use swapcodec_observability::SwapCodecMetrics;
use swapcodec_uniswap::{registry::parse_selector, resolve, router, MethodTag, UniswapDecoder};

pub fn run(
    config: &SwapCodecConfig,
    calldata: &str,
    version: Option<ProtocolVersion>,
    to: &str,
    tx_hash: &str,
    value: &str,
    as_json: bool,
) -> Result<()> {
    let version = match version {
        Some(v) => v,
        None => router::version_for_router(to).ok_or_else(|| {
            anyhow!("cannot infer router version from --to '{}'; pass --version v2|v3", to)
        })?,
    };

    let decoder = UniswapDecoder::with_config(config.decoder.clone());
    let tx = TxMetadata::new(tx_hash, to).with_value(value);
    let metrics = SwapCodecMetrics::global();

    let records = match decoder.decode_hex(calldata, version, &tx) {
        Ok(r) => r,
        Err(e) => {
            metrics.record_error(version.as_str(), &e);
            return Err(e).context("decode calldata");
        }
    };
    for rec in &records {
        metrics.record_decoded(rec);
    }
    if let Some(n) = records.first().and_then(|r| r.number_of_calls) {
        metrics.record_multicall(n);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("(empty multicall, no records)");
    }
    for (i, rec) in records.iter().enumerate() {
        if records.len() > 1 {
            println!("[{}]", i);
        }
        print_record(rec)?;
    }
    Ok(())
}

fn print_record(rec: &SwapRecord) -> Result<()> {
    println!("Method:   {} (0x{})", rec.method_name, rec.method_id);
    println!("Version:  {}", rec.version);
    if let Some(n) = rec.number_of_calls {
        println!("Calls:    {}", n);
    }
    println!("Fields:");
    let fields = serde_json::to_value(&rec.fields)?;
    if let Some(map) = fields.as_object() {
        for (name, val) in map {
            println!("  {}: {}", name, val.as_str().unwrap_or_default());
        }
    }
    Ok(())
}

pub fn methods(version: Option<ProtocolVersion>, selector: Option<&str>) -> Result<()> {
    if let Some(sel) = selector {
        let bytes = parse_selector(sel)?;
        let versions = version.map_or(vec![ProtocolVersion::V2, ProtocolVersion::V3], |v| vec![v]);
        let mut found = false;
        for v in versions {
            if let Ok(tag) = resolve(bytes, v) {
                print_method(tag);
                found = true;
            }
        }
        if !found {
            anyhow::bail!("selector {} is not a registered router method", sel);
        }
        return Ok(());
    }

    let versions = version.map_or(vec![ProtocolVersion::V2, ProtocolVersion::V3], |v| vec![v]);
    for v in versions {
        let tags = MethodTag::all(v);
        println!("{} router ({} methods):", v, tags.len());
        for tag in tags {
            print_method(tag);
        }
        println!();
    }
    Ok(())
}

fn print_method(tag: MethodTag) {
    let mut flags = Vec::new();
    if tag.is_eth_input() {
        flags.push("eth-in");
    }
    if tag.is_eth_output() {
        flags.push("eth-out");
    }
    println!(
        "  {} 0x{}  {:40} {}",
        tag.version(),
        tag.selector_hex(),
        tag.name(),
        flags.join(",")
    );
    println!("       {}", tag.signature());
}
