//! SwapCodec CLI — decode Uniswap router calldata from the command line.
//!
//! # Commands
//! ```text
//! swapcodec decode   --calldata <hex> [--version v2|v3] [--to <addr>] [--json]
//! swapcodec methods  [--version v2|v3] [--selector <hex>]
//! swapcodec batch    --input <file.jsonl> [--chunk-size N] [--mode skip|collect|throw]
//! swapcodec test     --fixtures <dir>
//! swapcodec info
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use swapcodec_core::{ErrorMode, ProtocolVersion, SwapCodecConfig};
use swapcodec_observability::{init_tracing, LogConfig};

mod cmd_batch;
mod cmd_decode;
mod cmd_test;

#[derive(Parser)]
#[command(
    name = "swapcodec",
    about = "Uniswap router calldata decoder — SwapCodec CLI",
    long_about = "
SwapCodec CLI: decode Uniswap V2 router and V3 SwapRouter calldata
(including multicall bundles) into flat swap records.

ENVIRONMENT VARIABLES:
  SWAPCODEC_LOG    tracing filter directives, e.g. 'debug' or 'swapcodec_uniswap=trace'
",
    version
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML or JSON config file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one transaction's calldata
    Decode {
        /// Raw calldata (0x-prefixed hex)
        #[arg(long)]
        calldata: String,
        /// Router version; inferred from --to when omitted
        #[arg(long = "version", value_name = "v2|v3")]
        protocol: Option<ProtocolVersion>,
        /// Transaction destination (router address)
        #[arg(long, default_value = "")]
        to: String,
        /// Transaction hash stamped into the records
        #[arg(long, default_value = "")]
        tx_hash: String,
        /// Transaction value in wei
        #[arg(long, default_value = "0")]
        value: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the registered router methods
    Methods {
        /// Only list this version's registry
        #[arg(long = "version", value_name = "v2|v3")]
        protocol: Option<ProtocolVersion>,
        /// Look up a single selector, e.g. 0x38ed1739
        #[arg(long)]
        selector: Option<String>,
    },

    /// Decode a JSONL file of transactions in parallel
    Batch {
        /// One JSON object per line: {"calldata","version","txHash","to","value"}
        #[arg(long)]
        input: String,
        /// Max transactions per chunk (overrides config)
        #[arg(long)]
        chunk_size: Option<usize>,
        /// skip | collect | throw (overrides config)
        #[arg(long)]
        mode: Option<ErrorMode>,
    },

    /// Run golden test fixtures
    Test {
        /// Directory containing fixture JSON files
        #[arg(long, default_value = "./fixtures")]
        fixtures: String,
    },

    /// Show SwapCodec build and capability info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(Path::new(path))?,
        None => SwapCodecConfig::default(),
    };
    let mut log = LogConfig::from(config.log.clone());
    if cli.verbose {
        log.level = "debug".into();
    }
    init_tracing(&log);

    match cli.command {
        Commands::Decode { calldata, protocol, to, tx_hash, value, json } => {
            cmd_decode::run(&config, &calldata, protocol, &to, &tx_hash, &value, json)
        }

        Commands::Methods { protocol, selector } => {
            cmd_decode::methods(protocol, selector.as_deref())
        }

        Commands::Batch { input, chunk_size, mode } => {
            let mut batch = config.batch.clone();
            if let Some(n) = chunk_size {
                batch.chunk_size = n;
            }
            if let Some(m) = mode {
                batch.error_mode = m;
            }
            cmd_batch::run(&config.decoder, &batch, &input)
        }

        Commands::Test { fixtures } => cmd_test::run(&config.decoder, &fixtures, cli.verbose),

        Commands::Info => cmd_info(),
    }
}

/// Load a config file; `.yaml`/`.yml` are read as YAML, anything else as JSON.
fn load_config(path: &Path) -> Result<SwapCodecConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read config file '{}'", path.display()))?;
    let is_yaml = path
        .extension()
        .map_or(false, |ext| ext == "yaml" || ext == "yml");
    let config = if is_yaml {
        serde_yaml::from_str(&content).context("parse YAML config")?
    } else {
        SwapCodecConfig::from_json(&content).context("parse JSON config")?
    };
    Ok(config)
}

fn cmd_info() -> Result<()> {
    println!("SwapCodec v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Capabilities:");
    println!("  ✓ Uniswap V2 router        (swaps, add/remove liquidity)");
    println!("  ✓ Uniswap V3 SwapRouter    (exact input/output, single and multi-hop)");
    println!("  ✓ Multicall expansion      (multicall(bytes[]), multicall(uint256,bytes[]))");
    println!("  ✓ Packed V3 paths          (token | fee | token ...)");
    println!("  ✓ Parallel batch decode    (Rayon)");
    println!("  ✓ Structured logging       (tracing, JSON optional)");
    println!("  ✓ OpenTelemetry metrics");
    println!();
    println!(
        "Registered methods:          {} V2, {} V3",
        swapcodec_uniswap::V2Method::ALL.len(),
        swapcodec_uniswap::V3Method::ALL.len()
    );
    println!("Known routers:");
    println!("  V2  {}", swapcodec_uniswap::router::V2_ROUTER);
    println!("  V3  {}", swapcodec_uniswap::router::V3_ROUTER);
    println!("  V3  {}", swapcodec_uniswap::router::V3_ROUTER_02);
    Ok(())
}
