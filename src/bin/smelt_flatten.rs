//! smelt-flatten: Flatten document database exports for warehouse loading
//!
//! Usage:
//!   # Process the default exports (brands.json, receipts.json, users.json)
//!   smelt-flatten
//!
//!   # Process specific files, writing <name>_processed.json next to each
//!   smelt-flatten exports/receipts.json exports/users.json
//!
//!   # Read NDJSON from stdin, write flattened NDJSON to stdout
//!   cat users.json | smelt-flatten -
//!
//!   # Parse with simd-json
//!   smelt-flatten --simd receipts.json

// MiMalloc is the allocator simd-json recommends
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use smelt::{flatten_stream, process_file, ParserBackend, ProcessConfig, DEFAULT_INPUTS};
use std::io::{stdin, stdout, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "smelt-flatten")]
#[command(about = "Flatten NDJSON database exports for columnar loading", long_about = None)]
struct Args {
    /// Input NDJSON files ("-" reads stdin and writes stdout)
    #[arg(value_name = "FILES", default_values = DEFAULT_INPUTS)]
    inputs: Vec<String>,

    /// Parse input lines with simd-json
    #[arg(long)]
    simd: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug).ok();

    let parser = if args.simd {
        ParserBackend::Simd
    } else {
        ParserBackend::Serde
    };
    let config = ProcessConfig::default().with_parser(parser);

    for input in &args.inputs {
        if input == "-" {
            let count = flatten_stream(stdin().lock(), BufWriter::new(stdout().lock()), parser)
                .context("Failed to flatten stdin")?;
            tracing::info!(documents = count, "flattened stdin");
            continue;
        }

        let path = PathBuf::from(input);
        let report = process_file(&path, &config)
            .with_context(|| format!("Failed to process {}", path.display()))?;
        println!("{}", report);
    }

    Ok(())
}
