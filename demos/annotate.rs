//! Example annotating AS numbers with names from a registry file
//!
//! Run with: cargo run --example annotate -- autnums.txt 3356 2.21 15169

use anyhow::{Context, Result};
use asnames::{AsNames, AsNamesConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the annotation example.
#[derive(Parser, Debug)]
#[clap(about = "Look up AS names in an autnums-style registry", long_about = None)]
struct Args {
    /// Registry file (one `AS<number> <name>` entry per line)
    registry: std::path::PathBuf,

    /// AS numbers to look up, plain (`131093`) or dotted (`2.21`)
    #[clap(required = true)]
    asns: Vec<String>,

    /// Print full names instead of short names
    #[clap(long)]
    full: bool,

    /// Name reported for AS numbers missing from the registry
    #[clap(long)]
    unknown: Option<String>,

    /// Output results in JSON format
    #[clap(long)]
    json: bool,

    /// Enable verbose output (use -vv to list skipped lines)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Accept `AS3356` as well as `3356`; only one `AS` prefix is removed.
fn asn_token(arg: &str) -> &str {
    arg.strip_prefix("AS").unwrap_or(arg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = AsNamesConfig::builder();
    if let Some(unknown) = &args.unknown {
        config = config.unknown_full(unknown);
    }
    let config = config.build().map_err(anyhow::Error::msg)?;

    let db = AsNames::load_with_config(&args.registry, config)
        .with_context(|| format!("loading {}", args.registry.display()))?;

    let mut described = Vec::with_capacity(args.asns.len());
    for token in &args.asns {
        let token = asn_token(token);
        described.push(db.describe(token).with_context(|| format!("bad AS number {token:?}"))?);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&described)?);
        return Ok(());
    }

    for entry in described {
        let name = if args.full { entry.full } else { entry.short };
        println!("AS{:<10} {}", entry.asn.to_string(), name);
    }
    Ok(())
}
