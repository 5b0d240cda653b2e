//! `peer-id` binary entry point.
//!
//! Inspects, converts and compares lite peer ids.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use monas_peer_id::infrastructure::PeerIdConfig;
use monas_peer_id::presentation::{parse_peer_id, render, InputEncoding, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Peer ID CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "peer-id")]
#[command(about = "Monas Peer ID - inspect and convert multihash peer ids")]
struct Args {
    /// Encoding of the peer ids given on the command line.
    #[arg(short, long, value_enum, default_value = "base58", global = true)]
    from: InputEncoding,

    /// Configuration file (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every representation of a peer id.
    Inspect { value: String },
    /// Print a single representation of a peer id.
    Convert {
        value: String,
        /// Output format (defaults to the configured one).
        #[arg(short, long, value_enum)]
        to: Option<OutputFormat>,
    },
    /// Compare two peer ids byte for byte.
    Equal { left: String, right: String },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PeerIdConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => PeerIdConfig::default(),
    };

    // Initialize tracing
    let level = args.log_level.clone().unwrap_or(config.log.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Input encoding: {:?}", args.from);

    match args.command {
        Command::Inspect { value } => {
            let peer_id = parse_peer_id(&value, args.from).context("Failed to parse peer id")?;
            println!("base58: {}", peer_id.to_b58_string());
            println!("hex:    {}", peer_id.to_hex_string());
            println!("code:   {:#x}", peer_id.code());
            println!("json:   {}", render(&peer_id, OutputFormat::Json)?);
            println!("print:  {}", peer_id.to_print());
        }
        Command::Convert { value, to } => {
            let peer_id = parse_peer_id(&value, args.from).context("Failed to parse peer id")?;
            let format = to.unwrap_or(config.output.format);
            println!("{}", render(&peer_id, format)?);
        }
        Command::Equal { left, right } => {
            let left = parse_peer_id(&left, args.from).context("Failed to parse left peer id")?;
            let right =
                parse_peer_id(&right, args.from).context("Failed to parse right peer id")?;
            let equal = left.is_equal(&right)?;
            tracing::info!("{} == {}: {}", left.to_print(), right.to_print(), equal);
            println!("{}", equal);
            if !equal {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
