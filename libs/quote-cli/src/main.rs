//! stl-quote: Command-line interface for mesh price quotes.
//!
//! Quotes binary STL files, submits an upload to a local artifact directory
//! to produce a checkout line item, and reads line-item names back for
//! fulfillment.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=quote_engine=info` - Submission logging
//! - `RUST_LOG=quote_engine=debug` - Per-quote pricing detail
//! - `RUST_LOG=debug` - All debug output, including decoding and volume
//!
//! # Example
//!
//! ```bash
//! stl-quote quote bracket.stl gear.stl --material PETG
//! stl-quote --format json submit bracket.stl --material RESIN --quantity 2
//! stl-quote parse-name "Printed bracket.stl (12.3cm³, PETG)"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use config::RateTable;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod store;

use commands::{parse_name, quote, submit};

/// stl-quote - Price quotes and checkout line items for 3D-printed parts.
#[derive(Parser)]
#[command(name = "stl-quote")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// JSON rate table replacing the canonical rates
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote one or more binary STL files
    Quote {
        /// Input mesh files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Material key (PLA, PETG, RESIN)
        #[arg(long, short, default_value = "PLA")]
        material: String,
    },

    /// Re-quote, store, and build the checkout line item for an upload
    Submit {
        /// Input mesh file
        input: PathBuf,

        /// Material key (PLA, PETG, RESIN)
        #[arg(long, short, default_value = "PLA")]
        material: String,

        /// Number of copies
        #[arg(long, allow_negative_numbers = true)]
        quantity: Option<i64>,

        /// Total the client displayed, checked against the server quote
        #[arg(long)]
        preview_total: Option<f64>,

        /// Directory receiving stored artifacts
        #[arg(long, default_value = "uploads")]
        store_dir: PathBuf,
    },

    /// Read volume and material back from a line-item display name
    ParseName {
        /// Display name, e.g. "Printed part.stl (1.0cm³, PLA)"
        display_name: String,
    },
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "quote_engine=info,quote_cli=info",
            2 => "quote_engine=debug,quote_cli=debug,mesh_volume=debug,stl_decoder=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

/// Loads the rate table, falling back to the canonical rates.
pub fn load_rates(path: Option<&Path>) -> Result<RateTable> {
    let Some(path) = path else {
        return Ok(RateTable::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rate table from {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid rate table in {:?}", path))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let rates = load_rates(cli.rates.as_deref())?;

    match &cli.command {
        Commands::Quote { inputs, material } => quote::run(inputs, material, &rates, cli.format),
        Commands::Submit {
            input,
            material,
            quantity,
            preview_total,
            store_dir,
        } => {
            let request = submit::SubmitRequest {
                input,
                material,
                quantity: *quantity,
                preview_total: *preview_total,
            };
            let store = store::LocalDirStore::new(store_dir);
            submit::run(request, &store, rates, cli.format).await
        }
        Commands::ParseName { display_name } => parse_name::run(display_name, cli.format),
    }
}
