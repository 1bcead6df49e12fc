//! `sax2json` CLI: convert XML documents into JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Convert XML to pretty JSON (stdin → stdout)
//! echo '<note id="7">hi</note>' | sax2json convert
//!
//! # Convert from file to file, compact output
//! sax2json convert -i catalog.xml -o catalog.json --compact
//!
//! # Keep every value a string and prefix attribute keys with "@"
//! sax2json convert -i catalog.xml --no-primitives --attr-prefix
//!
//! # Load options from a JSON file (flags still override it)
//! sax2json convert -i catalog.xml --config options.json
//!
//! # Show document statistics
//! sax2json stats -i catalog.xml
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sax2json_core::ConvertOptions;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sax2json", version, about = "Convert XML documents into JSON")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert XML to JSON
    Convert {
        /// Input XML file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output JSON file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Show conversion statistics (element counts, depth, sizes)
    Stats {
        /// Input XML file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        #[command(flatten)]
        options: OptionArgs,
    },
}

/// Conversion options shared by every subcommand.
#[derive(Args)]
struct OptionArgs {
    /// JSON file with converter options
    #[arg(long)]
    config: Option<String>,
    /// Keep every value a string (no number/boolean inference)
    #[arg(long)]
    no_primitives: bool,
    /// Key holding an element's text when it also has attributes
    #[arg(long)]
    value_key: Option<String>,
    /// Prefix attribute keys (default prefix "@")
    #[arg(long, num_args = 0..=1, default_missing_value = "@")]
    attr_prefix: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert {
            input,
            output,
            compact,
            options,
        } => {
            let options = build_options(&options)?;
            let xml = read_input(input.as_deref())?;
            let root = sax2json_core::convert_str(&xml, &options)
                .context("Failed to convert XML to JSON")?;
            let json = if compact {
                sax2json_core::encode(&root)
            } else {
                sax2json_core::encode_pretty(&root)
            }
            .context("Failed to encode JSON")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Stats { input, options } => {
            let options = build_options(&options)?;
            let xml = read_input(input.as_deref())?;
            let (root, stats) = sax2json_core::convert_with_stats(xml.as_bytes(), &options)
                .context("Failed to convert XML to JSON")?;
            let json = sax2json_core::encode(&root).context("Failed to encode JSON")?;
            println!("Elements:   {}", stats.elements);
            println!("Attributes: {}", stats.attributes);
            println!("Max depth:  {}", stats.max_depth);
            println!("XML size:   {} bytes", xml.len());
            println!("JSON size:  {} bytes", json.len());
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only JSON.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Start from `--config` (or defaults) and apply explicit flags on top.
fn build_options(args: &OptionArgs) -> Result<ConvertOptions> {
    let mut options = match args.config.as_deref() {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid converter options in {}", path))?
        }
        None => ConvertOptions::default(),
    };

    if args.no_primitives {
        options.primitives = false;
    }
    if let Some(key) = &args.value_key {
        options.value_key = key.clone();
    }
    if let Some(prefix) = &args.attr_prefix {
        options = options.with_attribute_prefix(prefix.as_str());
    }
    if options.value_key.is_empty() {
        anyhow::bail!(
            "value key must not be empty (from --value-key or \"value_key\" in --config)"
        );
    }

    debug!(?options, "resolved converter options");
    Ok(options)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
