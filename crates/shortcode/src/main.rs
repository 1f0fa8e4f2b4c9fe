//! Short code CLI.
//!
//! Provides commands for:
//! - `encode`: Turn page ids into short codes
//! - `decode`: Turn short codes back into page ids
//! - `url`: Build the tiny URL for a page id
//! - `resolve`: Extract the page id from a tiny URL

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DecodeArgs, EncodeArgs, ResolveArgs, UrlArgs};
use output::Output;

/// Confluence short code and tiny URL tool.
#[derive(Parser)]
#[command(name = "shortcode", version, about)]
struct Cli {
    /// Enable debug logging of intermediate values.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode page ids as short codes.
    Encode(EncodeArgs),
    /// Decode short codes into page ids.
    Decode(DecodeArgs),
    /// Print the tiny URL for a page id.
    Url(UrlArgs),
    /// Print the page id a tiny URL points at.
    Resolve(ResolveArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Encode(args) => args.execute(&output),
        Commands::Decode(args) => args.execute(&output),
        Commands::Url(args) => args.execute(&output),
        Commands::Resolve(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
