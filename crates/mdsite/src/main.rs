//! mdsite CLI - Markdown documentation site renderer.
//!
//! Provides commands for:
//! - `nav`: Print the navigation tree as JSON
//! - `render`: Render a single markdown file to an HTML fragment
//! - `page`: Print the complete HTML page for a slug
//! - `build`: Write a static site to a directory

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, NavArgs, PageArgs, RenderArgs};
use output::Output;

/// mdsite - Markdown documentation site renderer.
#[derive(Parser)]
#[command(name = "mdsite", version, about)]
struct Cli {
    /// Enable verbose output (debug logging).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the navigation tree as JSON.
    Nav(NavArgs),
    /// Render a markdown file to an HTML fragment.
    Render(RenderArgs),
    /// Print the complete HTML page for a document.
    Page(PageArgs),
    /// Build a static site.
    Build(BuildArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Nav(args) => args.execute(),
        Commands::Render(args) => args.execute(),
        Commands::Page(args) => args.execute(),
        Commands::Build(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
