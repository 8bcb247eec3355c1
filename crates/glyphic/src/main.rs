//! Glyphic CLI - generate React icon components from SVG files.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "glyphic")]
#[command(about = "Generate React icon components from a directory of SVG files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to glyphic.toml config file
    #[arg(short, long, default_value = "glyphic.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate all icon components and the barrel file
    Generate {
        /// Directory containing the SVG icons
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory (emptied before writing)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render everything without touching the output directory
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the component name derived from each icon
    List {
        /// Directory containing the SVG icons
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// Write a default config and scaffold the shared icon wrapper
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Generate {
            source,
            output,
            dry_run,
        } => {
            commands::generate::run(&cli.config, source, output, dry_run).await?;
        }
        Commands::List { source } => {
            commands::list::run(&cli.config, source)?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
    }

    Ok(())
}
