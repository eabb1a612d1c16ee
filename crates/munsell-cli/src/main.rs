//! munsell - sample and export the Munsell color solid
//!
//! Loads a color table asset and exposes the sampler and placement mapper
//! from the command line.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "munsell")]
#[command(author, version, about = "Sample and export the Munsell color solid")]
#[command(long_about = "
Samples a precomputed Munsell color table at continuous (hue, value, chroma)
coordinates and exports the in-gamut cells of the solid for rendering.

Examples:
  munsell -t munsell.json info                 # Table dimensions and gamut
  munsell -t munsell.json sample 39.5 7 4.25   # Interpolated color or 'none'
  munsell place 10 5 4                         # Placement of one cell
  munsell -c munsell.yaml solid -o solid.json  # Instance list for a renderer
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Table asset (JSON), overrides the config file
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show table dimensions and gamut summary
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Sample the table at a continuous coordinate
    #[command(visible_alias = "s")]
    Sample(SampleArgs),

    /// Show the render-space placement of a grid cell
    #[command(visible_alias = "p")]
    Place(PlaceArgs),

    /// Export every in-gamut cell with color and placement
    Solid(SolidArgs),
}

/// Arguments for the `info` command.
#[derive(Args)]
struct InfoArgs {
    /// Print the gamut edge of every (hue, value) slice
    #[arg(long)]
    slices: bool,
}

/// Arguments for the `sample` command.
#[derive(Args)]
struct SampleArgs {
    /// Hue coordinate (wraps modulo 40)
    #[arg(allow_negative_numbers = true)]
    hue: f32,

    /// Value coordinate, 0 to 14
    #[arg(allow_negative_numbers = true)]
    value: f32,

    /// Chroma coordinate
    #[arg(allow_negative_numbers = true)]
    chroma: f32,

    /// Also print the 8-bit hex color
    #[arg(long)]
    hex: bool,
}

/// Arguments for the `place` command.
#[derive(Args)]
struct PlaceArgs {
    /// Hue index
    #[arg(allow_negative_numbers = true)]
    hue: i64,

    /// Value index
    #[arg(allow_negative_numbers = true)]
    value: i64,

    /// Chroma index
    #[arg(allow_negative_numbers = true)]
    chroma: i64,

    /// Also print the 4x4 transform matrix (column-major)
    #[arg(short, long)]
    matrix: bool,
}

/// Arguments for the `solid` command.
#[derive(Args)]
struct SolidArgs {
    /// Output JSON file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let ctx = commands::Context::new(cli.config.as_deref(), cli.table)?;

    match cli.command {
        Commands::Info(args) => commands::info::run(args, &ctx),
        Commands::Sample(args) => commands::sample::run(args, &ctx),
        Commands::Place(args) => commands::place::run(args, &ctx),
        Commands::Solid(args) => commands::solid::run(args, &ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_hue() {
        let cli = Cli::try_parse_from(["munsell", "-t", "t.json", "sample", "-1", "3", "0.5"]).unwrap();
        match cli.command {
            Commands::Sample(args) => {
                assert_eq!(args.hue, -1.0);
                assert_eq!(args.chroma, 0.5);
            }
            _ => panic!("expected sample"),
        }
        assert_eq!(cli.table, Some(PathBuf::from("t.json")));
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["munsell", "-vv", "place", "1", "2", "3"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
