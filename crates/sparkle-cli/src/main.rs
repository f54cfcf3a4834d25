//! Sparkle CLI - Inspect presets and run bursts headless

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{presets, show, simulate};

#[derive(Parser)]
#[command(name = "sparkle")]
#[command(about = "Tap-triggered particle bursts, headless", long_about = None)]
#[command(version)]
struct Cli {
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available presets
    Presets {
        /// Preset catalog file (defaults to the built-in presets)
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Print a preset's resolved burst config as JSON
    Show {
        /// Preset value (e.g. "firework")
        preset: String,

        /// Preset catalog file (defaults to the built-in presets)
        #[arg(long)]
        catalog: Option<String>,
    },

    /// Tap once and step the burst at a fixed rate until it completes
    Simulate {
        /// Preset value (e.g. "firework")
        #[arg(default_value = "default")]
        preset: String,

        /// Tap location x
        #[arg(long, default_value = "0")]
        x: f32,

        /// Tap location y
        #[arg(long, default_value = "0")]
        y: f32,

        /// Steps per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Give up after this many milliseconds
        #[arg(long, default_value = "5000")]
        max_ms: u32,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Preset catalog file (defaults to the built-in presets)
        #[arg(long)]
        catalog: Option<String>,

        /// Random seed for a reproducible burst
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Presets { catalog } => presets::run(catalog.as_deref()),
        Commands::Show { preset, catalog } => show::run(&preset, catalog.as_deref()),
        Commands::Simulate {
            preset,
            x,
            y,
            fps,
            max_ms,
            format,
            catalog,
            seed,
        } => simulate::run(simulate::SimulateArgs {
            preset,
            x,
            y,
            fps,
            max_ms,
            format,
            catalog,
            seed,
        }),
    }
}
