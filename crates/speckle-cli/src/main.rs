mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "speckle", about = "Speckle pattern synthesis and FFT cross-correlation")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a speckle pattern and save it
    Synth(commands::synth::SynthArgs),
    /// Full 2D cross-correlation of two images
    Xcorr(commands::correlate::XcorrArgs),
    /// Cross-correlate one row and one column of two images
    Partial(commands::correlate::PartialArgs),
    /// Print or save the default synthesis config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Synth(args) => commands::synth::run(args),
        Commands::Xcorr(args) => commands::correlate::run_full(args),
        Commands::Partial(args) => commands::correlate::run_partial(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
