use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use speckle_core::config::SynthConfig;
use speckle_core::io::image_io::save_image;
use speckle_core::speckle::synthesize;
use speckle_core::types::ContrastNormalization;
use tracing::info;

#[derive(Clone, ValueEnum)]
pub enum NormalizationArg {
    UnitMean,
    SqrtMean,
}

impl From<NormalizationArg> for ContrastNormalization {
    fn from(arg: NormalizationArg) -> Self {
        match arg {
            NormalizationArg::UnitMean => ContrastNormalization::UnitMean,
            NormalizationArg::SqrtMean => ContrastNormalization::SqrtMean,
        }
    }
}

#[derive(Args)]
pub struct SynthArgs {
    /// TOML config file; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Image edge length in pixels
    #[arg(long)]
    pub size: Option<usize>,

    /// Speckle size (aperture diameter is size / speckle)
    #[arg(long)]
    pub speckle: Option<usize>,

    /// RNG seed for reproducible patterns
    #[arg(long)]
    pub seed: Option<u64>,

    /// Contrast normalization
    #[arg(long, value_enum)]
    pub normalization: Option<NormalizationArg>,

    /// Output file path (TIFF, PNG or WebP)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &SynthArgs) -> Result<()> {
    let config = resolve_config(args)?;
    crate::summary::print_synth_summary(&config);

    let params = config.params();
    info!(
        diameter = params.diameter(),
        radius = params.radius(),
        seed = ?config.seed,
        "Synthesis parameters resolved"
    );
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let image = synthesize(&params, &mut rng).with_context(|| {
        format!(
            "Failed to synthesize {}x{} pattern (speckle size {})",
            config.image_size, config.image_size, config.speckle_size
        )
    })?;

    save_image(&image, &config.output)
        .with_context(|| format!("Failed to save {}", config.output.display()))?;
    println!("Saved to {}", config.output.display());

    Ok(())
}

fn resolve_config(args: &SynthArgs) -> Result<SynthConfig> {
    let mut config = if let Some(ref path) = args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str::<SynthConfig>(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?
    } else {
        SynthConfig::default()
    };

    if let Some(size) = args.size {
        config.image_size = size;
    }
    if let Some(speckle) = args.speckle {
        config.speckle_size = speckle;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(ref normalization) = args.normalization {
        config.normalization = normalization.clone().into();
    }
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }

    Ok(config)
}
