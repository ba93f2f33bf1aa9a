use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use speckle_core::config::CorrelationMethod;
use speckle_core::consts::DEFAULT_RES_FAC;
use speckle_core::correlate::correlate_with;
use speckle_core::io::image_io::load_image;
use speckle_core::types::Image;

#[derive(Args)]
pub struct XcorrArgs {
    /// Reference image
    pub first: PathBuf,

    /// Image whose offset is measured against the reference
    pub second: PathBuf,
}

#[derive(Args)]
pub struct PartialArgs {
    /// Reference image
    pub first: PathBuf,

    /// Image whose offset is measured against the reference
    pub second: PathBuf,

    /// Row and column index examined in the spectra
    #[arg(long, default_value_t = DEFAULT_RES_FAC)]
    pub res_fac: usize,
}

pub fn run_full(args: &XcorrArgs) -> Result<()> {
    run(&args.first, &args.second, &CorrelationMethod::Full)
}

pub fn run_partial(args: &PartialArgs) -> Result<()> {
    let method = CorrelationMethod::Partial {
        res_fac: args.res_fac,
    };
    run(&args.first, &args.second, &method)
}

fn run(first: &Path, second: &Path, method: &CorrelationMethod) -> Result<()> {
    let img1 = load(first)?;
    let img2 = load(second)?;

    let result = correlate_with(method, &img1, &img2).with_context(|| {
        format!(
            "{} correlation of {} and {} failed",
            method,
            first.display(),
            second.display()
        )
    })?;

    crate::summary::print_offset_summary(method, first, second, &result);
    Ok(())
}

fn load(path: &Path) -> Result<Image> {
    load_image(path).with_context(|| format!("Failed to load {}", path.display()))
}
