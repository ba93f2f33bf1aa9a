use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_IMAGE_SIZE, DEFAULT_RES_FAC, DEFAULT_SPECKLE_OUTPUT, DEFAULT_SPECKLE_SIZE,
};
use crate::types::{ContrastNormalization, SpeckleParams};

/// Settings for one speckle synthesis run, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub image_size: usize,
    pub speckle_size: usize,
    /// RNG seed. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub normalization: ContrastNormalization,
    pub output: PathBuf,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            speckle_size: DEFAULT_SPECKLE_SIZE,
            seed: None,
            normalization: ContrastNormalization::default(),
            output: PathBuf::from(DEFAULT_SPECKLE_OUTPUT),
        }
    }
}

impl SynthConfig {
    pub fn params(&self) -> SpeckleParams {
        SpeckleParams::new(self.image_size, self.speckle_size)
            .with_normalization(self.normalization)
    }
}

/// Which correlator measures the offset between two images.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrelationMethod {
    /// Full 2D cross-correlation.
    #[default]
    Full,
    /// One column and one row of the spectra, both at index `res_fac`.
    Partial { res_fac: usize },
}

impl CorrelationMethod {
    pub fn partial() -> Self {
        Self::Partial {
            res_fac: DEFAULT_RES_FAC,
        }
    }
}

impl fmt::Display for CorrelationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "Full"),
            Self::Partial { res_fac } => write!(f, "Partial (res_fac {res_fac})"),
        }
    }
}
