use ndarray::Array2;
use num_complex::Complex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpeckleError};

/// A real-valued image, row-major, shape = (height, width).
pub type Image = Array2<f64>;

/// Complex spectrum of an [`Image`].
pub type FrequencyField = Array2<Complex<f64>>;

/// Integer translation between two images plus the correlation peak height.
///
/// `dx` is measured along axis 0 (rows) and `dy` along axis 1 (columns).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OffsetResult {
    pub dx: i64,
    pub dy: i64,
    pub strength: f64,
}

/// How a synthesized power spectrum is rescaled before it is returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastNormalization {
    /// Divide by the mean, giving unit mean intensity.
    #[default]
    UnitMean,
    /// Divide by the square root of the mean. Compresses the dynamic range
    /// without pinning the mean to one.
    SqrtMean,
}

impl std::fmt::Display for ContrastNormalization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnitMean => write!(f, "Unit Mean"),
            Self::SqrtMean => write!(f, "Sqrt Mean"),
        }
    }
}

/// Size parameters of a speckle pattern.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeckleParams {
    /// Edge length L of the square output image.
    pub image_size: usize,
    /// Speckle size s. The circular aperture has diameter L / s, so larger
    /// values give coarser speckles.
    pub speckle_size: usize,
    #[serde(default)]
    pub normalization: ContrastNormalization,
}

impl SpeckleParams {
    pub fn new(image_size: usize, speckle_size: usize) -> Self {
        Self {
            image_size,
            speckle_size,
            normalization: ContrastNormalization::default(),
        }
    }

    pub fn with_normalization(mut self, normalization: ContrastNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Aperture diameter D = L / s.
    pub fn diameter(&self) -> f64 {
        self.image_size as f64 / self.speckle_size as f64
    }

    /// Aperture radius R = floor(D / 2).
    pub fn radius(&self) -> usize {
        (self.diameter() / 2.0) as usize
    }

    /// Aperture centre, floor(L / 2) on both axes.
    pub fn pad(&self) -> usize {
        self.image_size / 2
    }

    /// Reject sizes that cannot describe an aperture inside the image.
    pub fn validate(&self) -> Result<()> {
        if self.image_size == 0 {
            return Err(SpeckleError::InvalidParameter(
                "image size must be positive".into(),
            ));
        }
        if self.speckle_size == 0 {
            return Err(SpeckleError::InvalidParameter(
                "speckle size must be positive".into(),
            ));
        }
        if self.speckle_size > self.image_size {
            return Err(SpeckleError::InvalidParameter(format!(
                "speckle size {} exceeds image size {}",
                self.speckle_size, self.image_size
            )));
        }
        Ok(())
    }
}
