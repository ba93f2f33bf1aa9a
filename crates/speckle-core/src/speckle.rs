use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::{Result, SpeckleError};
use crate::fft::fft2d;
use crate::types::{ContrastNormalization, Image, SpeckleParams};

/// Synthesize a speckle pattern by shaping random noise in a circular
/// frequency-domain aperture.
///
/// The aperture of diameter `L / s` is filled with `exp(u)`, `u ~ U[-pi, pi)`,
/// transformed, and reduced to its power spectrum. The result is rescaled
/// according to `params.normalization`.
pub fn synthesize<R: Rng>(params: &SpeckleParams, rng: &mut R) -> Result<Image> {
    params.validate()?;

    let aperture = fill_aperture(params, rng);
    let spectrum = fft2d(&aperture);

    // |F * conj(F)| is the squared magnitude with the residual imaginary
    // part dropped.
    let power = spectrum.mapv(|v| (v * v.conj()).norm());

    let image = normalize_contrast(power, params.normalization)?;
    info!(
        size = params.image_size,
        speckle = params.speckle_size,
        normalization = %params.normalization,
        "Speckle pattern synthesized"
    );
    Ok(image)
}

/// [`synthesize`] with a `StdRng` seeded from `seed`.
pub fn synthesize_seeded(params: &SpeckleParams, seed: u64) -> Result<Image> {
    let mut rng = StdRng::seed_from_u64(seed);
    synthesize(params, &mut rng)
}

/// Random exponential noise inside the aperture disk, zero elsewhere.
///
/// Values are drawn row-major over the aperture bounding box, one draw per
/// pixel inside the disk.
fn fill_aperture<R: Rng>(params: &SpeckleParams, rng: &mut R) -> Image {
    let l = params.image_size;
    let d = params.diameter();
    let r = params.radius();
    let pad = params.pad();
    let limit = d * d / 4.0;

    let mut field = Image::zeros((l, l));
    // R <= pad whenever s >= 1, so the box stays inside the image.
    let lo = pad - r;
    let hi = pad + r;

    let mut filled = 0usize;
    for i in lo..hi {
        let di = pad as f64 - i as f64;
        for j in lo..hi {
            let dj = pad as f64 - j as f64;
            if di * di + dj * dj < limit {
                let u: f64 = rng.gen_range(-PI..PI);
                field[[i, j]] = u.exp();
                filled += 1;
            }
        }
    }

    debug!(diameter = d, radius = r, filled, "Aperture filled");
    field
}

fn normalize_contrast(mut image: Image, mode: ContrastNormalization) -> Result<Image> {
    let n = image.len() as f64;
    let mean = image.sum() / n;
    if !mean.is_finite() || mean <= 0.0 {
        return Err(SpeckleError::DegenerateInput(format!(
            "speckle field mean is {mean}; aperture is empty"
        )));
    }

    let scale = match mode {
        ContrastNormalization::UnitMean => 1.0 / mean,
        ContrastNormalization::SqrtMean => 1.0 / mean.sqrt(),
    };
    image.mapv_inplace(|v| v * scale);

    if image.iter().any(|v| !v.is_finite()) {
        return Err(SpeckleError::DegenerateInput(
            "non-finite sample after contrast normalization".into(),
        ));
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aperture_is_a_centered_disk() {
        let params = SpeckleParams::new(32, 4);
        let mut rng = StdRng::seed_from_u64(7);
        let field = fill_aperture(&params, &mut rng);

        // D = 8, R = 4, centre (16, 16)
        assert!(field[[16, 16]] > 0.0);
        assert!(field[[13, 16]] > 0.0);
        assert_eq!(field[[11, 16]], 0.0);
        assert_eq!(field[[12, 12]], 0.0);
        assert_eq!(field[[0, 0]], 0.0);
        // Bounding box is half-open: row/col pad + R is never filled.
        assert!(field.row(20).iter().all(|&v| v == 0.0));
        assert!(field.column(20).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn aperture_values_are_exp_of_phase_range() {
        let params = SpeckleParams::new(64, 2);
        let mut rng = StdRng::seed_from_u64(3);
        let field = fill_aperture(&params, &mut rng);
        let lo = (-PI).exp();
        let hi = PI.exp();
        for &v in field.iter().filter(|&&v| v != 0.0) {
            assert!(v >= lo && v < hi, "{v} outside [e^-pi, e^pi)");
        }
    }

    #[test]
    fn zero_mean_is_degenerate() {
        let image = Image::zeros((4, 4));
        let err = normalize_contrast(image, ContrastNormalization::UnitMean).unwrap_err();
        assert!(matches!(err, SpeckleError::DegenerateInput(_)));
    }

    #[test]
    fn sqrt_mean_scaling() {
        let image = Image::from_elem((2, 2), 4.0);
        let out = normalize_contrast(image, ContrastNormalization::SqrtMean).unwrap();
        assert!(out.iter().all(|&v| (v - 2.0).abs() < 1e-12));
    }
}
