use num_complex::Complex;
use tracing::debug;

use crate::error::{Result, SpeckleError};
use crate::fft::{ifft1d, spectrum_column, spectrum_row};
use crate::types::{Image, OffsetResult};

use super::peak::{
    ensure_finite, ensure_finite_strength, ensure_same_shape, find_peak_1d, wrap_offset,
};

/// Reduced-cost cross-correlation that correlates a single column and a
/// single row of the two spectra.
///
/// `dx` comes from column `res_fac` of the 2D spectra and `dy` from row
/// `res_fac`; signs follow [`super::correlate`]. `strength` is the maximum of
/// `|rx| + |ry|` taken element-wise, which is why the images must be square.
///
/// Only the two spectrum slices are computed, each with one pass of
/// single-bin DFTs and one 1D FFT, instead of full 2D transforms.
pub fn partial_correlate(img1: &Image, img2: &Image, res_fac: usize) -> Result<OffsetResult> {
    ensure_same_shape(img1, img2)?;
    let (h, w) = img1.dim();
    if h != w {
        // rx and ry would differ in length.
        return Err(SpeckleError::ShapeMismatch {
            left: (h, w),
            right: (w, h),
        });
    }
    let limit = h.min(w);
    if res_fac >= limit {
        return Err(SpeckleError::IndexOutOfRange {
            index: res_fac,
            limit,
        });
    }
    ensure_finite(img1, "first image")?;
    ensure_finite(img2, "second image")?;

    let rx = ifft1d(&cross_power_1d(
        &spectrum_column(img1, res_fac),
        &spectrum_column(img2, res_fac),
    ));
    let ry = ifft1d(&cross_power_1d(
        &spectrum_row(img1, res_fac),
        &spectrum_row(img2, res_fac),
    ));

    let mag_x: Vec<f64> = rx.iter().map(|v| v.norm()).collect();
    let mag_y: Vec<f64> = ry.iter().map(|v| v.norm()).collect();

    let (x, _) = find_peak_1d(&mag_x);
    let (y, _) = find_peak_1d(&mag_y);

    let combined: Vec<f64> = mag_x.iter().zip(&mag_y).map(|(a, b)| a + b).collect();
    let (_, peak_val) = find_peak_1d(&combined);
    let strength = ensure_finite_strength(peak_val)?;

    let result = OffsetResult {
        dx: wrap_offset(x, rx.len()),
        dy: wrap_offset(y, ry.len()),
        strength,
    };
    debug!(
        size = h,
        res_fac,
        dx = result.dx,
        dy = result.dy,
        strength,
        "Partial cross-correlation"
    );
    Ok(result)
}

fn cross_power_1d(a: &[Complex<f64>], b: &[Complex<f64>]) -> Vec<Complex<f64>> {
    a.iter().zip(b).map(|(x, y)| x * y.conj()).collect()
}
