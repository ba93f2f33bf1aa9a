use ndarray::Zip;
use tracing::debug;

use crate::error::Result;
use crate::fft::{fft2d, ifft2d};
use crate::types::{FrequencyField, Image, OffsetResult};

use super::peak::{
    ensure_finite, ensure_finite_strength, ensure_same_shape, find_peak, wrap_offset,
};

/// Integer translation between two equally sized images by FFT
/// cross-correlation.
///
/// If `img2` is `img1` circularly shifted by `(a, b)`, the result is
/// `(-a, -b)`: the shift that moves `img2` back onto `img1`. `strength` is
/// the height of the correlation peak, so for identical inputs it equals the
/// image energy `sum(img^2)`.
pub fn correlate(img1: &Image, img2: &Image) -> Result<OffsetResult> {
    ensure_same_shape(img1, img2)?;
    ensure_finite(img1, "first image")?;
    ensure_finite(img2, "second image")?;
    let (h, w) = img1.dim();

    let f1 = fft2d(img1);
    let f2 = fft2d(img2);

    let correlation = ifft2d(&cross_power(&f1, &f2));
    let magnitude = correlation.mapv(|v| v.norm());

    let (peak_row, peak_col, peak_val) = find_peak(&magnitude);
    let strength = ensure_finite_strength(peak_val)?;

    let result = OffsetResult {
        dx: wrap_offset(peak_row, h),
        dy: wrap_offset(peak_col, w),
        strength,
    };
    debug!(
        height = h,
        width = w,
        peak_row,
        peak_col,
        dx = result.dx,
        dy = result.dy,
        strength,
        "Full cross-correlation"
    );
    Ok(result)
}

/// Unnormalized cross-power spectrum `a * conj(b)`.
pub fn cross_power(a: &FrequencyField, b: &FrequencyField) -> FrequencyField {
    Zip::from(a).and(b).map_collect(|x, y| x * y.conj())
}
