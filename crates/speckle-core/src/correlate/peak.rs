use ndarray::Array2;

use crate::error::{Result, SpeckleError};
use crate::types::Image;

/// Location and height of the largest value in a 2D array.
///
/// The first maximum in row-major order wins ties.
pub fn find_peak(data: &Array2<f64>) -> (usize, usize, f64) {
    let mut best_row = 0;
    let mut best_col = 0;
    let mut best_val = f64::NEG_INFINITY;

    for ((row, col), &val) in data.indexed_iter() {
        if val > best_val {
            best_val = val;
            best_row = row;
            best_col = col;
        }
    }

    (best_row, best_col, best_val)
}

/// Index and value of the first maximum in a slice.
pub fn find_peak_1d(data: &[f64]) -> (usize, f64) {
    let mut best_idx = 0;
    let mut best_val = f64::NEG_INFINITY;

    for (idx, &val) in data.iter().enumerate() {
        if val > best_val {
            best_val = val;
            best_idx = idx;
        }
    }

    (best_idx, best_val)
}

/// Map a circular-correlation peak index to a signed offset.
///
/// Indices past `len / 2 - 1` belong to the wrapped upper half and become
/// negative.
pub fn wrap_offset(index: usize, len: usize) -> i64 {
    if index as f64 > len as f64 / 2.0 - 1.0 {
        index as i64 - len as i64
    } else {
        index as i64
    }
}

pub(crate) fn ensure_same_shape(img1: &Image, img2: &Image) -> Result<()> {
    if img1.dim() != img2.dim() {
        return Err(SpeckleError::ShapeMismatch {
            left: img1.dim(),
            right: img2.dim(),
        });
    }
    Ok(())
}

pub(crate) fn ensure_finite(image: &Image, label: &str) -> Result<()> {
    if image.is_empty() {
        return Err(SpeckleError::DegenerateInput(format!("{label} is empty")));
    }
    if image.iter().any(|v| !v.is_finite()) {
        return Err(SpeckleError::DegenerateInput(format!(
            "{label} contains non-finite samples"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_finite_strength(strength: f64) -> Result<f64> {
    if strength.is_finite() {
        Ok(strength)
    } else {
        Err(SpeckleError::DegenerateInput(format!(
            "correlation strength is {strength}"
        )))
    }
}
