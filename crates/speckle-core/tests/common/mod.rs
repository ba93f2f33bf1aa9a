#![allow(dead_code)]

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random image in [0, 1) from a fixed seed.
pub fn random_image(height: usize, width: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((height, width), |_| rng.gen::<f64>())
}

/// Circular shift so that `out[i, j] = data[i - shift_rows, j - shift_cols]`
/// (indices modulo the shape).
pub fn roll(data: &Array2<f64>, shift_rows: i64, shift_cols: i64) -> Array2<f64> {
    let (h, w) = data.dim();
    Array2::from_shape_fn((h, w), |(i, j)| {
        let src_i = (i as i64 - shift_rows).rem_euclid(h as i64) as usize;
        let src_j = (j as i64 - shift_cols).rem_euclid(w as i64) as usize;
        data[[src_i, src_j]]
    })
}

/// Sum of squared samples.
pub fn energy(data: &Array2<f64>) -> f64 {
    data.iter().map(|v| v * v).sum()
}
