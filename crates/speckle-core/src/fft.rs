//! Discrete Fourier transform primitives shared by the synthesizer and the
//! correlators.
//!
//! Forward transforms are unnormalized and inverse transforms carry the
//! `1 / n` factor, so `ifft(fft(x)) == x`.

use std::f64::consts::TAU;

use ndarray::Axis;
use num_complex::Complex;
use num_traits::Zero;
use rustfft::{Fft, FftPlanner};

use crate::types::{FrequencyField, Image};

/// Lift a real image into the complex domain.
pub fn to_complex(image: &Image) -> FrequencyField {
    image.mapv(|v| Complex::new(v, 0.0))
}

/// 2D FFT of a real image: row-wise FFT, then column-wise FFT.
pub fn fft2d(image: &Image) -> FrequencyField {
    let mut field = to_complex(image);
    transform2d(&mut field, Direction::Forward);
    field
}

/// 2D FFT of a complex field.
pub fn fft2d_complex(field: &FrequencyField) -> FrequencyField {
    let mut out = field.clone();
    transform2d(&mut out, Direction::Forward);
    out
}

/// Inverse 2D FFT, normalized by `1 / (h * w)`.
pub fn ifft2d(field: &FrequencyField) -> FrequencyField {
    let mut out = field.clone();
    transform2d(&mut out, Direction::Inverse);
    let n = out.len();
    if n > 0 {
        let scale = 1.0 / n as f64;
        out.mapv_inplace(|v| v * scale);
    }
    out
}

/// 1D forward FFT.
pub fn fft1d(data: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut buf = data.to_vec();
    if !buf.is_empty() {
        FftPlanner::<f64>::new().plan_fft_forward(buf.len()).process(&mut buf);
    }
    buf
}

/// 1D inverse FFT, normalized by `1 / n`.
pub fn ifft1d(data: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut buf = data.to_vec();
    if buf.is_empty() {
        return buf;
    }
    FftPlanner::<f64>::new().plan_fft_inverse(buf.len()).process(&mut buf);
    let scale = 1.0 / buf.len() as f64;
    for v in &mut buf {
        *v *= scale;
    }
    buf
}

/// Column `col` of `fft2d(image)` without transforming the whole image.
///
/// Each row contributes a single DFT bin at frequency `col`, and the
/// resulting column is transformed with one 1D FFT of length `h`.
pub fn spectrum_column(image: &Image, col: usize) -> Vec<Complex<f64>> {
    let w = image.ncols();
    let twiddles = twiddle_table(w);
    let bins: Vec<Complex<f64>> = image
        .rows()
        .into_iter()
        .map(|row| dft_bin(row.iter().copied(), col, &twiddles))
        .collect();
    fft1d(&bins)
}

/// Row `row` of `fft2d(image)`, the transpose of [`spectrum_column`].
pub fn spectrum_row(image: &Image, row: usize) -> Vec<Complex<f64>> {
    let h = image.nrows();
    let twiddles = twiddle_table(h);
    let bins: Vec<Complex<f64>> = image
        .columns()
        .into_iter()
        .map(|column| dft_bin(column.iter().copied(), row, &twiddles))
        .collect();
    fft1d(&bins)
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Inverse,
}

fn transform2d(field: &mut FrequencyField, direction: Direction) {
    let (h, w) = field.dim();
    if h == 0 || w == 0 {
        return;
    }

    let mut planner = FftPlanner::<f64>::new();
    let (fft_row, fft_col) = match direction {
        Direction::Forward => (planner.plan_fft_forward(w), planner.plan_fft_forward(h)),
        Direction::Inverse => (planner.plan_fft_inverse(w), planner.plan_fft_inverse(h)),
    };

    // Lanes along axis 1 are rows, lanes along axis 0 are columns.
    transform_lanes(field, Axis(1), fft_row.as_ref());
    transform_lanes(field, Axis(0), fft_col.as_ref());
}

fn transform_lanes(field: &mut FrequencyField, axis: Axis, fft: &dyn Fft<f64>) {
    let mut buf = Vec::with_capacity(field.len_of(axis));
    for mut lane in field.lanes_mut(axis) {
        buf.clear();
        buf.extend(lane.iter().copied());
        fft.process(&mut buf);
        for (dst, src) in lane.iter_mut().zip(&buf) {
            *dst = *src;
        }
    }
}

/// `exp(-2*pi*i*t/n)` for `t` in `0..n`.
fn twiddle_table(n: usize) -> Vec<Complex<f64>> {
    (0..n)
        .map(|t| Complex::from_polar(1.0, -TAU * t as f64 / n as f64))
        .collect()
}

/// Single forward DFT coefficient at frequency `k`.
///
/// Indexes the twiddle table with `k * j mod n` so the phase never grows
/// with the sample index.
fn dft_bin(
    samples: impl Iterator<Item = f64>,
    k: usize,
    twiddles: &[Complex<f64>],
) -> Complex<f64> {
    let n = twiddles.len();
    samples
        .enumerate()
        .fold(Complex::zero(), |acc, (j, x)| acc + twiddles[(k * j) % n] * x)
}
