mod common;

use approx::assert_relative_eq;

use speckle_core::config::CorrelationMethod;
use speckle_core::consts::DEFAULT_RES_FAC;
use speckle_core::correlate::{correlate, correlate_with, partial_correlate};
use speckle_core::error::SpeckleError;
use speckle_core::fft::fft2d;

use common::{random_image, roll};

#[test]
fn test_identical_images_give_zero_offset() {
    let image = random_image(32, 32, 1);
    let result = partial_correlate(&image, &image, 5).unwrap();
    assert_eq!((result.dx, result.dy), (0, 0));
}

#[test]
fn test_self_strength_combines_column_and_row() {
    let image = random_image(32, 32, 2);
    let res_fac = 7;
    let spectrum = fft2d(&image);
    let n = 32.0;

    let column_energy: f64 = spectrum.column(res_fac).iter().map(|v| v.norm_sqr()).sum::<f64>() / n;
    let row_energy: f64 = spectrum.row(res_fac).iter().map(|v| v.norm_sqr()).sum::<f64>() / n;

    let result = partial_correlate(&image, &image, res_fac).unwrap();
    assert_relative_eq!(result.strength, column_energy + row_energy, max_relative = 1e-9);
}

#[test]
fn test_known_circular_shift_default_res_fac() {
    let image = random_image(128, 128, 3);
    let shifted = roll(&image, 3, -5);

    let result = partial_correlate(&image, &shifted, DEFAULT_RES_FAC).unwrap();
    assert_eq!((result.dx, result.dy), (-3, 5));
}

#[test]
fn test_agrees_with_full_correlation_on_circular_shifts() {
    let image = random_image(64, 64, 4);
    for (a, b) in [(0, 9), (-12, 4), (20, -20), (31, 1)] {
        let shifted = roll(&image, a, b);
        let full = correlate(&image, &shifted).unwrap();
        let partial = partial_correlate(&image, &shifted, 10).unwrap();
        assert_eq!((partial.dx, partial.dy), (full.dx, full.dy), "shift ({a}, {b})");
    }
}

#[test]
fn test_res_fac_out_of_range() {
    let image = random_image(64, 64, 5);
    let err = partial_correlate(&image, &image, 64).unwrap_err();
    assert!(matches!(
        err,
        SpeckleError::IndexOutOfRange {
            index: 64,
            limit: 64
        }
    ));

    // The default index needs at least 97 pixels per side.
    let err = partial_correlate(&image, &image, DEFAULT_RES_FAC).unwrap_err();
    assert!(matches!(err, SpeckleError::IndexOutOfRange { .. }));
}

#[test]
fn test_shape_mismatch() {
    let a = random_image(32, 32, 6);
    let b = random_image(64, 64, 6);
    let err = partial_correlate(&a, &b, 0).unwrap_err();
    assert!(matches!(err, SpeckleError::ShapeMismatch { .. }));
}

#[test]
fn test_non_square_images_are_rejected() {
    let a = random_image(32, 48, 7);
    let err = partial_correlate(&a, &a, 0).unwrap_err();
    assert!(matches!(err, SpeckleError::ShapeMismatch { .. }));
}

#[test]
fn test_non_finite_input_is_degenerate() {
    let a = random_image(16, 16, 8);
    let mut b = a.clone();
    b[[0, 0]] = f64::INFINITY;
    let err = partial_correlate(&a, &b, 2).unwrap_err();
    assert!(matches!(err, SpeckleError::DegenerateInput(_)));
}

#[test]
fn test_dispatch_by_method() {
    let image = random_image(32, 32, 9);
    let shifted = roll(&image, -2, 6);

    let full = correlate_with(&CorrelationMethod::Full, &image, &shifted).unwrap();
    assert_eq!((full.dx, full.dy), (2, -6));

    let partial = correlate_with(&CorrelationMethod::Partial { res_fac: 3 }, &image, &shifted).unwrap();
    assert_eq!((partial.dx, partial.dy), (2, -6));

    let err = correlate_with(&CorrelationMethod::partial(), &image, &shifted).unwrap_err();
    assert!(matches!(err, SpeckleError::IndexOutOfRange { .. }));
}
