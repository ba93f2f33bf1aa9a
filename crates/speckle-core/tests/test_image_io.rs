use ndarray::Array2;

use speckle_core::error::SpeckleError;
use speckle_core::io::image_io::{load_image, save_image, save_png, save_tiff, to_display_range};
use speckle_core::speckle::synthesize_seeded;
use speckle_core::types::SpeckleParams;

#[test]
fn test_display_range_scales_by_peak() {
    let mut data = Array2::<f64>::zeros((2, 2));
    data[[0, 1]] = 4.0;
    data[[1, 0]] = 2.0;

    let scaled = to_display_range(&data).unwrap();
    assert_eq!(scaled[[0, 0]], 0.0);
    assert_eq!(scaled[[0, 1]], 1.0);
    assert_eq!(scaled[[1, 0]], 0.5);
}

#[test]
fn test_display_range_rejects_blank_image() {
    let data = Array2::<f64>::zeros((4, 4));
    let err = to_display_range(&data).unwrap_err();
    assert!(matches!(err, SpeckleError::DegenerateInput(_)));
}

#[test]
fn test_save_load_roundtrip_tiff() {
    let mut data = Array2::<f64>::zeros((4, 5));
    data[[0, 1]] = 2.0;
    data[[1, 0]] = 1.0;
    data[[3, 4]] = 0.5;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.tiff");

    save_tiff(&data, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.dim(), (4, 5));
    assert!((loaded[[0, 1]] - 1.0).abs() < 1e-4);
    assert!((loaded[[1, 0]] - 0.5).abs() < 1e-4);
    assert!((loaded[[3, 4]] - 0.25).abs() < 1e-4);
    assert!(loaded[[2, 2]].abs() < 1e-4);
}

#[test]
fn test_save_png() {
    let data = Array2::<f64>::from_elem((8, 8), 3.0);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.png");

    save_png(&data, &path).unwrap();
    let loaded = load_image(&path).unwrap();
    assert!(loaded.iter().all(|&v| (v - 1.0).abs() < 1e-4));
}

#[test]
fn test_save_image_by_extension() {
    let image = synthesize_seeded(&SpeckleParams::new(32, 2), 1).unwrap();
    let dir = tempfile::tempdir().unwrap();

    for name in ["speckle.tif", "speckle.png", "speckle.webp", "speckle.raw"] {
        let path = dir.path().join(name);
        save_image(&image, &path).unwrap();
        assert!(path.exists(), "{name} not written");
    }

    let loaded = load_image(&dir.path().join("speckle.webp")).unwrap();
    assert_eq!(loaded.dim(), (32, 32));
}
