use std::path::Path;

use image::{GrayImage, ImageBuffer, ImageFormat, Luma};
use tracing::debug;

use crate::error::{Result, SpeckleError};
use crate::types::Image;

/// Rescale an image by its peak so samples fall in [0, 1].
///
/// Speckle intensities are unbounded, so every integer encoder goes through
/// this first.
pub fn to_display_range(image: &Image) -> Result<Image> {
    let peak = image.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !peak.is_finite() || peak <= 0.0 {
        return Err(SpeckleError::DegenerateInput(format!(
            "cannot scale image with peak {peak} into display range"
        )));
    }
    Ok(image.mapv(|v| (v / peak).clamp(0.0, 1.0)))
}

/// Save an image as 16-bit grayscale TIFF.
pub fn save_tiff(image: &Image, path: &Path) -> Result<()> {
    let buffer = to_luma16(image)?;
    buffer.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save an image as 16-bit grayscale PNG.
pub fn save_png(image: &Image, path: &Path) -> Result<()> {
    let buffer = to_luma16(image)?;
    buffer.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save an image as lossless 8-bit grayscale WebP.
pub fn save_webp(image: &Image, path: &Path) -> Result<()> {
    let scaled = to_display_range(image)?;
    let (h, w) = scaled.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &v) in scaled.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Luma([(v * 255.0).round() as u8]));
    }

    img.save_with_format(path, ImageFormat::WebP)?;
    Ok(())
}

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &Image, path: &Path) -> Result<()> {
    debug!(path = %path.display(), "Saving image");
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(image, path),
        Some("png") => save_png(image, path),
        Some("webp") => save_webp(image, path),
        _ => save_tiff(image, path),
    }
}

/// Load any grayscale-convertible image file, scaled to [0, 1].
pub fn load_image(path: &Path) -> Result<Image> {
    let img = image::open(path)?;
    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();

    let data = Image::from_shape_fn((h as usize, w as usize), |(row, col)| {
        gray.get_pixel(col as u32, row as u32).0[0] as f64 / 65535.0
    });
    debug!(path = %path.display(), width = w, height = h, "Loaded image");
    Ok(data)
}

fn to_luma16(image: &Image) -> Result<ImageBuffer<Luma<u16>, Vec<u16>>> {
    let scaled = to_display_range(image)?;
    let (h, w) = scaled.dim();
    let pixels: Vec<u16> = scaled.iter().map(|&v| (v * 65535.0).round() as u16).collect();

    ImageBuffer::from_raw(w as u32, h as u32, pixels).ok_or_else(|| {
        SpeckleError::InvalidParameter(format!("pixel buffer does not fit {w}x{h}"))
    })
}
