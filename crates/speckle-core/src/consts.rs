/// Default row/column examined by partial cross-correlation.
pub const DEFAULT_RES_FAC: usize = 96;

/// Default edge length (pixels) of a synthesized speckle image.
pub const DEFAULT_IMAGE_SIZE: usize = 512;

/// Default speckle size; the aperture diameter is `image_size / speckle_size`.
pub const DEFAULT_SPECKLE_SIZE: usize = 4;

/// Default output path for synthesized patterns.
pub const DEFAULT_SPECKLE_OUTPUT: &str = "speckle.tiff";
