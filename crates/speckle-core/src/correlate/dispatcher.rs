use crate::config::CorrelationMethod;
use crate::error::Result;
use crate::types::{Image, OffsetResult};

use super::{full, partial};

/// Measure the offset between two images with the configured method.
pub fn correlate_with(
    method: &CorrelationMethod,
    img1: &Image,
    img2: &Image,
) -> Result<OffsetResult> {
    match method {
        CorrelationMethod::Full => full::correlate(img1, img2),
        CorrelationMethod::Partial { res_fac } => partial::partial_correlate(img1, img2, *res_fac),
    }
}
