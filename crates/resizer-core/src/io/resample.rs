use image::DynamicImage;
use tracing::{debug, warn};

use crate::consts::{MAX_RESAMPLE_BYTES, PREVIEW_FILTER, RESAMPLE_FILTER};
use crate::dimensions::TargetSize;
use crate::error::{ResizerError, Result};

/// Bytes per pixel of the f32 RGBA buffer the separable filter works in.
const INTERMEDIATE_BYTES_PER_PIXEL: u64 = 16;

/// Check that resampling `image` to `size` stays under [`MAX_RESAMPLE_BYTES`].
///
/// The vertical pass allocates `source width x target height` f32 RGBA
/// samples before the output buffer is built, so both are bounded.
pub fn check_resample_budget(image: &DynamicImage, size: TargetSize) -> Result<()> {
    let too_large = || ResizerError::TooLarge {
        width: size.width,
        height: size.height,
    };
    let output = u64::from(size.width)
        .checked_mul(u64::from(size.height))
        .and_then(|n| n.checked_mul(u64::from(image.color().bytes_per_pixel())))
        .ok_or_else(too_large)?;
    let intermediate = u64::from(image.width())
        .checked_mul(u64::from(size.height))
        .and_then(|n| n.checked_mul(INTERMEDIATE_BYTES_PER_PIXEL))
        .ok_or_else(too_large)?;

    if output > MAX_RESAMPLE_BYTES || intermediate > MAX_RESAMPLE_BYTES {
        warn!(output, intermediate, limit = MAX_RESAMPLE_BYTES, "Resize rejected");
        return Err(too_large());
    }
    Ok(())
}

/// Resample to exactly `size`, ignoring the source aspect ratio.
pub fn resize_exact(image: &DynamicImage, size: TargetSize) -> Result<DynamicImage> {
    check_resample_budget(image, size)?;
    debug!(
        from_w = image.width(),
        from_h = image.height(),
        to_w = size.width,
        to_h = size.height,
        "Resizing image"
    );
    Ok(image.resize_exact(size.width, size.height, RESAMPLE_FILTER))
}

/// Shrink `image` so its longest side is at most `max_side`, keeping the
/// aspect ratio. Images already within bounds are returned unscaled.
pub fn thumbnail(image: &DynamicImage, max_side: u32) -> DynamicImage {
    let max_side = max_side.max(1);
    if image.width() <= max_side && image.height() <= max_side {
        return image.clone();
    }
    let thumb = image.resize(max_side, max_side, PREVIEW_FILTER);
    debug!(
        width = thumb.width(),
        height = thumb.height(),
        "Preview thumbnail generated"
    );
    thumb
}
