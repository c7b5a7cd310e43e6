use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader};
use tracing::{debug, info};

use crate::bitmap::{ImageInfo, LoadedImage};
use crate::error::Result;
use crate::format::TargetFormat;

/// Decode an image file fully into memory.
///
/// The format is sniffed from the file contents, falling back to the extension.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let pixels = reader.decode()?;

    info!(
        path = %path.display(),
        width = pixels.width(),
        height = pixels.height(),
        color = ?pixels.color(),
        "Image decoded"
    );
    Ok(LoadedImage::new(pixels).with_source(path, format))
}

/// Read dimensions and pixel layout without decoding pixel data.
pub fn image_info(path: &Path) -> Result<ImageInfo> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let decoder = reader.into_decoder()?;
    let (width, height) = decoder.dimensions();
    let color_type = decoder.color_type();

    Ok(ImageInfo {
        path: Some(path.to_path_buf()),
        width,
        height,
        color_type,
        has_alpha: color_type.has_alpha(),
        format,
    })
}

/// Convert `image` to a pixel layout the encoder for `format` accepts.
///
/// Formats without an alpha channel get alpha-carrying images flattened to
/// RGB first. The rest keep alpha but may need a narrower sample type.
pub fn prepare_for_format(image: DynamicImage, format: TargetFormat) -> DynamicImage {
    use DynamicImage::*;

    let image = if !format.supports_alpha() && image.color().has_alpha() {
        debug!(color = ?image.color(), %format, "Dropping alpha channel");
        ImageRgb8(image.to_rgb8())
    } else {
        image
    };

    match format {
        TargetFormat::Jpeg => match image {
            ImageLuma8(_) | ImageRgb8(_) => image,
            ImageLuma16(_) => ImageLuma8(image.to_luma8()),
            other => ImageRgb8(other.to_rgb8()),
        },
        TargetFormat::Png => match image {
            ImageRgb32F(_) => ImageRgb16(image.to_rgb16()),
            ImageRgba32F(_) => ImageRgba16(image.to_rgba16()),
            other => other,
        },
        TargetFormat::Bmp => match image {
            ImageLuma8(_) | ImageLumaA8(_) | ImageRgb8(_) | ImageRgba8(_) => image,
            other if other.color().has_alpha() => ImageRgba8(other.to_rgba8()),
            other => ImageRgb8(other.to_rgb8()),
        },
        TargetFormat::Gif => match image {
            ImageRgb8(_) | ImageRgba8(_) => image,
            other => ImageRgba8(other.to_rgba8()),
        },
    }
}

/// Encode `image` to `path` in exactly `format`.
pub fn write_image(image: &DynamicImage, path: &Path, format: TargetFormat) -> Result<()> {
    image.save_with_format(path, format.image_format())?;
    Ok(())
}

/// Resolve the format from `path`, convert the pixel layout and write the file.
///
/// Returns the image as it was written, so callers can keep what is on disk.
pub fn save_image(image: DynamicImage, path: &Path) -> Result<LoadedImage> {
    let format = TargetFormat::from_path(path)?;
    let prepared = prepare_for_format(image, format);
    write_image(&prepared, path, format)?;

    info!(
        path = %path.display(),
        format = %format,
        width = prepared.width(),
        height = prepared.height(),
        "Image saved"
    );
    Ok(LoadedImage::new(prepared).with_source(path, Some(format.image_format())))
}
