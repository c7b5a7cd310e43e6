use image::DynamicImage;

/// Convert any decoded image to an egui ColorImage (8-bit sRGBA).
pub fn dynamic_image_to_color_image(image: &DynamicImage) -> egui::ColorImage {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
