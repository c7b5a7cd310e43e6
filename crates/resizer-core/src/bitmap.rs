use std::path::{Path, PathBuf};

use image::{ColorType, DynamicImage, ImageFormat};

/// A fully decoded image held by the session.
///
/// Never mutated in place: opening a file or saving a resize produces a new
/// `LoadedImage` that replaces the previous one.
#[derive(Clone, Debug)]
pub struct LoadedImage {
    pixels: DynamicImage,
    source: Option<PathBuf>,
    format: Option<ImageFormat>,
}

impl LoadedImage {
    pub fn new(pixels: DynamicImage) -> Self {
        Self {
            pixels,
            source: None,
            format: None,
        }
    }

    /// Attach the file this image was decoded from or written to.
    pub fn with_source(mut self, path: impl Into<PathBuf>, format: Option<ImageFormat>) -> Self {
        self.source = Some(path.into());
        self.format = format;
        self
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn color_type(&self) -> ColorType {
        self.pixels.color()
    }

    pub fn has_alpha(&self) -> bool {
        self.pixels.color().has_alpha()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn info(&self) -> ImageInfo {
        ImageInfo {
            path: self.source.clone(),
            width: self.width(),
            height: self.height(),
            color_type: self.color_type(),
            has_alpha: self.has_alpha(),
            format: self.format,
        }
    }
}

/// Summary of an image, used for log lines and the `info` command.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageInfo {
    pub path: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub color_type: ColorType,
    pub has_alpha: bool,
    pub format: Option<ImageFormat>,
}

impl ImageInfo {
    /// File name component of `path`, or an empty string.
    pub fn file_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}
