use std::fmt;
use std::path::Path;

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::error::{ResizerError, Result};

/// Encoding chosen for a save, resolved from the destination extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetFormat {
    Png,
    Jpeg,
    Bmp,
    Gif,
}

impl TargetFormat {
    pub const ALL: [TargetFormat; 4] = [
        TargetFormat::Png,
        TargetFormat::Jpeg,
        TargetFormat::Bmp,
        TargetFormat::Gif,
    ];

    /// Resolve a format from a file extension, with or without the leading dot.
    ///
    /// The extension is uppercased and `JPG` is rewritten to `JPEG` before
    /// matching, so `.jpg`, `.JPG` and `.Jpg` all resolve to [`TargetFormat::Jpeg`].
    pub fn from_extension(ext: &str) -> Result<Self> {
        let upper = ext.trim_start_matches('.').to_ascii_uppercase();
        let name = if upper == "JPG" { "JPEG" } else { upper.as_str() };

        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| ResizerError::UnsupportedFormat(ext.to_string()))
    }

    /// Resolve a format from the extension of `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                ResizerError::UnsupportedFormat(format!("{} has no extension", path.display()))
            })?;
        Self::from_extension(ext)
    }

    /// Canonical upper-case format name.
    pub fn name(self) -> &'static str {
        match self {
            TargetFormat::Png => "PNG",
            TargetFormat::Jpeg => "JPEG",
            TargetFormat::Bmp => "BMP",
            TargetFormat::Gif => "GIF",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            TargetFormat::Png => ImageFormat::Png,
            TargetFormat::Jpeg => ImageFormat::Jpeg,
            TargetFormat::Bmp => ImageFormat::Bmp,
            TargetFormat::Gif => ImageFormat::Gif,
        }
    }

    /// Whether the encoder can store an alpha channel.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, TargetFormat::Jpeg)
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
