use std::path::{Path, PathBuf};

use image::DynamicImage;
use tracing::{debug, info};

use crate::bitmap::{ImageInfo, LoadedImage};
use crate::consts::{
    DEFAULT_PROJECT_URL, DEFAULT_SAVE_NAME, OPEN_PROMPT_TITLE, PREVIEW_MAX_SIDE,
    SAVE_PROMPT_TITLE, SUPPORTED_EXTENSIONS,
};
use crate::dimensions::DimensionInput;
use crate::error::{ResizerError, Result};
use crate::format::TargetFormat;
use crate::frontend::Frontend;
use crate::io::image_io::{load_image, save_image};
use crate::io::resample::{resize_exact, thumbnail};

/// Settings the session needs from the startup configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOptions {
    pub preview_max_side: u32,
    pub default_save_name: String,
    pub project_url: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            preview_max_side: PREVIEW_MAX_SIDE,
            default_save_name: DEFAULT_SAVE_NAME.to_string(),
            project_url: DEFAULT_PROJECT_URL.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NoImageLoaded,
    ImageLoaded,
}

#[derive(Clone, Debug, PartialEq)]
pub enum OpenOutcome {
    /// The prompt was dismissed.
    Cancelled,
    Opened(ImageInfo),
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResizeOutcome {
    /// The save prompt was dismissed; the resized image was discarded.
    Cancelled,
    Saved {
        path: PathBuf,
        format: TargetFormat,
        info: ImageInfo,
    },
}

/// Owns the current image and its preview.
///
/// Every operation either completes and replaces the image, or leaves the
/// session exactly as it was.
#[derive(Debug, Default)]
pub struct ImageEditorSession {
    options: SessionOptions,
    current: Option<LoadedImage>,
    preview: Option<DynamicImage>,
}

impl ImageEditorSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            current: None,
            preview: None,
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn state(&self) -> SessionState {
        if self.current.is_some() {
            SessionState::ImageLoaded
        } else {
            SessionState::NoImageLoaded
        }
    }

    pub fn current(&self) -> Option<&LoadedImage> {
        self.current.as_ref()
    }

    /// Display-only thumbnail of the current image.
    pub fn preview(&self) -> Option<&DynamicImage> {
        self.preview.as_ref()
    }

    /// Prompt for a file and load it.
    pub fn open_image(&mut self, frontend: &mut dyn Frontend) -> Result<OpenOutcome> {
        let Some(path) = frontend.pick_image(OPEN_PROMPT_TITLE, SUPPORTED_EXTENSIONS) else {
            debug!("Open prompt dismissed");
            return Ok(OpenOutcome::Cancelled);
        };
        self.open_path(&path)
    }

    /// Load `path`, replacing the current image only if decoding succeeds.
    pub fn open_path(&mut self, path: &Path) -> Result<OpenOutcome> {
        let loaded = load_image(path)?;
        let info = loaded.info();
        self.replace_image(loaded);
        Ok(OpenOutcome::Opened(info))
    }

    /// Resize the current image to the requested size and save it.
    ///
    /// Validation happens before any prompt is shown. The stored image and
    /// preview change only after the file has been written.
    pub fn resize_image(
        &mut self,
        input: &DimensionInput,
        frontend: &mut dyn Frontend,
    ) -> Result<ResizeOutcome> {
        let current = self.current.as_ref().ok_or(ResizerError::MissingImage)?;
        let size = input.parse()?;
        let resized = resize_exact(current.pixels(), size)?;

        let Some(path) = frontend.pick_save_path(
            SAVE_PROMPT_TITLE,
            &self.options.default_save_name,
            SUPPORTED_EXTENSIONS,
        ) else {
            debug!("Save prompt dismissed, discarding {size} resize");
            return Ok(ResizeOutcome::Cancelled);
        };

        let format = TargetFormat::from_path(&path)?;
        let saved = save_image(resized, &path)?;
        let info = saved.info();
        self.replace_image(saved);

        Ok(ResizeOutcome::Saved { path, format, info })
    }

    fn replace_image(&mut self, image: LoadedImage) {
        let preview = thumbnail(image.pixels(), self.options.preview_max_side);
        info!(
            width = image.width(),
            height = image.height(),
            preview_w = preview.width(),
            preview_h = preview.height(),
            "Current image replaced"
        );
        self.preview = Some(preview);
        self.current = Some(image);
    }
}
