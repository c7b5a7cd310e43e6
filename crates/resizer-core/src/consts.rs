use image::imageops::FilterType;

/// Longest side, in pixels, of the on-screen preview.
pub const PREVIEW_MAX_SIDE: u32 = 500;

/// Raster extensions offered by the open and save prompts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Label for the extension filter shown in file prompts.
pub const IMAGE_FILTER_NAME: &str = "Images";

/// File name suggested by the save prompt.
pub const DEFAULT_SAVE_NAME: &str = "resized_image.jpg";

pub const OPEN_PROMPT_TITLE: &str = "Select an image to resize";
pub const SAVE_PROMPT_TITLE: &str = "Save resized image";

pub const ERROR_TITLE: &str = "Error";
pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Image resized and saved successfully!";

/// Filter used for every user-requested resize.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Largest buffer, in bytes, a single resample may allocate. Matches the
/// decoder allocation limit `image` applies when opening files.
pub const MAX_RESAMPLE_BYTES: u64 = 512 * 1024 * 1024;

/// Filter used to shrink the preview thumbnail.
pub const PREVIEW_FILTER: FilterType = FilterType::Lanczos3;

pub const DEFAULT_APP_ID: &str = "com.example.imageresizer";
pub const DEFAULT_TITLE: &str = "Image Resizer";
pub const DEFAULT_ICON_PATH: &str = "logo.png";
pub const DEFAULT_PROJECT_URL: &str = "https://github.com/facior";
pub const DEFAULT_LINK_LABEL: &str = "GitHub: facior";
pub const DEFAULT_COPYRIGHT: &str = "© 2024 Łukasz Kubieniec. All rights reserved.";

/// Initial inner window size (width, height) in logical points.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [560.0, 860.0];
