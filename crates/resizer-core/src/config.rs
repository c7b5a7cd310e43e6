use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::consts::{
    DEFAULT_APP_ID, DEFAULT_COPYRIGHT, DEFAULT_ICON_PATH, DEFAULT_LINK_LABEL,
    DEFAULT_PROJECT_URL, DEFAULT_SAVE_NAME, DEFAULT_TITLE, DEFAULT_WINDOW_SIZE, PREVIEW_MAX_SIDE,
};
use crate::error::{ResizerError, Result};
use crate::session::SessionOptions;

/// Process-wide application identity and presentation settings.
///
/// Built once at startup and never mutated afterwards. Every field has a
/// default, so a TOML file only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_id: String,
    pub title: String,
    /// Window icon, relative to the executable directory or the working directory.
    pub icon_path: PathBuf,
    pub project_url: String,
    pub link_label: String,
    pub copyright: String,
    /// Longest side of the preview thumbnail.
    pub preview_max_side: u32,
    pub default_save_name: String,
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: DEFAULT_APP_ID.to_string(),
            title: DEFAULT_TITLE.to_string(),
            icon_path: PathBuf::from(DEFAULT_ICON_PATH),
            project_url: DEFAULT_PROJECT_URL.to_string(),
            link_label: DEFAULT_LINK_LABEL.to_string(),
            copyright: DEFAULT_COPYRIGHT.to_string(),
            preview_max_side: PREVIEW_MAX_SIDE,
            default_save_name: DEFAULT_SAVE_NAME.to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ResizerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// A file that exists but fails to parse is logged and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded config");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), "Ignoring config: {e}");
                Self::default()
            }
        }
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ResizerError::Config(e.to_string()))
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            preview_max_side: self.preview_max_side,
            default_save_name: self.default_save_name.clone(),
            project_url: self.project_url.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.preview_max_side == 0 {
            return Err(ResizerError::Config(
                "preview_max_side must be greater than zero".into(),
            ));
        }
        if self.default_save_name.trim().is_empty() {
            return Err(ResizerError::Config(
                "default_save_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
