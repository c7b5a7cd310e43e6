use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::consts::{ERROR_TITLE, SUCCESS_TITLE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Success,
}

/// A message shown to the user in a modal notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: ERROR_TITLE.to_string(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: SUCCESS_TITLE.to_string(),
            message: message.into(),
        }
    }
}

/// Everything the session needs from the presentation layer.
///
/// Prompts block until the user answers; `None` means the prompt was
/// dismissed and the operation aborts without changing state.
pub trait Frontend {
    /// Ask for an existing image file to open.
    fn pick_image(&mut self, title: &str, extensions: &[&str]) -> Option<PathBuf>;

    /// Ask for a destination path for a save.
    fn pick_save_path(
        &mut self,
        title: &str,
        default_name: &str,
        extensions: &[&str],
    ) -> Option<PathBuf>;

    /// Show a modal notification.
    fn notify(&mut self, notice: &Notice);

    /// Open `url` in the user's browser.
    fn open_url(&mut self, url: &str);
}

/// A prompt issued through a [`ScriptedFrontend`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prompt {
    Open { title: String, extensions: Vec<String> },
    Save { title: String, default_name: String, extensions: Vec<String> },
}

/// Non-interactive frontend that answers prompts with preset paths.
///
/// Records every prompt, notice and URL so callers can inspect what the
/// session asked for. Used by the CLI and by tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedFrontend {
    open_path: Option<PathBuf>,
    save_path: Option<PathBuf>,
    pub prompts: Vec<Prompt>,
    pub notices: Vec<Notice>,
    pub opened_urls: Vec<String>,
}

impl ScriptedFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer open prompts with `path`.
    pub fn with_open_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.open_path = Some(path.into());
        self
    }

    /// Answer save prompts with `path`.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }

    pub fn set_save_path(&mut self, path: Option<PathBuf>) {
        self.save_path = path;
    }

    pub fn save_prompt_count(&self) -> usize {
        self.prompts
            .iter()
            .filter(|p| matches!(p, Prompt::Save { .. }))
            .count()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }
}

impl Frontend for ScriptedFrontend {
    fn pick_image(&mut self, title: &str, extensions: &[&str]) -> Option<PathBuf> {
        self.prompts.push(Prompt::Open {
            title: title.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        });
        debug!(answer = ?self.open_path, "Open prompt");
        self.open_path.clone()
    }

    fn pick_save_path(
        &mut self,
        title: &str,
        default_name: &str,
        extensions: &[&str],
    ) -> Option<PathBuf> {
        self.prompts.push(Prompt::Save {
            title: title.to_string(),
            default_name: default_name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        });
        debug!(answer = ?self.save_path, "Save prompt");
        self.save_path.clone()
    }

    fn notify(&mut self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Error => warn!(title = %notice.title, "{}", notice.message),
            NoticeLevel::Success => info!(title = %notice.title, "{}", notice.message),
        }
        self.notices.push(notice.clone());
    }

    fn open_url(&mut self, url: &str) {
        self.opened_urls.push(url.to_string());
    }
}
