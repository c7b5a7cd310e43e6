use std::path::PathBuf;
use std::sync::mpsc;

use resizer_core::consts::IMAGE_FILTER_NAME;
use resizer_core::frontend::{Frontend, Notice, NoticeLevel};

use crate::messages::WorkerResult;

use super::{send, send_log};

/// Native dialogs via rfd, run on the worker thread.
///
/// Each call blocks the worker until the user answers; the UI thread keeps
/// repainting meanwhile.
pub(crate) struct RfdFrontend {
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
}

impl RfdFrontend {
    pub fn new(tx: mpsc::Sender<WorkerResult>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }
}

impl Frontend for RfdFrontend {
    fn pick_image(&mut self, title: &str, extensions: &[&str]) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter(IMAGE_FILTER_NAME, extensions)
            .pick_file()
    }

    fn pick_save_path(
        &mut self,
        title: &str,
        default_name: &str,
        extensions: &[&str],
    ) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title(title)
            .add_filter(IMAGE_FILTER_NAME, extensions)
            .set_file_name(default_name)
            .save_file()
    }

    fn notify(&mut self, notice: &Notice) {
        let level = match notice.level {
            NoticeLevel::Error => rfd::MessageLevel::Error,
            NoticeLevel::Success => rfd::MessageLevel::Info,
        };
        send_log(
            &self.tx,
            &self.ctx,
            format!("{}: {}", notice.title, notice.message),
        );
        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.message.as_str())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn open_url(&mut self, url: &str) {
        send(
            &self.tx,
            &self.ctx,
            WorkerResult::OpenUrl {
                url: url.to_string(),
            },
        );
    }
}
