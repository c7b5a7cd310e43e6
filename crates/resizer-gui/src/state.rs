use resizer_core::bitmap::ImageInfo;
use resizer_core::dimensions::DimensionInput;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Width and height text fields, unvalidated.
    pub dimensions: DimensionInput,

    /// Label of the command in flight (None = idle).
    pub pending: Option<&'static str>,

    pub image_info: Option<ImageInfo>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Set once the worker's channel has closed.
    pub worker_stopped: bool,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    /// Release the UI after the worker has gone away. Logs only the first time.
    pub fn mark_worker_stopped(&mut self) {
        self.pending = None;
        if !self.worker_stopped {
            self.worker_stopped = true;
            self.add_log("ERROR: worker thread stopped".into());
        }
    }
}

/// Preview display state.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
    /// Full-resolution size of the image the thumbnail was made from.
    pub image_size: Option<[u32; 2]>,
    pub viewing_label: String,
}
