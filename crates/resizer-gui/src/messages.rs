use std::time::Duration;

use resizer_core::command::{Command, CommandReport};
use resizer_core::dimensions::DimensionInput;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Prompt for a file and load it.
    OpenImage,

    /// Resize the loaded image and prompt for where to save it.
    ResizeImage { input: DimensionInput },

    /// Open the project page in the browser.
    OpenProjectLink,
}

impl WorkerCommand {
    pub fn into_command(self) -> Command {
        match self {
            WorkerCommand::OpenImage => Command::OpenImage,
            WorkerCommand::ResizeImage { input } => Command::ResizeImage(input),
            WorkerCommand::OpenProjectLink => Command::OpenProjectLink,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkerCommand::OpenImage => "Opening",
            WorkerCommand::ResizeImage { .. } => "Resizing",
            WorkerCommand::OpenProjectLink => "Opening link",
        }
    }
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// The current image changed; `image` is its display thumbnail.
    Preview {
        image: egui::ColorImage,
        image_size: [u32; 2],
        label: String,
    },

    /// Open a URL from the UI thread.
    OpenUrl { url: String },

    /// The in-flight command finished.
    Finished {
        report: CommandReport,
        elapsed: Duration,
    },

    Log { message: String },
}
