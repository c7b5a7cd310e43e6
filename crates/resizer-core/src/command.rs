//! Maps user actions onto session operations.
//!
//! Each UI action becomes one [`Command`]; [`dispatch`] runs it against the
//! session, turns errors into notices and reports what changed.

use tracing::warn;

use crate::bitmap::ImageInfo;
use crate::consts::SUCCESS_MESSAGE;
use crate::dimensions::DimensionInput;
use crate::error::ResizerError;
use crate::format::TargetFormat;
use crate::frontend::{Frontend, Notice};
use crate::session::{ImageEditorSession, OpenOutcome, ResizeOutcome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    OpenImage,
    ResizeImage(DimensionInput),
    OpenProjectLink,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::OpenImage => "Open Image",
            Command::ResizeImage(_) => "Resize Image",
            Command::OpenProjectLink => "Open Project Link",
        }
    }

    fn failure_prefix(&self) -> &'static str {
        match self {
            Command::OpenImage => "Failed to open image",
            Command::ResizeImage(_) => "Failed to save image",
            Command::OpenProjectLink => "Failed to open link",
        }
    }
}

/// What a dispatched command did.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandReport {
    /// A prompt was dismissed; nothing changed.
    Cancelled,
    Opened(ImageInfo),
    Saved {
        info: ImageInfo,
        format: TargetFormat,
    },
    LinkOpened(String),
    /// The user was shown an error; nothing changed.
    Failed(String),
}

impl CommandReport {
    /// True when the current image, and so the preview, was replaced.
    pub fn image_changed(&self) -> bool {
        matches!(self, CommandReport::Opened(_) | CommandReport::Saved { .. })
    }
}

/// Run `command` against `session`, reporting outcomes through `frontend`.
pub fn dispatch(
    session: &mut ImageEditorSession,
    command: &Command,
    frontend: &mut dyn Frontend,
) -> CommandReport {
    let result = match command {
        Command::OpenImage => session.open_image(frontend).map(|outcome| match outcome {
            OpenOutcome::Cancelled => CommandReport::Cancelled,
            OpenOutcome::Opened(info) => CommandReport::Opened(info),
        }),
        Command::ResizeImage(input) => session.resize_image(input, frontend).map(|outcome| {
            match outcome {
                ResizeOutcome::Cancelled => CommandReport::Cancelled,
                ResizeOutcome::Saved { format, info, .. } => {
                    CommandReport::Saved { info, format }
                }
            }
        }),
        Command::OpenProjectLink => {
            let url = session.options().project_url.clone();
            frontend.open_url(&url);
            Ok(CommandReport::LinkOpened(url))
        }
    };

    match result {
        Ok(report) => {
            if matches!(report, CommandReport::Saved { .. }) {
                frontend.notify(&Notice::success(SUCCESS_MESSAGE));
            }
            report
        }
        Err(e) => {
            let message = failure_message(command, &e);
            warn!(command = command.name(), "{message}");
            frontend.notify(&Notice::error(message.clone()));
            CommandReport::Failed(message)
        }
    }
}

/// Precondition failures carry their own user-facing text; codec and I/O
/// failures are prefixed with the action that failed.
fn failure_message(command: &Command, error: &ResizerError) -> String {
    match error {
        ResizerError::MissingImage
        | ResizerError::InvalidDimensions
        | ResizerError::TooLarge { .. } => error.to_string(),
        other => format!("{}: {other}", command.failure_prefix()),
    }
}
