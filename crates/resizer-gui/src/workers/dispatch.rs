use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::time::Instant;

use resizer_core::command::{dispatch, Command, CommandReport};
use resizer_core::frontend::{Frontend, Notice};
use resizer_core::session::{ImageEditorSession, SessionOptions};
use tracing::{debug, error, info};

use crate::convert::dynamic_image_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

use super::RfdFrontend;

/// Spawn the worker thread that owns the editing session. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    options: SessionOptions,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("resizer-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, options);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

/// Commands run strictly one at a time; dialogs block this thread, never the UI.
fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    options: SessionOptions,
) {
    let mut session = ImageEditorSession::new(options);
    let mut frontend = RfdFrontend::new(tx.clone(), ctx.clone());

    while let Ok(cmd) = cmd_rx.recv() {
        let command = cmd.into_command();
        debug!(command = command.name(), "Dispatching");

        let start = Instant::now();
        let report = run_command(&mut session, &command, &mut frontend);
        let elapsed = start.elapsed();

        if report.image_changed() {
            if let (Some(current), Some(preview)) = (session.current(), session.preview()) {
                send(
                    &tx,
                    &ctx,
                    WorkerResult::Preview {
                        image: dynamic_image_to_color_image(preview),
                        image_size: [current.width(), current.height()],
                        label: current.info().file_name(),
                    },
                );
            }
        }

        send(&tx, &ctx, WorkerResult::Finished { report, elapsed });
    }

    info!("Worker thread exiting");
}

/// Run one command, turning a panic inside it into a failed report so the
/// worker survives and the UI is released.
///
/// The session only swaps its image after an operation completes, so a
/// panic part-way through leaves it as it was.
pub(crate) fn run_command(
    session: &mut ImageEditorSession,
    command: &Command,
    frontend: &mut dyn Frontend,
) -> CommandReport {
    match panic::catch_unwind(AssertUnwindSafe(|| dispatch(session, command, frontend))) {
        Ok(report) => report,
        Err(payload) => {
            let message = format!("{} failed: {}", command.name(), panic_message(&*payload));
            error!(command = command.name(), "{message}");
            frontend.notify(&Notice::error(message.clone()));
            CommandReport::Failed(message)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unexpected internal error"
    }
}
