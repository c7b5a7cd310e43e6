use std::sync::mpsc;

use resizer_core::command::CommandReport;
use resizer_core::config::AppConfig;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{PreviewState, UIState};
use crate::workers;

pub struct ResizerApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub preview: PreviewState,
    pub config: AppConfig,
}

impl ResizerApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx, ctx.clone(), config.session_options());

        Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            preview: PreviewState::default(),
            config,
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        loop {
            match self.result_rx.try_recv() {
                Ok(result) => self.handle_result(ctx, result),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.ui_state.mark_worker_stopped();
                    break;
                }
            }
        }
    }

    fn handle_result(&mut self, ctx: &egui::Context, result: WorkerResult) {
        match result {
            WorkerResult::Preview {
                image,
                image_size,
                label,
            } => {
                self.update_preview_texture(ctx, image, image_size, label);
            }
            WorkerResult::OpenUrl { url } => {
                ctx.open_url(egui::OpenUrl::new_tab(url));
            }
            WorkerResult::Finished { report, elapsed } => {
                self.ui_state.pending = None;
                self.handle_report(report, elapsed);
            }
            WorkerResult::Log { message } => {
                self.ui_state.add_log(message);
            }
        }
    }

    fn handle_report(&mut self, report: CommandReport, elapsed: std::time::Duration) {
        match report {
            CommandReport::Cancelled => {}
            CommandReport::Opened(info) => {
                self.ui_state.add_log(format!(
                    "Opened: {} ({}x{}, {:?})",
                    info.file_name(),
                    info.width,
                    info.height,
                    info.color_type
                ));
                self.ui_state.image_info = Some(info);
            }
            CommandReport::Saved { info, format } => {
                self.ui_state.add_log(format!(
                    "Saved: {} as {format} ({}x{}) in {}",
                    info.file_name(),
                    info.width,
                    info.height,
                    format_duration(elapsed)
                ));
                self.ui_state.image_info = Some(info);
            }
            CommandReport::LinkOpened(url) => {
                self.ui_state.add_log(format!("Opened {url}"));
            }
            CommandReport::Failed(message) => {
                self.ui_state.add_log(format!("ERROR: {message}"));
            }
        }
    }

    fn update_preview_texture(
        &mut self,
        ctx: &egui::Context,
        image: egui::ColorImage,
        image_size: [u32; 2],
        label: String,
    ) {
        let texture = ctx.load_texture("preview", image, egui::TextureOptions::LINEAR);
        self.preview.texture = Some(texture);
        self.preview.image_size = Some(image_size);
        self.preview.viewing_label = label;
    }

    /// Queue `cmd` unless another command is still in flight.
    pub fn send_command(&mut self, cmd: WorkerCommand) {
        if self.ui_state.is_busy() {
            return;
        }
        self.ui_state.pending = Some(cmd.label());
        if self.cmd_tx.send(cmd).is_err() {
            self.ui_state.mark_worker_stopped();
        }
    }
}

impl eframe::App for ResizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::status::show(ctx, self);
        panels::form::show(ctx, self);
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
