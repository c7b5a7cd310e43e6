use crate::app::ResizerApp;
use crate::messages::WorkerCommand;
use crate::panels::preview;

const SPACING: f32 = 5.0;

/// The single-column form: open, dimensions, resize, preview, footer.
pub fn show(ctx: &egui::Context, app: &mut ResizerApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            let idle = !app.ui_state.is_busy();

            ui.label("Select an image to resize:");
            ui.add_space(SPACING);
            if ui.add_enabled(idle, egui::Button::new("Open Image")).clicked() {
                app.send_command(WorkerCommand::OpenImage);
            }
            ui.add_space(SPACING);

            ui.label("Width:");
            ui.add(
                egui::TextEdit::singleline(&mut app.ui_state.dimensions.width)
                    .desired_width(f32::INFINITY),
            );
            ui.label("Height:");
            ui.add(
                egui::TextEdit::singleline(&mut app.ui_state.dimensions.height)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(SPACING);

            if ui.add_enabled(idle, egui::Button::new("Resize Image")).clicked() {
                let input = app.ui_state.dimensions.clone();
                app.send_command(WorkerCommand::ResizeImage { input });
            }
            ui.add_space(SPACING);

            preview::show(ui, app);
            ui.add_space(SPACING);

            ui.label(app.config.copyright.as_str());
            if ui
                .add_enabled(idle, egui::Button::new(app.config.link_label.as_str()))
                .clicked()
            {
                app.send_command(WorkerCommand::OpenProjectLink);
            }
        });
    });
}
