use crate::app::ResizerApp;

pub fn show(ctx: &egui::Context, app: &mut ResizerApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(pending) = app.ui_state.pending {
                ui.spinner();
                ui.label(format!("{pending}..."));
                ui.separator();
            }
            match app.preview.image_size {
                Some([w, h]) => ui.label(format!("{w}x{h}")),
                None => ui.label("No image"),
            };
            if let Some(ref info) = app.ui_state.image_info {
                if info.has_alpha {
                    ui.separator();
                    ui.label("Alpha");
                }
            }
        });

        ui.add_space(2.0);
    });
}
