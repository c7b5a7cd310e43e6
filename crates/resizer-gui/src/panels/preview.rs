use crate::app::ResizerApp;

/// Fixed square preview area; the thumbnail is drawn centered at its own size.
pub fn show(ui: &mut egui::Ui, app: &ResizerApp) {
    let side = app.config.preview_max_side as f32;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    paint_background(ui, rect);

    match app.preview.texture.as_ref() {
        Some(texture) => {
            let size = texture.size_vec2();
            let img_rect = egui::Rect::from_center_size(rect.center(), size);
            draw_image(ui, texture.id(), img_rect);
            draw_viewing_label(ui, rect, &app.preview.viewing_label);
        }
        None => show_placeholder(ui, rect),
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open an image to preview it",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
