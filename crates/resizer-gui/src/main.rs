mod app;
mod convert;
mod icon;
mod messages;
mod panels;
mod state;
mod workers;

use std::path::Path;

use resizer_core::config::AppConfig;

/// Optional overrides for the startup configuration, read from the working directory.
const CONFIG_FILE: &str = "image-resizer.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE));

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(config.window_size)
        .with_min_inner_size([360.0, 480.0])
        .with_title(config.title.as_str())
        .with_app_id(config.app_id.as_str());
    if let Some(icon) = icon::load_icon(&config.icon_path) {
        viewport = viewport.with_icon(icon);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(app::ResizerApp::new(&cc.egui_ctx, config)))),
    )
}
