use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Decode the window icon, looking next to the executable first and then
/// relative to the working directory.
pub fn load_icon(path: &Path) -> Option<egui::IconData> {
    for candidate in icon_candidates(path) {
        match image::open(&candidate) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                debug!(path = %candidate.display(), "Loaded window icon");
                return Some(egui::IconData {
                    width: rgba.width(),
                    height: rgba.height(),
                    rgba: rgba.into_raw(),
                });
            }
            Err(e) => debug!(path = %candidate.display(), "Icon candidate rejected: {e}"),
        }
    }
    warn!("Window icon {} not found, using default", path.display());
    None
}

fn icon_candidates(path: &Path) -> Vec<PathBuf> {
    if path.is_absolute() {
        return vec![path.to_path_buf()];
    }
    let mut candidates = Vec::new();
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        candidates.push(dir.join(path));
    }
    candidates.push(path.to_path_buf());
    candidates
}
