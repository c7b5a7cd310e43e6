use std::env;
use std::fs;
use std::path::Path;

// Copies assets/ next to the built binary so the window icon resolves
// relative to the executable.
fn main() {
    println!("cargo:rerun-if-changed=assets/");

    let source = Path::new("assets");
    if !source.exists() {
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let target_dir = Path::new(&out_dir)
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .parent()
        .unwrap();

    if let Ok(entries) = fs::read_dir(source) {
        for entry in entries {
            let entry = entry.unwrap();
            let path = entry.path();
            if path.is_file() {
                fs::copy(&path, target_dir.join(path.file_name().unwrap())).unwrap();
            }
        }
    }
}
