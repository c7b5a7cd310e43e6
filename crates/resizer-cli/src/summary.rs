use std::time::Duration;

use console::Style;
use resizer_core::bitmap::ImageInfo;
use resizer_core::format::TargetFormat;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    format: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            format: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

fn path_text(info: &ImageInfo) -> String {
    info.path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}

pub fn print_resize_summary(
    source: &ImageInfo,
    saved: &ImageInfo,
    format: TargetFormat,
    elapsed: Duration,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Image Resized"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(13)));
    println!();

    println!(
        "  {:<10}{}  {}",
        s.label.apply_to("Input"),
        s.path.apply_to(path_text(source)),
        s.value.apply_to(format!("{}x{}", source.width, source.height))
    );
    println!(
        "  {:<10}{}  {}",
        s.label.apply_to("Output"),
        s.path.apply_to(path_text(saved)),
        s.value.apply_to(format!("{}x{}", saved.width, saved.height))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Format"),
        s.format.apply_to(format)
    );
    if source.has_alpha && !saved.has_alpha {
        println!(
            "  {:<10}{}",
            s.label.apply_to("Alpha"),
            s.format.apply_to("flattened")
        );
    }
    println!(
        "  {:<10}{}",
        s.label.apply_to("Time"),
        s.value.apply_to(format!("{:.2}s", elapsed.as_secs_f32()))
    );
    println!();
}
