mod common;

use image::ImageFormat;

use resizer_core::command::{dispatch, Command, CommandReport};
use resizer_core::dimensions::DimensionInput;
use resizer_core::io::image_io::load_image;
use resizer_core::session::ImageEditorSession;
use resizer_core::frontend::ScriptedFrontend;

#[test]
fn test_png_to_png_keeps_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_png(dir.path(), "input.png", &common::gradient_rgba(1000, 800));
    let output = dir.path().join("out.png");

    let mut session = ImageEditorSession::default();
    let mut fe = ScriptedFrontend::new()
        .with_open_path(&input)
        .with_save_path(&output);

    assert!(dispatch(&mut session, &Command::OpenImage, &mut fe).image_changed());
    let report = dispatch(
        &mut session,
        &Command::ResizeImage(DimensionInput::new("200", "100")),
        &mut fe,
    );
    assert!(matches!(report, CommandReport::Saved { .. }));

    let decoded = load_image(&output).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (200, 100));
    assert_eq!(decoded.format(), Some(ImageFormat::Png));
    assert!(decoded.has_alpha());

    let preview = session.preview().unwrap();
    assert_eq!((preview.width(), preview.height()), (200, 100));
}

#[test]
fn test_rgba_png_to_jpeg_drops_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_png(dir.path(), "input.png", &common::gradient_rgba(1000, 800));
    let output = dir.path().join("out.jpg");

    let mut session = ImageEditorSession::default();
    let mut fe = ScriptedFrontend::new()
        .with_open_path(&input)
        .with_save_path(&output);

    dispatch(&mut session, &Command::OpenImage, &mut fe);
    let report = dispatch(
        &mut session,
        &Command::ResizeImage(DimensionInput::new("300", "300")),
        &mut fe,
    );
    assert!(matches!(report, CommandReport::Saved { .. }), "{report:?}");

    let decoded = load_image(&output).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (300, 300));
    assert_eq!(decoded.format(), Some(ImageFormat::Jpeg));
    assert!(!decoded.has_alpha());
}

#[test]
fn test_successive_resizes_chain_from_last_save() {
    let dir = tempfile::tempdir().unwrap();
    let input = common::write_png(dir.path(), "input.png", &common::gradient_rgb(640, 480));

    let mut session = ImageEditorSession::default();
    let mut fe = ScriptedFrontend::new().with_open_path(&input);
    dispatch(&mut session, &Command::OpenImage, &mut fe);

    fe.set_save_path(Some(dir.path().join("first.bmp")));
    dispatch(
        &mut session,
        &Command::ResizeImage(DimensionInput::new("320", "240")),
        &mut fe,
    );
    fe.set_save_path(Some(dir.path().join("second.gif")));
    dispatch(
        &mut session,
        &Command::ResizeImage(DimensionInput::new("32", "24")),
        &mut fe,
    );

    let current = session.current().unwrap();
    assert_eq!((current.width(), current.height()), (32, 24));
    assert_eq!(current.source(), Some(dir.path().join("second.gif").as_path()));
    assert_eq!(load_image(&dir.path().join("first.bmp")).unwrap().width(), 320);
    assert_eq!(fe.notices.len(), 2);
}
