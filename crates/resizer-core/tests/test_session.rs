mod common;

use resizer_core::consts::{DEFAULT_SAVE_NAME, SUPPORTED_EXTENSIONS};
use resizer_core::dimensions::DimensionInput;
use resizer_core::error::ResizerError;
use resizer_core::format::TargetFormat;
use resizer_core::frontend::{Prompt, ScriptedFrontend};
use resizer_core::session::{
    ImageEditorSession, OpenOutcome, ResizeOutcome, SessionOptions, SessionState,
};

fn session() -> ImageEditorSession {
    ImageEditorSession::new(SessionOptions::default())
}

#[test]
fn test_new_session_has_no_image() {
    let s = session();
    assert_eq!(s.state(), SessionState::NoImageLoaded);
    assert!(s.current().is_none());
    assert!(s.preview().is_none());
}

#[test]
fn test_open_cancelled_changes_nothing() {
    let mut s = session();
    let mut fe = ScriptedFrontend::new();

    let outcome = s.open_image(&mut fe).unwrap();
    assert_eq!(outcome, OpenOutcome::Cancelled);
    assert_eq!(s.state(), SessionState::NoImageLoaded);
    assert!(fe.notices.is_empty());
}

#[test]
fn test_open_prompt_uses_raster_filter() {
    let mut s = session();
    let mut fe = ScriptedFrontend::new();
    s.open_image(&mut fe).unwrap();

    match &fe.prompts[0] {
        Prompt::Open { extensions, .. } => assert_eq!(extensions, SUPPORTED_EXTENSIONS),
        other => panic!("unexpected prompt {other:?}"),
    }
}

#[test]
fn test_open_loads_and_builds_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "big.png", &common::gradient_rgb(1000, 800));
    let mut s = session();
    let mut fe = ScriptedFrontend::new().with_open_path(&path);

    let outcome = s.open_image(&mut fe).unwrap();
    let OpenOutcome::Opened(info) = outcome else {
        panic!("expected Opened");
    };
    assert_eq!((info.width, info.height), (1000, 800));
    assert_eq!(s.state(), SessionState::ImageLoaded);

    // Full resolution is kept; only the preview is shrunk.
    let current = s.current().unwrap();
    assert_eq!((current.width(), current.height()), (1000, 800));
    let preview = s.preview().unwrap();
    assert_eq!((preview.width(), preview.height()), (500, 400));
}

#[test]
fn test_open_failure_keeps_previous_image() {
    let dir = tempfile::tempdir().unwrap();
    let good = common::write_png(dir.path(), "good.png", &common::gradient_rgb(64, 32));
    let bad = common::write_garbage(dir.path(), "bad.png");
    let mut s = session();

    s.open_path(&good).unwrap();
    let mut fe = ScriptedFrontend::new().with_open_path(&bad);
    assert!(s.open_image(&mut fe).is_err());

    let current = s.current().unwrap();
    assert_eq!(current.source(), Some(good.as_path()));
    assert_eq!((current.width(), current.height()), (64, 32));
}

#[test]
fn test_open_replaces_existing_image() {
    let dir = tempfile::tempdir().unwrap();
    let first = common::write_png(dir.path(), "a.png", &common::gradient_rgb(10, 10));
    let second = common::write_png(dir.path(), "b.png", &common::gradient_rgb(30, 20));
    let mut s = session();

    s.open_path(&first).unwrap();
    s.open_path(&second).unwrap();
    assert_eq!(s.current().unwrap().source(), Some(second.as_path()));
    assert_eq!(s.preview().unwrap().width(), 30);
}

#[test]
fn test_resize_without_image_never_prompts() {
    let mut s = session();
    let mut fe = ScriptedFrontend::new().with_save_path("/tmp/never.png");

    let err = s
        .resize_image(&DimensionInput::new("10", "10"), &mut fe)
        .unwrap_err();
    assert!(matches!(err, ResizerError::MissingImage));
    assert_eq!(fe.save_prompt_count(), 0);
}

#[test]
fn test_resize_invalid_dimensions_never_prompts() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "in.png", &common::gradient_rgb(50, 50));
    let mut s = session();
    s.open_path(&path).unwrap();

    for (w, h) in [("abc", "10"), ("10", ""), ("1.5", "2"), ("0", "10")] {
        let mut fe = ScriptedFrontend::new().with_save_path(dir.path().join("x.png"));
        let err = s.resize_image(&DimensionInput::new(w, h), &mut fe).unwrap_err();
        assert!(matches!(err, ResizerError::InvalidDimensions), "{w}x{h}");
        assert_eq!(fe.save_prompt_count(), 0);
    }
    assert_eq!(s.current().unwrap().width(), 50);
}

#[test]
fn test_resize_oversized_request_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "in.png", &common::gradient_rgba(4, 4));
    let mut s = session();
    s.open_path(&path).unwrap();
    let before = s.current().unwrap().info();

    let mut fe = ScriptedFrontend::new().with_save_path(dir.path().join("huge.png"));
    let err = s
        .resize_image(&DimensionInput::new("4294967295", "4294967295"), &mut fe)
        .unwrap_err();

    assert!(matches!(
        err,
        ResizerError::TooLarge { width: 4294967295, height: 4294967295 }
    ));
    assert_eq!(fe.save_prompt_count(), 0);
    assert_eq!(s.current().unwrap().info(), before);
    assert_eq!(s.preview().unwrap().width(), 4);
}

#[test]
fn test_resize_save_prompt_suggests_default_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "in.png", &common::gradient_rgb(20, 20));
    let mut s = session();
    s.open_path(&path).unwrap();

    let mut fe = ScriptedFrontend::new();
    s.resize_image(&DimensionInput::new("5", "5"), &mut fe).unwrap();

    match &fe.prompts[0] {
        Prompt::Save { default_name, extensions, .. } => {
            assert_eq!(default_name, DEFAULT_SAVE_NAME);
            assert_eq!(extensions, SUPPORTED_EXTENSIONS);
        }
        other => panic!("unexpected prompt {other:?}"),
    }
}

#[test]
fn test_resize_cancel_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "in.png", &common::gradient_rgba(80, 60));
    let mut s = session();
    s.open_path(&path).unwrap();
    let before = s.current().unwrap().info();
    let preview_before = s.preview().unwrap().clone();

    let mut fe = ScriptedFrontend::new();
    let outcome = s.resize_image(&DimensionInput::new("20", "20"), &mut fe).unwrap();

    assert_eq!(outcome, ResizeOutcome::Cancelled);
    assert_eq!(fe.save_prompt_count(), 1);
    assert_eq!(s.current().unwrap().info(), before);
    assert_eq!(s.preview().unwrap(), &preview_before);
}

#[test]
fn test_resize_saves_and_replaces_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "in.png", &common::gradient_rgb(1000, 800));
    let out = dir.path().join("out.png");
    let mut s = session();
    s.open_path(&path).unwrap();

    let mut fe = ScriptedFrontend::new().with_save_path(&out);
    let outcome = s.resize_image(&DimensionInput::new("700", "100"), &mut fe).unwrap();

    let ResizeOutcome::Saved { path: saved, format, info } = outcome else {
        panic!("expected Saved");
    };
    assert_eq!(saved, out);
    assert_eq!(format, TargetFormat::Png);
    assert_eq!((info.width, info.height), (700, 100));

    let current = s.current().unwrap();
    assert_eq!((current.width(), current.height()), (700, 100));
    assert_eq!(current.source(), Some(out.as_path()));
    let preview = s.preview().unwrap();
    assert_eq!(preview.width(), 500);
    assert!((70..=72).contains(&preview.height()));
}

#[test]
fn test_resize_save_failure_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "in.png", &common::gradient_rgb(40, 40));
    let mut s = session();
    s.open_path(&path).unwrap();

    let mut fe = ScriptedFrontend::new().with_save_path(dir.path().join("no_dir").join("o.png"));
    assert!(s.resize_image(&DimensionInput::new("10", "10"), &mut fe).is_err());
    assert_eq!(s.current().unwrap().width(), 40);
    assert_eq!(s.preview().unwrap().width(), 40);
}

#[test]
fn test_resize_unknown_extension_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "in.png", &common::gradient_rgb(40, 40));
    let mut s = session();
    s.open_path(&path).unwrap();

    let mut fe = ScriptedFrontend::new().with_save_path(dir.path().join("out.webp"));
    let err = s.resize_image(&DimensionInput::new("10", "10"), &mut fe).unwrap_err();
    assert!(matches!(err, ResizerError::UnsupportedFormat(_)));
    assert_eq!(s.current().unwrap().source(), Some(path.as_path()));
}

#[test]
fn test_custom_preview_bound() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_png(dir.path(), "in.png", &common::gradient_rgb(400, 200));
    let mut s = ImageEditorSession::new(SessionOptions {
        preview_max_side: 100,
        ..SessionOptions::default()
    });

    s.open_path(&path).unwrap();
    let preview = s.preview().unwrap();
    assert_eq!((preview.width(), preview.height()), (100, 50));
}
