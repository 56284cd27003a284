#![allow(clippy::float_cmp)]

use std::io::Write;

use canvas::config::EditorConfig;
use canvas::error::CanvasError;
use canvas::validate::Requirement;

use super::*;

/// Scale is exactly 0.5 on the 3:4 canvas.
fn core() -> EditorCore {
    let config = EditorConfig::new(720.0, 0.5, 200.0, 800.0).unwrap();
    EditorCore::new(config, 2160.0).unwrap()
}

fn parse(raw: &str) -> SessionScript {
    serde_json::from_str(raw).unwrap()
}

#[test]
fn parses_tagged_events() {
    let script = parse(
        r#"{
            "aspectRatio": "9:16",
            "label": "Meera",
            "events": [
                {"type": "viewport", "width": 1280},
                {"type": "aspect", "ratio": "3:4"},
                {"type": "down", "x": 1, "y": 2},
                {"type": "move", "x": 3, "y": 4},
                {"type": "up", "x": 5, "y": 6},
                {"type": "leave"}
            ]
        }"#,
    );
    assert_eq!(script.aspect_ratio, Some(AspectRatio::Portrait9x16));
    assert_eq!(script.label, "Meera");
    assert_eq!(
        script.events,
        vec![
            ScriptEvent::Viewport { width: 1280.0 },
            ScriptEvent::Aspect { ratio: AspectRatio::Portrait3x4 },
            ScriptEvent::Down { x: 1.0, y: 2.0 },
            ScriptEvent::Move { x: 3.0, y: 4.0 },
            ScriptEvent::Up { x: 5.0, y: 6.0 },
            ScriptEvent::Leave,
        ]
    );
}

#[test]
fn missing_fields_default() {
    let script = parse("{}");
    assert!(script.aspect_ratio.is_none());
    assert!(script.background.is_none());
    assert!(script.events.is_empty());
}

#[test]
fn unknown_event_type_is_rejected() {
    let result: Result<SessionScript, _> = serde_json::from_str(r#"{"events": [{"type": "wheel"}]}"#);
    assert!(result.is_err());
}

#[test]
fn replay_drag_commits_logical_position() {
    let mut core = core();
    let script = parse(
        r#"{"events": [
            {"type": "down", "x": 270, "y": 162.5},
            {"type": "move", "x": 300, "y": 162.5},
            {"type": "up", "x": 320, "y": 162.5}
        ]}"#,
    );
    let actions = replay(&mut core, &script, Path::new(".")).unwrap();
    assert_eq!(core.snapshot().image.x, 515.0);
    assert_eq!(core.snapshot().image.y, 200.0);
    assert!(actions.iter().any(|a| matches!(a, Action::PlaceholderMoved { .. })));
}

#[test]
fn replay_leave_discards_gesture() {
    let mut core = core();
    let script = parse(
        r#"{"events": [
            {"type": "down", "x": 270, "y": 162.5},
            {"type": "move", "x": 320, "y": 162.5},
            {"type": "leave"}
        ]}"#,
    );
    let actions = replay(&mut core, &script, Path::new(".")).unwrap();
    assert_eq!(core.snapshot().image.x, 415.0);
    assert!(actions.contains(&Action::GestureCancelled));
}

#[test]
fn replay_applies_form_inputs() {
    let mut core = core();
    let script = parse(r#"{"aspectRatio": "9:16", "occasions": ["Birthday"], "languages": ["Tamil"], "label": "  Meera "}"#);
    replay(&mut core, &script, Path::new(".")).unwrap();
    assert_eq!(core.aspect(), AspectRatio::Portrait9x16);
    assert_eq!(core.inputs().occasions, vec!["Birthday".to_string()]);
    assert_eq!(core.inputs().languages, vec!["Tamil".to_string()]);
    assert_eq!(core.checklist().failing(), vec![Requirement::BackgroundImage]);
}

#[test]
fn replay_loads_background_relative_to_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    let mut file = std::fs::File::create(dir.path().join("bg.png")).unwrap();
    file.write_all(&[0x89, 0x50, 0x4e, 0x47]).unwrap();

    let mut core = core();
    let script = parse(
        r#"{"background": "bg.png", "occasions": ["Birthday"], "languages": ["English"], "label": "Meera"}"#,
    );
    replay(&mut core, &script, dir.path()).unwrap();

    let upload = core.export().unwrap();
    let summary = ExportSummary::from(&upload);
    assert_eq!(summary.background_bytes, 4);
    assert_eq!(summary.tag.as_deref(), Some("7"));
    assert_eq!(summary.label, "Meera");

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["aspectRatio"], "3:4");
    assert_eq!(json["languageTags"][0], "English");
    assert!(json["imagePlaceholder"].is_object());
    assert!(json["namePlaceholder"].is_object());
}

#[test]
fn replay_missing_background_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut core = core();
    let script = parse(r#"{"background": "nope.png"}"#);
    let err = replay(&mut core, &script, dir.path()).unwrap_err();
    assert!(matches!(err, StudioError::Io { .. }));
}

#[test]
fn replay_invalid_viewport_is_canvas_error() {
    let mut core = core();
    let script = parse(r#"{"events": [{"type": "viewport", "width": 0}]}"#);
    let err = replay(&mut core, &script, Path::new(".")).unwrap_err();
    assert!(matches!(err, StudioError::Canvas(CanvasError::InvalidViewport(_))));
}

#[test]
fn load_reads_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{"label": "Meera", "events": [{"type": "leave"}]}"#).unwrap();

    let script = load(&path).unwrap();
    assert_eq!(script.label, "Meera");
    assert_eq!(script.events, vec![ScriptEvent::Leave]);
}

#[test]
fn load_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();

    assert!(matches!(load(&path), Err(StudioError::InvalidScript(_))));
}
