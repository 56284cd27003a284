//! Scripted editing sessions.
//!
//! A session script is a JSON document describing the operator's form
//! inputs plus an ordered list of pointer and layout events. Replaying it
//! against an [`EditorCore`] reproduces the session headlessly.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::path::{Path, PathBuf};

use canvas::engine::{Action, EditorCore};
use canvas::export::{ExportPayload, TemplateUpload};
use canvas::geometry::AspectRatio;
use canvas::input::Button;
use canvas::scale::Point;
use serde::{Deserialize, Serialize};

use crate::error::StudioError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionScript {
    #[serde(default)]
    pub aspect_ratio: Option<AspectRatio>,
    /// Background image path, relative to the script file.
    #[serde(default)]
    pub background: Option<PathBuf>,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// One recorded host event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    Viewport { width: f64 },
    Aspect { ratio: AspectRatio },
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
}

/// What gets printed after a successful replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    #[serde(flatten)]
    pub payload: ExportPayload,
    pub tag: Option<String>,
    pub language_tags: Vec<String>,
    pub label: String,
    pub background_bytes: usize,
}

impl From<&TemplateUpload> for ExportSummary {
    fn from(upload: &TemplateUpload) -> Self {
        Self {
            payload: upload.payload,
            tag: upload.tag.clone(),
            language_tags: upload.language_tags.clone(),
            label: upload.label.clone(),
            background_bytes: upload.background.len(),
        }
    }
}

/// Read and parse a script file.
pub fn load(path: &Path) -> Result<SessionScript, StudioError> {
    let raw = std::fs::read_to_string(path).map_err(|source| StudioError::Io { path: path.to_path_buf(), source })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Apply a script's inputs and events to `core`, in order.
///
/// Relative background paths resolve against `base_dir`. Returns every
/// action the engine emitted.
pub fn replay(core: &mut EditorCore, script: &SessionScript, base_dir: &Path) -> Result<Vec<Action>, StudioError> {
    let mut actions = Vec::new();

    if let Some(aspect) = script.aspect_ratio {
        actions.extend(core.set_aspect_ratio(aspect)?);
    }
    if let Some(rel) = &script.background {
        let path = base_dir.join(rel);
        let bytes = std::fs::read(&path).map_err(|source| StudioError::Io { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), len = bytes.len(), "background loaded");
        core.set_background(Some(bytes));
    }
    for title in &script.occasions {
        core.toggle_occasion(title);
    }
    for title in &script.languages {
        core.toggle_language(title);
    }
    core.set_label(script.label.as_str());

    for event in &script.events {
        let emitted = match *event {
            ScriptEvent::Viewport { width } => core.set_viewport(width)?,
            ScriptEvent::Aspect { ratio } => core.set_aspect_ratio(ratio)?,
            ScriptEvent::Down { x, y } => core.on_pointer_down(Point { x, y }, Button::Primary),
            ScriptEvent::Move { x, y } => core.on_pointer_move(Point { x, y }),
            ScriptEvent::Up { x, y } => core.on_pointer_up(Point { x, y }, Button::Primary),
            ScriptEvent::Leave => core.on_pointer_leave(),
        };
        tracing::trace!(?event, ?emitted, "event applied");
        actions.extend(emitted);
    }

    tracing::info!(events = script.events.len(), step = core.workflow_step(), "session replayed");
    Ok(actions)
}
