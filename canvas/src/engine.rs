//! The editing session: placeholder store, canvas, display scale, and the
//! active gesture, driven by host input events.
//!
//! Everything here runs synchronously on the caller's event callbacks. Each
//! handler returns the [`Action`]s the host should carry out (redraw,
//! cursor changes) along with a record of what was committed.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::EditorConfig;
use crate::error::CanvasError;
use crate::export::{ExportPayload, TemplateInputs, TemplateUpload};
use crate::geometry::{AspectRatio, CanvasSpace, PlaceholderKind};
use crate::hit::{HitPart, hit_test};
use crate::input::{Button, Commit, InputState, Preview};
use crate::render::{PositionReadout, PreviewLayout, Scene, build_scene, preview_layout};
use crate::scale::{DisplayScale, Point};
use crate::store::{PlaceholderSnapshot, PlaceholderStore};
use crate::tags::{OccasionTag, toggle_tag};
use crate::validate::{ExportChecklist, workflow_step};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A placeholder's committed position changed.
    PlaceholderMoved { kind: PlaceholderKind, pos: Point },
    /// The name placeholder's committed width changed.
    NameResized { width: f64 },
    /// Aspect ratio switch pulled one or both placeholders back inside.
    PlaceholdersReconciled,
    /// A gesture was abandoned without committing.
    GestureCancelled,
    SetCursor(&'static str),
    RenderNeeded,
}

/// Editor state for one template design session.
#[derive(Debug, Clone)]
pub struct EditorCore {
    config: EditorConfig,
    aspect: AspectRatio,
    canvas: CanvasSpace,
    scale: DisplayScale,
    viewport_width: f64,
    store: PlaceholderStore,
    input: InputState,
    preview: Option<Preview>,
    inputs: TemplateInputs,
}

impl EditorCore {
    /// Start a session with default placeholders on a 3:4 canvas.
    pub fn new(config: EditorConfig, viewport_width: f64) -> Result<Self, CanvasError> {
        let aspect = AspectRatio::default();
        let canvas = CanvasSpace::for_aspect(aspect);
        let scale =
            DisplayScale::fit(&canvas, config.max_display_height(), viewport_width, config.viewport_fraction())?;
        Ok(Self {
            config,
            aspect,
            canvas,
            scale,
            viewport_width,
            store: PlaceholderStore::new(config.name_width()),
            input: InputState::Idle,
            preview: None,
            inputs: TemplateInputs::default(),
        })
    }

    fn refit_scale(&mut self) -> Result<(), CanvasError> {
        self.scale = DisplayScale::fit(
            &self.canvas,
            self.config.max_display_height(),
            self.viewport_width,
            self.config.viewport_fraction(),
        )?;
        tracing::debug!(scale = self.scale.get(), viewport_width = self.viewport_width, "display scale recomputed");
        Ok(())
    }

    /// Drop any in-flight gesture. Its envelope was computed for a scale or
    /// canvas that no longer applies.
    fn abandon_gesture(&mut self, actions: &mut Vec<Action>) {
        if self.input.cancel() {
            self.preview = None;
            actions.push(Action::GestureCancelled);
        }
    }

    // --- Dimension changes ---

    /// Update the viewport width and recompute the display scale.
    pub fn set_viewport(&mut self, width: f64) -> Result<Vec<Action>, CanvasError> {
        let previous = self.viewport_width;
        self.viewport_width = width;
        if let Err(e) = self.refit_scale() {
            self.viewport_width = previous;
            return Err(e);
        }
        let mut actions = Vec::new();
        self.abandon_gesture(&mut actions);
        actions.push(Action::RenderNeeded);
        Ok(actions)
    }

    /// Switch aspect ratio: swap canvas height, recompute scale, then
    /// reconcile placeholder positions against the new height.
    pub fn set_aspect_ratio(&mut self, aspect: AspectRatio) -> Result<Vec<Action>, CanvasError> {
        let mut actions = Vec::new();
        if aspect == self.aspect {
            return Ok(actions);
        }
        let previous = (self.aspect, self.canvas);
        self.aspect = aspect;
        self.canvas = CanvasSpace::for_aspect(aspect);
        if let Err(e) = self.refit_scale() {
            (self.aspect, self.canvas) = previous;
            return Err(e);
        }
        self.abandon_gesture(&mut actions);
        if self.store.reconcile_height(&self.canvas) {
            actions.push(Action::PlaceholdersReconciled);
        }
        tracing::debug!(%aspect, height = self.canvas.height, "aspect ratio changed");
        actions.push(Action::RenderNeeded);
        Ok(actions)
    }

    // --- Input events ---

    /// Pointer pressed at `screen_pt` (pixels relative to the canvas origin).
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input.is_active() {
            return Vec::new();
        }
        let snapshot = self.store.snapshot();
        let began = match hit_test(screen_pt, &snapshot, self.scale) {
            Some(HitPart::Body(kind)) => self
                .input
                .begin_drag(kind, &snapshot, &self.canvas, self.scale, screen_pt)
                .map(|()| "grabbing"),
            Some(HitPart::ResizeHandle) => self
                .input
                .begin_resize(&snapshot, self.store.limits(), self.scale, screen_pt)
                .map(|()| "ew-resize"),
            None => return Vec::new(),
        };
        match began {
            Ok(cursor) => vec![Action::SetCursor(cursor), Action::RenderNeeded],
            Err(e) => {
                tracing::warn!(error = %e, "gesture not started");
                Vec::new()
            }
        }
    }

    /// Pointer moved. Updates the transient preview during a gesture, or
    /// the hover cursor otherwise.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if !self.input.is_active() {
            let cursor = match hit_test(screen_pt, &self.store.snapshot(), self.scale) {
                Some(HitPart::Body(_)) => "grab",
                Some(HitPart::ResizeHandle) => "ew-resize",
                None => "default",
            };
            return vec![Action::SetCursor(cursor)];
        }
        match self.input.update(screen_pt, &self.canvas) {
            Ok(preview) => {
                self.preview = Some(preview);
                vec![Action::RenderNeeded]
            }
            Err(e) => {
                tracing::warn!(error = %e, "gesture update dropped");
                Vec::new()
            }
        }
    }

    /// Pointer released. Commits the gesture's clamped result to the store.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || !self.input.is_active() {
            return Vec::new();
        }
        self.preview = None;
        let commit = match self.input.end(screen_pt, &self.canvas) {
            Ok(commit) => commit,
            Err(e) => {
                tracing::warn!(error = %e, "gesture end dropped");
                return Vec::new();
            }
        };
        let committed = match commit {
            Commit::Move { kind, pos } => {
                let pos = self.store.commit_drag(kind, pos, &self.canvas);
                Action::PlaceholderMoved { kind, pos }
            }
            Commit::Resize { width } => Action::NameResized { width: self.store.commit_resize(width) },
        };
        vec![committed, Action::SetCursor("grab"), Action::RenderNeeded]
    }

    /// Pointer left the surface. Any gesture is abandoned without committing.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        self.abandon_gesture(&mut actions);
        if !actions.is_empty() {
            actions.push(Action::SetCursor("default"));
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Form inputs ---

    pub fn set_background(&mut self, bytes: Option<Vec<u8>>) {
        self.inputs.background = bytes;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.inputs.label = label.into();
    }

    pub fn toggle_occasion(&mut self, title: &str) {
        toggle_tag(&mut self.inputs.occasions, title);
    }

    pub fn toggle_language(&mut self, title: &str) {
        toggle_tag(&mut self.inputs.languages, title);
    }

    /// Replace the occasion catalog, e.g. once the remote one has loaded.
    pub fn set_catalog(&mut self, catalog: Vec<OccasionTag>) {
        self.inputs.catalog = catalog;
    }

    // --- Queries ---

    #[must_use]
    pub fn snapshot(&self) -> PlaceholderSnapshot {
        self.store.snapshot()
    }

    #[must_use]
    pub fn scale(&self) -> DisplayScale {
        self.scale
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSpace {
        self.canvas
    }

    #[must_use]
    pub fn aspect(&self) -> AspectRatio {
        self.aspect
    }

    #[must_use]
    pub fn inputs(&self) -> &TemplateInputs {
        &self.inputs
    }

    /// Whether a drag or resize is in flight.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.input.is_active()
    }

    /// The current transient preview, if a gesture has moved.
    #[must_use]
    pub fn preview(&self) -> Option<Preview> {
        self.preview
    }

    /// Scene for the design canvas, including any in-flight preview.
    #[must_use]
    pub fn scene(&self) -> Scene {
        build_scene(
            &self.store.snapshot(),
            &self.canvas,
            self.aspect,
            self.scale,
            self.preview,
            self.inputs.background.is_some(),
        )
    }

    /// Layout of the fixed-width live preview, from committed state.
    #[must_use]
    pub fn preview_layout(&self) -> PreviewLayout {
        preview_layout(&self.store.snapshot(), &self.canvas)
    }

    #[must_use]
    pub fn readout(&self) -> PositionReadout {
        PositionReadout::from_snapshot(&self.store.snapshot())
    }

    #[must_use]
    pub fn workflow_step(&self) -> u8 {
        workflow_step(&self.inputs)
    }

    #[must_use]
    pub fn checklist(&self) -> ExportChecklist {
        ExportChecklist::evaluate(&self.inputs, &self.store.snapshot(), &self.canvas)
    }

    /// Percentage geometry for the committed placeholders, regardless of readiness.
    #[must_use]
    pub fn payload(&self) -> ExportPayload {
        ExportPayload::from_snapshot(self.aspect, &self.store.snapshot(), &self.canvas)
    }

    /// Validate and assemble the upload.
    pub fn export(&self) -> Result<TemplateUpload, CanvasError> {
        let result = TemplateUpload::build(self.aspect, &self.inputs, &self.store.snapshot(), &self.canvas);
        if let Err(CanvasError::ExportNotReady(failing)) = &result {
            tracing::warn!(?failing, "export blocked");
        }
        result
    }
}
