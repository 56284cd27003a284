//! Rendering: lays out the editor scene in screen space.
//!
//! This module produces a backend-neutral display list. It receives
//! read-only snapshots of placeholder state and the display scale and
//! produces rectangles in screen pixels relative to the canvas origin; it
//! does not mutate any application state. The host draws the list with
//! whatever toolkit it uses.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{HANDLE_OVERHANG_PX, HANDLE_WIDTH_PX, PREVIEW_WIDTH_PX};
use crate::geometry::{AspectRatio, CanvasSpace, PlaceholderKind};
use crate::input::Preview;
use crate::scale::{DisplayScale, Point};
use crate::store::PlaceholderSnapshot;

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ScreenRect {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether `pt` lies inside, edges inclusive.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }
}

/// One placeholder as drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderView {
    pub kind: PlaceholderKind,
    /// Bounding box; the image placeholder is the circle inscribed in it.
    pub rect: ScreenRect,
    pub label: &'static str,
    /// Drawn with the "being dragged" highlight.
    pub active: bool,
}

/// Everything needed to draw the design canvas for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Canvas frame at its on-screen size.
    pub frame: ScreenRect,
    /// Dimensions caption shown above the frame.
    pub caption: String,
    /// When false the host shows the "upload a background image" hint.
    pub has_background: bool,
    pub image: PlaceholderView,
    pub name: PlaceholderView,
    /// Resize grip on the name placeholder's right edge.
    pub handle: ScreenRect,
}

/// Screen rect of a placeholder at its committed position.
#[must_use]
pub fn placeholder_rect(kind: PlaceholderKind, snapshot: &PlaceholderSnapshot, scale: DisplayScale) -> ScreenRect {
    let origin = scale.to_screen(snapshot.origin(kind));
    let footprint = snapshot.footprint(kind);
    ScreenRect {
        x: origin.x,
        y: origin.y,
        width: scale.logical_dist_to_screen(footprint.width),
        height: scale.logical_dist_to_screen(footprint.height),
    }
}

/// Resize grip for a name placeholder drawn at `name_rect`.
///
/// The grip keeps a usable size when the canvas is drawn small: it is at
/// least 16 px wide and hangs at least 8 px past the right edge.
#[must_use]
pub fn handle_rect(name_rect: &ScreenRect, scale: DisplayScale) -> ScreenRect {
    let overhang = HANDLE_OVERHANG_PX.max(HANDLE_OVERHANG_PX / scale.get());
    let width = HANDLE_WIDTH_PX.max(HANDLE_WIDTH_PX / scale.get());
    let right = name_rect.right() + overhang;
    ScreenRect { x: right - width, y: name_rect.y, width, height: name_rect.height }
}

/// Snapshot with an in-flight preview applied on top. The store is untouched.
#[must_use]
pub fn apply_preview(snapshot: &PlaceholderSnapshot, preview: Option<Preview>) -> PlaceholderSnapshot {
    let mut shown = *snapshot;
    match preview {
        Some(Preview::Move { kind: PlaceholderKind::Image, pos }) => {
            shown.image.x = pos.x;
            shown.image.y = pos.y;
        }
        Some(Preview::Move { kind: PlaceholderKind::Name, pos }) => {
            shown.name.x = pos.x;
            shown.name.y = pos.y;
        }
        Some(Preview::Resize { width }) => shown.name.width = width,
        None => {}
    }
    shown
}

/// Lay out the editor scene.
#[must_use]
pub fn build_scene(
    snapshot: &PlaceholderSnapshot,
    canvas: &CanvasSpace,
    aspect: AspectRatio,
    scale: DisplayScale,
    preview: Option<Preview>,
    has_background: bool,
) -> Scene {
    let shown = apply_preview(snapshot, preview);
    let active = |kind: PlaceholderKind| matches!(preview, Some(Preview::Move { kind: k, .. }) if k == kind);
    let image_rect = placeholder_rect(PlaceholderKind::Image, &shown, scale);
    let name_rect = placeholder_rect(PlaceholderKind::Name, &shown, scale);
    Scene {
        frame: ScreenRect {
            x: 0.0,
            y: 0.0,
            width: scale.logical_dist_to_screen(canvas.width),
            height: scale.logical_dist_to_screen(canvas.height),
        },
        caption: canvas.caption(aspect),
        has_background,
        image: PlaceholderView {
            kind: PlaceholderKind::Image,
            rect: image_rect,
            label: PlaceholderKind::Image.label(),
            active: active(PlaceholderKind::Image),
        },
        name: PlaceholderView {
            kind: PlaceholderKind::Name,
            rect: name_rect,
            label: PlaceholderKind::Name.label(),
            active: active(PlaceholderKind::Name) || matches!(preview, Some(Preview::Resize { .. })),
        },
        handle: handle_rect(&name_rect, scale),
    }
}

/// Live preview thumbnail layout at a fixed width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    pub scale: f64,
    pub frame: ScreenRect,
    pub image: ScreenRect,
    pub name: ScreenRect,
}

/// Project the placeholders into the fixed-width live preview.
#[must_use]
pub fn preview_layout(snapshot: &PlaceholderSnapshot, canvas: &CanvasSpace) -> PreviewLayout {
    let s = PREVIEW_WIDTH_PX / canvas.width;
    let project = |kind: PlaceholderKind| {
        let o = snapshot.origin(kind);
        let f = snapshot.footprint(kind);
        ScreenRect { x: o.x * s, y: o.y * s, width: f.width * s, height: f.height * s }
    };
    PreviewLayout {
        scale: s,
        frame: ScreenRect { x: 0.0, y: 0.0, width: PREVIEW_WIDTH_PX, height: canvas.height * s },
        image: project(PlaceholderKind::Image),
        name: project(PlaceholderKind::Name),
    }
}

/// Rounded logical coordinates for the status readout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionReadout {
    pub image: Point,
    pub name: Point,
    pub name_width: f64,
}

impl PositionReadout {
    #[must_use]
    pub fn from_snapshot(snapshot: &PlaceholderSnapshot) -> Self {
        Self {
            image: Point::new(snapshot.image.x.round(), snapshot.image.y.round()),
            name: Point::new(snapshot.name.x.round(), snapshot.name.y.round()),
            name_width: snapshot.name.width.round(),
        }
    }
}
