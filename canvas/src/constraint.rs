//! Drag and resize constraint math.
//!
//! Envelopes are expressed in screen-space pixel offsets relative to where
//! the gesture started, so the host can bound pointer motion directly. Final
//! positions are resolved back in logical space and clamped a second time,
//! independent of the envelope, before anything is committed.

#[cfg(test)]
#[path = "constraint_test.rs"]
mod constraint_test;

use crate::consts::{FALLBACK_RESIZE_WIDTH, MAX_NAME_WIDTH, MIN_NAME_WIDTH};
use crate::error::CanvasError;
use crate::geometry::{CanvasSpace, Footprint};
use crate::scale::{DisplayScale, Point};

/// Screen-space bounds on the cumulative drag offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEnvelope {
    /// Most negative horizontal offset (moves the left edge to `x = 0`).
    pub left: f64,
    /// Most positive horizontal offset (moves the right edge to the canvas edge).
    pub right: f64,
    /// Most negative vertical offset.
    pub top: f64,
    /// Most positive vertical offset.
    pub bottom: f64,
}

impl DragEnvelope {
    /// Clamp a raw screen offset into the envelope.
    ///
    /// When the footprint is larger than the canvas on an axis, `right` can
    /// fall below `left`; the offset then pins to `left`.
    #[must_use]
    pub fn clamp_offset(&self, offset: Point) -> Point {
        Point {
            x: offset.x.min(self.right).max(self.left),
            y: offset.y.min(self.bottom).max(self.top),
        }
    }
}

/// Drag envelope for a placeholder at `origin` with the given footprint.
#[must_use]
pub fn drag_envelope(origin: Point, footprint: Footprint, canvas: &CanvasSpace, scale: DisplayScale) -> DragEnvelope {
    let s = scale.get();
    DragEnvelope {
        left: -origin.x * s,
        right: (canvas.width - origin.x - footprint.width) * s,
        top: -origin.y * s,
        bottom: (canvas.height - origin.y - footprint.height) * s,
    }
}

/// Clamp a logical top-left position so the footprint stays inside the canvas.
#[must_use]
pub fn clamp_position(pos: Point, footprint: Footprint, canvas: &CanvasSpace) -> Point {
    Point {
        x: pos.x.min(canvas.max_x(footprint)).max(0.0),
        y: pos.y.min(canvas.max_y(footprint)).max(0.0),
    }
}

/// Final logical position after dragging `origin` by a cumulative screen offset.
#[must_use]
pub fn resolve_drag(
    origin: Point,
    offset_screen: Point,
    footprint: Footprint,
    canvas: &CanvasSpace,
    scale: DisplayScale,
) -> Point {
    let moved = Point {
        x: origin.x + scale.screen_dist_to_logical(offset_screen.x),
        y: origin.y + scale.screen_dist_to_logical(offset_screen.y),
    };
    clamp_position(moved, footprint, canvas)
}

/// Allowed width range for the name placeholder, in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthLimits {
    min: f64,
    max: f64,
}

impl WidthLimits {
    /// Build a range, rejecting non-positive bounds or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, CanvasError> {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(CanvasError::InvalidWidthRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp a width into the range.
    #[must_use]
    pub fn clamp(&self, width: f64) -> f64 {
        width.clamp(self.min, self.max)
    }
}

impl Default for WidthLimits {
    fn default() -> Self {
        Self { min: MIN_NAME_WIDTH, max: MAX_NAME_WIDTH }
    }
}

/// Screen-space bounds on the horizontal resize-handle offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEnvelope {
    pub left: f64,
    pub right: f64,
}

impl ResizeEnvelope {
    /// Clamp a raw horizontal handle offset into the envelope.
    #[must_use]
    pub fn clamp_offset(&self, dx: f64) -> f64 {
        dx.min(self.right).max(self.left)
    }
}

/// Width the resize gesture starts from. Unset widths fall back to a default.
#[must_use]
pub fn resize_baseline(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        FALLBACK_RESIZE_WIDTH
    }
}

/// Handle offsets that keep the width inside `limits` when starting from `width0`.
#[must_use]
pub fn resize_envelope(width0: f64, limits: WidthLimits, scale: DisplayScale) -> ResizeEnvelope {
    ResizeEnvelope {
        left: scale.logical_dist_to_screen(limits.min() - width0),
        right: scale.logical_dist_to_screen(limits.max() - width0),
    }
}

/// Final width after moving the handle by `dx_screen` pixels from `width0`.
#[must_use]
pub fn resolve_resize(width0: f64, dx_screen: f64, scale: DisplayScale, limits: WidthLimits) -> f64 {
    limits.clamp(width0 + scale.screen_dist_to_logical(dx_screen))
}
