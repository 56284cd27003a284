//! Display scale between logical canvas space and screen space.
//!
//! The design canvas is drawn with one uniform scale factor on both axes so
//! its on-screen aspect ratio always matches the logical one. The factor is
//! never persisted; the editor recomputes it whenever the viewport or the
//! canvas dimensions change.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use crate::error::CanvasError;
use crate::geometry::CanvasSpace;

/// A point in either screen or logical space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Largest uniform scale at which the canvas fits both the height cap and
/// the allotted share of the viewport width.
#[must_use]
pub fn compute_scale(
    canvas_width: f64,
    canvas_height: f64,
    max_display_height: f64,
    viewport_width: f64,
    viewport_fraction: f64,
) -> f64 {
    let height_scale = max_display_height / canvas_height;
    let width_scale = viewport_width * viewport_fraction / canvas_width;
    height_scale.min(width_scale)
}

/// Logical-to-screen scale factor. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale(f64);

impl DisplayScale {
    /// Wrap a raw factor, rejecting zero, negative, and non-finite values.
    pub fn new(factor: f64) -> Result<Self, CanvasError> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(CanvasError::InvalidScale(factor));
        }
        Ok(Self(factor))
    }

    /// Scale for `canvas` drawn inside a viewport `viewport_width` pixels wide.
    pub fn fit(
        canvas: &CanvasSpace,
        max_display_height: f64,
        viewport_width: f64,
        viewport_fraction: f64,
    ) -> Result<Self, CanvasError> {
        if !(viewport_width.is_finite() && viewport_width > 0.0) {
            return Err(CanvasError::InvalidViewport(viewport_width));
        }
        Self::new(compute_scale(
            canvas.width,
            canvas.height,
            max_display_height,
            viewport_width,
            viewport_fraction,
        ))
    }

    /// The raw factor.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Convert a logical point to screen pixels relative to the canvas origin.
    #[must_use]
    pub fn to_screen(self, logical: Point) -> Point {
        Point { x: logical.x * self.0, y: logical.y * self.0 }
    }

    /// Convert a screen point relative to the canvas origin to logical units.
    #[must_use]
    pub fn to_logical(self, screen: Point) -> Point {
        Point { x: screen.x / self.0, y: screen.y / self.0 }
    }

    /// Convert a logical distance to screen pixels.
    #[must_use]
    pub fn logical_dist_to_screen(self, dist: f64) -> f64 {
        dist * self.0
    }

    /// Convert a screen distance to logical units.
    #[must_use]
    pub fn screen_dist_to_logical(self, dist: f64) -> f64 {
        dist / self.0
    }
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self(1.0)
    }
}
