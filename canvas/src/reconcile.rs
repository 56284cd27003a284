//! Vertical reconciliation after the canvas height changes.
//!
//! Switching aspect ratio changes only the canvas height; the width is the
//! same for both ratios. A placeholder whose bottom edge would fall below
//! the new height is pulled up until it fits. Nothing else moves: `x` and
//! footprint sizes are left alone, and an in-bounds placeholder is never
//! perturbed.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use crate::geometry::{CanvasSpace, ImagePlaceholder, NamePlaceholder};

/// Reconciled `y` for a footprint of `footprint_height` on a canvas `canvas_height` tall.
#[must_use]
pub fn reconcile_y(y: f64, footprint_height: f64, canvas_height: f64) -> f64 {
    let max_y = canvas_height - footprint_height;
    if y > max_y { max_y.max(0.0) } else { y }
}

#[must_use]
pub fn reconcile_image(image: ImagePlaceholder, canvas: &CanvasSpace) -> ImagePlaceholder {
    ImagePlaceholder { y: reconcile_y(image.y, image.diameter, canvas.height), ..image }
}

#[must_use]
pub fn reconcile_name(name: NamePlaceholder, canvas: &CanvasSpace) -> NamePlaceholder {
    NamePlaceholder { y: reconcile_y(name.y, name.height, canvas.height), ..name }
}
