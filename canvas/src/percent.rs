//! Conversion between logical geometry and canvas-relative percentages.
//!
//! Horizontal quantities (`x`, `width`) are relative to the canvas width and
//! vertical ones (`y`, `height`) to the canvas height. The image placeholder
//! exports its single diameter against both axes, so on a non-square canvas
//! its percentage box is not square; a renderer rebuilds the circle from the
//! horizontal percentage against its target width.

#[cfg(test)]
#[path = "percent_test.rs"]
mod percent_test;

use serde::{Deserialize, Serialize};

use crate::consts::PERCENT;
use crate::geometry::{CanvasSpace, Footprint, ImagePlaceholder, NamePlaceholder};
use crate::scale::Point;

/// Resolution-independent placeholder box, every field in `[0, 100]` for
/// an in-bounds placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentageGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Percentages for a footprint anchored at `origin`.
#[must_use]
pub fn to_percentage(origin: Point, footprint: Footprint, canvas: &CanvasSpace) -> PercentageGeometry {
    PercentageGeometry {
        x: origin.x / canvas.width * PERCENT,
        y: origin.y / canvas.height * PERCENT,
        width: footprint.width / canvas.width * PERCENT,
        height: footprint.height / canvas.height * PERCENT,
    }
}

/// Logical origin and footprint for a percentage box.
#[must_use]
pub fn from_percentage(pct: &PercentageGeometry, canvas: &CanvasSpace) -> (Point, Footprint) {
    let origin = Point {
        x: pct.x / PERCENT * canvas.width,
        y: pct.y / PERCENT * canvas.height,
    };
    let footprint = Footprint {
        width: pct.width / PERCENT * canvas.width,
        height: pct.height / PERCENT * canvas.height,
    };
    (origin, footprint)
}

impl ImagePlaceholder {
    #[must_use]
    pub fn to_percentage(&self, canvas: &CanvasSpace) -> PercentageGeometry {
        to_percentage(self.origin(), self.footprint(), canvas)
    }

    /// Rebuild from percentages, taking the diameter from the horizontal extent.
    #[must_use]
    pub fn from_percentage(pct: &PercentageGeometry, canvas: &CanvasSpace) -> Self {
        let (origin, footprint) = from_percentage(pct, canvas);
        Self { x: origin.x, y: origin.y, diameter: footprint.width }
    }
}

impl NamePlaceholder {
    #[must_use]
    pub fn to_percentage(&self, canvas: &CanvasSpace) -> PercentageGeometry {
        to_percentage(self.origin(), self.footprint(), canvas)
    }

    #[must_use]
    pub fn from_percentage(pct: &PercentageGeometry, canvas: &CanvasSpace) -> Self {
        let (origin, footprint) = from_percentage(pct, canvas);
        Self { x: origin.x, y: origin.y, width: footprint.width, height: footprint.height }
    }
}
