//! Value types for the logical canvas and the two placeholders.
//!
//! All coordinates here are in logical canvas space: a fixed 1080-unit-wide
//! coordinate system independent of how large the canvas is drawn on screen.
//! Both placeholders are anchored at their top-left corner.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CANVAS_HEIGHT_3X4, CANVAS_HEIGHT_9X16, CANVAS_WIDTH, DEFAULT_IMAGE_DIAMETER, DEFAULT_IMAGE_Y, DEFAULT_NAME_HEIGHT,
    DEFAULT_NAME_WIDTH, DEFAULT_NAME_Y,
};
use crate::error::CanvasError;
use crate::scale::Point;

/// The two supported portrait aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 3:4 portrait, 1080×1440.
    #[default]
    #[serde(rename = "3:4")]
    Portrait3x4,
    /// 9:16 portrait, 1080×1920.
    #[serde(rename = "9:16")]
    Portrait9x16,
}

impl AspectRatio {
    /// Logical canvas height for this ratio.
    #[must_use]
    pub fn canvas_height(self) -> f64 {
        match self {
            Self::Portrait3x4 => CANVAS_HEIGHT_3X4,
            Self::Portrait9x16 => CANVAS_HEIGHT_9X16,
        }
    }

    /// Width-over-height ratio handed to the background image cropper.
    #[must_use]
    pub fn crop_ratio(self) -> f64 {
        match self {
            Self::Portrait3x4 => 3.0 / 4.0,
            Self::Portrait9x16 => 9.0 / 16.0,
        }
    }

    /// Wire label, `"3:4"` or `"9:16"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait3x4 => "3:4",
            Self::Portrait9x16 => "9:16",
        }
    }

    /// Parse a wire label. Returns `None` for anything but `"3:4"` / `"9:16"`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "3:4" => Some(Self::Portrait3x4),
            "9:16" => Some(Self::Portrait9x16),
            _ => None,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSpace {
    pub width: f64,
    pub height: f64,
}

impl CanvasSpace {
    /// Build a canvas, rejecting non-finite or non-positive dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, CanvasError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CanvasError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    /// The canvas for one of the two fixed aspect ratios.
    #[must_use]
    pub fn for_aspect(aspect: AspectRatio) -> Self {
        Self { width: CANVAS_WIDTH, height: aspect.canvas_height() }
    }

    /// Largest legal `x` for a footprint; zero when the footprint is wider than the canvas.
    #[must_use]
    pub fn max_x(&self, footprint: Footprint) -> f64 {
        (self.width - footprint.width).max(0.0)
    }

    /// Largest legal `y` for a footprint; zero when the footprint is taller than the canvas.
    #[must_use]
    pub fn max_y(&self, footprint: Footprint) -> f64 {
        (self.height - footprint.height).max(0.0)
    }

    /// Whether a footprint anchored at `(x, y)` lies entirely inside the canvas.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64, footprint: Footprint) -> bool {
        x >= 0.0 && y >= 0.0 && x + footprint.width <= self.width && y + footprint.height <= self.height
    }

    /// Caption shown above the design canvas, e.g. `1080 × 1440px (3:4 portrait)`.
    #[must_use]
    pub fn caption(&self, aspect: AspectRatio) -> String {
        format!("{} × {}px ({aspect} portrait)", self.width, self.height)
    }
}

impl Default for CanvasSpace {
    fn default() -> Self {
        Self::for_aspect(AspectRatio::default())
    }
}

/// Effective width/height used for containment math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

/// Which of the two placeholders an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    /// The circular user photo slot.
    Image,
    /// The rectangular user name slot.
    Name,
}

impl PlaceholderKind {
    /// Label drawn inside the placeholder.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "User Photo",
            Self::Name => "User Name",
        }
    }
}

/// Circular photo slot anchored at its bounding square's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePlaceholder {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
}

impl ImagePlaceholder {
    /// Top-left corner of the bounding square.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn footprint(&self) -> Footprint {
        Footprint { width: self.diameter, height: self.diameter }
    }

    /// Center of the circle in logical space.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        let r = self.diameter * 0.5;
        (self.x + r, self.y + r)
    }
}

impl Default for ImagePlaceholder {
    /// Centered horizontally at a fixed distance from the top.
    fn default() -> Self {
        Self {
            x: (CANVAS_WIDTH - DEFAULT_IMAGE_DIAMETER) / 2.0,
            y: DEFAULT_IMAGE_Y,
            diameter: DEFAULT_IMAGE_DIAMETER,
        }
    }
}

/// Rectangular name slot. Height is fixed once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NamePlaceholder {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl NamePlaceholder {
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn footprint(&self) -> Footprint {
        Footprint { width: self.width, height: self.height }
    }
}

impl Default for NamePlaceholder {
    /// Centered horizontally below the default image placeholder.
    fn default() -> Self {
        Self {
            x: (CANVAS_WIDTH - DEFAULT_NAME_WIDTH) / 2.0,
            y: DEFAULT_NAME_Y,
            width: DEFAULT_NAME_WIDTH,
            height: DEFAULT_NAME_HEIGHT,
        }
    }
}
