//! Editor tunables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{MAX_DISPLAY_HEIGHT_PX, VIEWPORT_FRACTION};
use crate::constraint::WidthLimits;
use crate::error::CanvasError;

/// Validated editor configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    max_display_height: f64,
    viewport_fraction: f64,
    name_width: WidthLimits,
}

impl EditorConfig {
    /// Build a config, failing on any value that could not come from correct wiring.
    pub fn new(
        max_display_height: f64,
        viewport_fraction: f64,
        min_name_width: f64,
        max_name_width: f64,
    ) -> Result<Self, CanvasError> {
        let valid_display = max_display_height.is_finite()
            && max_display_height > 0.0
            && viewport_fraction.is_finite()
            && viewport_fraction > 0.0;
        if !valid_display {
            return Err(CanvasError::InvalidDisplayLimits { max_height: max_display_height, fraction: viewport_fraction });
        }
        let name_width = WidthLimits::new(min_name_width, max_name_width)?;
        Ok(Self { max_display_height, viewport_fraction, name_width })
    }

    #[must_use]
    pub fn max_display_height(&self) -> f64 {
        self.max_display_height
    }

    #[must_use]
    pub fn viewport_fraction(&self) -> f64 {
        self.viewport_fraction
    }

    #[must_use]
    pub fn name_width(&self) -> WidthLimits {
        self.name_width
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_display_height: MAX_DISPLAY_HEIGHT_PX,
            viewport_fraction: VIEWPORT_FRACTION,
            name_width: WidthLimits::default(),
        }
    }
}
