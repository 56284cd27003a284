//! Authoritative placeholder state for one editing session.
//!
//! The store owns the single image placeholder and the single name
//! placeholder. Every mutation goes through `commit_drag`, `commit_resize`,
//! or `reconcile_height`, and each of them clamps before applying, so the
//! stored geometry never leaves the canvas. Readers get copies.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::constraint::{WidthLimits, clamp_position};
use crate::geometry::{CanvasSpace, Footprint, ImagePlaceholder, NamePlaceholder, PlaceholderKind};
use crate::reconcile::{reconcile_image, reconcile_name};
use crate::scale::Point;

/// Immutable copy of both placeholders at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaceholderSnapshot {
    pub image: ImagePlaceholder,
    pub name: NamePlaceholder,
}

impl PlaceholderSnapshot {
    /// Logical top-left corner of a placeholder.
    #[must_use]
    pub fn origin(&self, kind: PlaceholderKind) -> Point {
        match kind {
            PlaceholderKind::Image => self.image.origin(),
            PlaceholderKind::Name => self.name.origin(),
        }
    }

    /// Logical footprint of a placeholder.
    #[must_use]
    pub fn footprint(&self, kind: PlaceholderKind) -> Footprint {
        match kind {
            PlaceholderKind::Image => self.image.footprint(),
            PlaceholderKind::Name => self.name.footprint(),
        }
    }
}

/// Holds the two placeholders and applies clamped updates.
#[derive(Debug, Clone)]
pub struct PlaceholderStore {
    image: ImagePlaceholder,
    name: NamePlaceholder,
    limits: WidthLimits,
}

impl PlaceholderStore {
    /// Store seeded with the default placeholders.
    #[must_use]
    pub fn new(limits: WidthLimits) -> Self {
        Self { image: ImagePlaceholder::default(), name: NamePlaceholder::default(), limits }
    }

    /// Store seeded with explicit placeholders, clamped into `canvas`.
    #[must_use]
    pub fn with_placeholders(
        image: ImagePlaceholder,
        name: NamePlaceholder,
        limits: WidthLimits,
        canvas: &CanvasSpace,
    ) -> Self {
        let mut store = Self { image, name: NamePlaceholder { width: limits.clamp(name.width), ..name }, limits };
        store.commit_drag(PlaceholderKind::Image, image.origin(), canvas);
        store.commit_drag(PlaceholderKind::Name, name.origin(), canvas);
        store
    }

    #[must_use]
    pub fn image(&self) -> ImagePlaceholder {
        self.image
    }

    #[must_use]
    pub fn name(&self) -> NamePlaceholder {
        self.name
    }

    #[must_use]
    pub fn limits(&self) -> WidthLimits {
        self.limits
    }

    #[must_use]
    pub fn snapshot(&self) -> PlaceholderSnapshot {
        PlaceholderSnapshot { image: self.image, name: self.name }
    }

    /// Move a placeholder to `pos`, clamped into `canvas`. Returns the committed position.
    pub fn commit_drag(&mut self, kind: PlaceholderKind, pos: Point, canvas: &CanvasSpace) -> Point {
        let footprint = self.snapshot().footprint(kind);
        let clamped = clamp_position(pos, footprint, canvas);
        match kind {
            PlaceholderKind::Image => {
                self.image.x = clamped.x;
                self.image.y = clamped.y;
            }
            PlaceholderKind::Name => {
                self.name.x = clamped.x;
                self.name.y = clamped.y;
            }
        }
        tracing::debug!(?kind, x = clamped.x, y = clamped.y, "placeholder moved");
        clamped
    }

    /// Set the name placeholder width, clamped into the configured limits.
    /// Position and height are untouched. Returns the committed width.
    pub fn commit_resize(&mut self, width: f64) -> f64 {
        let clamped = self.limits.clamp(width);
        self.name.width = clamped;
        tracing::debug!(width = clamped, "name placeholder resized");
        clamped
    }

    /// Pull placeholders back inside after the canvas height changed.
    /// Returns `true` if either placeholder moved.
    pub fn reconcile_height(&mut self, canvas: &CanvasSpace) -> bool {
        let image = reconcile_image(self.image, canvas);
        let name = reconcile_name(self.name, canvas);
        let changed = image != self.image || name != self.name;
        if changed {
            tracing::debug!(
                canvas_height = canvas.height,
                image_y = image.y,
                name_y = name.y,
                "placeholders reconciled to new canvas height"
            );
        }
        self.image = image;
        self.name = name;
        changed
    }
}

impl Default for PlaceholderStore {
    fn default() -> Self {
        Self::new(WidthLimits::default())
    }
}
