#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::PlaceholderKind;
use crate::render::{handle_rect, placeholder_rect};
use crate::scale::{DisplayScale, Point};
use crate::store::PlaceholderSnapshot;

/// Which part of the editor was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// The body of a placeholder; pressing here starts a drag.
    Body(PlaceholderKind),
    /// The name placeholder's resize grip.
    ResizeHandle,
}

/// Test what is under `screen_pt` (pixels relative to the canvas origin).
///
/// The resize grip wins over bodies, and the name placeholder is drawn
/// above the image placeholder so it wins where they overlap. The image
/// placeholder only counts inside its circle.
#[must_use]
pub fn hit_test(screen_pt: Point, snapshot: &PlaceholderSnapshot, scale: DisplayScale) -> Option<HitPart> {
    let name = placeholder_rect(PlaceholderKind::Name, snapshot, scale);
    if handle_rect(&name, scale).contains(screen_pt) {
        return Some(HitPart::ResizeHandle);
    }
    if name.contains(screen_pt) {
        return Some(HitPart::Body(PlaceholderKind::Name));
    }

    let image = placeholder_rect(PlaceholderKind::Image, snapshot, scale);
    let r = image.width * 0.5;
    let dx = screen_pt.x - (image.x + r);
    let dy = screen_pt.y - (image.y + r);
    if dx * dx + dy * dy <= r * r {
        return Some(HitPart::Body(PlaceholderKind::Image));
    }
    None
}
