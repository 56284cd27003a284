//! Gesture state machine for dragging and resizing placeholders.
//!
//! A gesture runs in three phases. `begin` snapshots the baseline (logical
//! origin or width, the scale in effect, and the screen envelope). `update`
//! turns the current pointer into a transient preview without touching the
//! store. `end` resolves the final logical value, clamped, for the caller
//! to commit. Cancelling simply drops the state, which leaves the store
//! exactly as a release with zero offset would.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::constraint::{
    DragEnvelope, ResizeEnvelope, WidthLimits, drag_envelope, resize_baseline, resize_envelope, resolve_drag,
    resolve_resize,
};
use crate::error::CanvasError;
use crate::geometry::{CanvasSpace, Footprint, PlaceholderKind};
use crate::scale::{DisplayScale, Point};
use crate::store::PlaceholderSnapshot;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger touch).
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Transient value shown while a gesture is in flight. Never committed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    /// Where the dragged placeholder would land, in logical units.
    Move { kind: PlaceholderKind, pos: Point },
    /// Width the name placeholder would take, in logical units.
    Resize { width: f64 },
}

/// Final value of a completed gesture, already clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Commit {
    Move { kind: PlaceholderKind, pos: Point },
    Resize { width: f64 },
}

/// The active gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A placeholder body is being dragged.
    DraggingPlaceholder {
        kind: PlaceholderKind,
        /// Logical origin when the drag began.
        origin: Point,
        footprint: Footprint,
        /// Screen-space bounds on `offset`, fixed at gesture start.
        envelope: DragEnvelope,
        /// Scale in effect when the envelope was computed.
        scale: DisplayScale,
        /// Pointer position at press, in screen pixels.
        start_screen: Point,
        /// Envelope-clamped cumulative offset from `start_screen`.
        offset: Point,
    },
    /// The name placeholder's resize handle is being dragged.
    ResizingName {
        /// Width when the resize began.
        width0: f64,
        envelope: ResizeEnvelope,
        limits: WidthLimits,
        scale: DisplayScale,
        start_screen: Point,
        /// Envelope-clamped horizontal offset from `start_screen`.
        dx: f64,
    },
}

impl InputState {
    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Start dragging `kind` from its committed position.
    pub fn begin_drag(
        &mut self,
        kind: PlaceholderKind,
        snapshot: &PlaceholderSnapshot,
        canvas: &CanvasSpace,
        scale: DisplayScale,
        start_screen: Point,
    ) -> Result<(), CanvasError> {
        if self.is_active() {
            return Err(CanvasError::GestureInProgress);
        }
        let origin = snapshot.origin(kind);
        let footprint = snapshot.footprint(kind);
        *self = Self::DraggingPlaceholder {
            kind,
            origin,
            footprint,
            envelope: drag_envelope(origin, footprint, canvas, scale),
            scale,
            start_screen,
            offset: Point::default(),
        };
        Ok(())
    }

    /// Start resizing the name placeholder from its committed width.
    pub fn begin_resize(
        &mut self,
        snapshot: &PlaceholderSnapshot,
        limits: WidthLimits,
        scale: DisplayScale,
        start_screen: Point,
    ) -> Result<(), CanvasError> {
        if self.is_active() {
            return Err(CanvasError::GestureInProgress);
        }
        let width0 = resize_baseline(snapshot.name.width);
        *self = Self::ResizingName {
            width0,
            envelope: resize_envelope(width0, limits, scale),
            limits,
            scale,
            start_screen,
            dx: 0.0,
        };
        Ok(())
    }

    /// Track the pointer and return the transient preview.
    pub fn update(&mut self, pointer: Point, canvas: &CanvasSpace) -> Result<Preview, CanvasError> {
        match self {
            Self::Idle => Err(CanvasError::NoActiveGesture),
            Self::DraggingPlaceholder { kind, origin, footprint, envelope, scale, start_screen, offset } => {
                *offset = envelope.clamp_offset(Point::new(pointer.x - start_screen.x, pointer.y - start_screen.y));
                let pos = resolve_drag(*origin, *offset, *footprint, canvas, *scale);
                Ok(Preview::Move { kind: *kind, pos })
            }
            Self::ResizingName { width0, envelope, limits, scale, start_screen, dx } => {
                *dx = envelope.clamp_offset(pointer.x - start_screen.x);
                Ok(Preview::Resize { width: resolve_resize(*width0, *dx, *scale, *limits) })
            }
        }
    }

    /// Finish the gesture at `pointer` and return the clamped value to commit.
    /// The state returns to `Idle`.
    pub fn end(&mut self, pointer: Point, canvas: &CanvasSpace) -> Result<Commit, CanvasError> {
        let preview = self.update(pointer, canvas)?;
        *self = Self::Idle;
        Ok(match preview {
            Preview::Move { kind, pos } => Commit::Move { kind, pos },
            Preview::Resize { width } => Commit::Resize { width },
        })
    }

    /// Abandon the gesture without producing a commit.
    pub fn cancel(&mut self) -> bool {
        let was_active = self.is_active();
        *self = Self::Idle;
        was_active
    }
}
