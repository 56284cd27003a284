//! Shared numeric constants for the canvas crate.

// ── Logical canvas ──────────────────────────────────────────────

/// Logical canvas width. Identical for every aspect ratio.
pub const CANVAS_WIDTH: f64 = 1080.0;

/// Logical canvas height for the 3:4 portrait ratio.
pub const CANVAS_HEIGHT_3X4: f64 = 1440.0;

/// Logical canvas height for the 9:16 portrait ratio.
pub const CANVAS_HEIGHT_9X16: f64 = 1920.0;

// ── Display ─────────────────────────────────────────────────────

/// Maximum on-screen height of the design canvas, in screen pixels.
pub const MAX_DISPLAY_HEIGHT_PX: f64 = 600.0;

/// Fraction of the viewport width the design canvas may occupy.
pub const VIEWPORT_FRACTION: f64 = 0.5;

/// Fixed on-screen width of the live preview, in screen pixels.
pub const PREVIEW_WIDTH_PX: f64 = 270.0;

// ── Name placeholder width limits ───────────────────────────────

/// Narrowest name placeholder the resize handle allows.
pub const MIN_NAME_WIDTH: f64 = 200.0;

/// Widest name placeholder the resize handle allows.
pub const MAX_NAME_WIDTH: f64 = 800.0;

/// Resize baseline used when the name placeholder has no usable width.
pub const FALLBACK_RESIZE_WIDTH: f64 = 400.0;

// ── Default placeholders ────────────────────────────────────────

/// Diameter of the image placeholder at session start.
pub const DEFAULT_IMAGE_DIAMETER: f64 = 250.0;

/// Top edge of the image placeholder at session start.
pub const DEFAULT_IMAGE_Y: f64 = 200.0;

/// Width of the name placeholder at session start.
pub const DEFAULT_NAME_WIDTH: f64 = 600.0;

/// Height of the name placeholder. Fixed for the session.
pub const DEFAULT_NAME_HEIGHT: f64 = 100.0;

/// Top edge of the name placeholder at session start.
pub const DEFAULT_NAME_Y: f64 = 550.0;

// ── Resize handle ───────────────────────────────────────────────

/// Minimum screen width of the resize handle hit area.
pub const HANDLE_WIDTH_PX: f64 = 16.0;

/// How far the handle hangs past the right edge of the name placeholder.
pub const HANDLE_OVERHANG_PX: f64 = 8.0;

// ── Percentages ─────────────────────────────────────────────────

/// Scale factor from a unit fraction to a percentage.
pub const PERCENT: f64 = 100.0;
