//! Error type for the canvas crate.
//!
//! Geometry math itself never fails: positions that would leave the canvas
//! are clamped, not rejected. The variants here cover configuration defects
//! caught at construction time and protocol misuse by the host.

use crate::validate::Requirement;

/// Errors produced by canvas construction, gesture protocol, and export.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CanvasError {
    /// Canvas dimensions must be finite and strictly positive.
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },

    /// Display scale must be finite and strictly positive.
    #[error("invalid display scale {0}")]
    InvalidScale(f64),

    /// Name width limits must be positive with `min <= max`.
    #[error("invalid name width range [{min}, {max}]")]
    InvalidWidthRange { min: f64, max: f64 },

    /// Display limits (max height, viewport fraction) must be positive.
    #[error("invalid display limits: max height {max_height}, viewport fraction {fraction}")]
    InvalidDisplayLimits { max_height: f64, fraction: f64 },

    /// Viewport width must be finite and strictly positive.
    #[error("invalid viewport width {0}")]
    InvalidViewport(f64),

    /// Export was requested while one or more requirements are unmet.
    #[error("export not ready: {}", format_requirements(.0))]
    ExportNotReady(Vec<Requirement>),

    /// A gesture update or end arrived with no gesture in progress.
    #[error("no gesture in progress")]
    NoActiveGesture,

    /// A gesture began while another was still in progress.
    #[error("a gesture is already in progress")]
    GestureInProgress,
}

fn format_requirements(reqs: &[Requirement]) -> String {
    reqs.iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(", ")
}
