//! Placeholder geometry and interaction engine for the template studio.
//!
//! An operator positions two placeholders, a circular photo slot and a
//! rectangular name slot, over a background image on a fixed-width logical
//! canvas. This crate owns the math behind that: converting between logical,
//! screen, and percentage space, bounding drags and resizes, reconciling
//! positions when the aspect ratio changes, and gating export on a set of
//! validation predicates. The host UI is responsible only for wiring input
//! events to [`engine::EditorCore`] and drawing the [`render::Scene`] it
//! produces.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editing session and input event handlers |
//! | [`store`] | Authoritative placeholder state with clamped mutators |
//! | [`geometry`] | Canvas, aspect ratio, and placeholder value types |
//! | [`scale`] | Logical-to-screen display scale |
//! | [`constraint`] | Drag and resize envelopes and resolution |
//! | [`reconcile`] | Vertical correction after a canvas height change |
//! | [`percent`] | Percentage codec for export |
//! | [`validate`] | Export readiness predicates and checklist |
//! | [`export`] | Export payload and upload form fields |
//! | [`input`] | Gesture state machine |
//! | [`hit`] | Hit-testing placeholders and the resize grip |
//! | [`render`] | Screen-space scene layout and live preview |
//! | [`tags`] | Occasion and language tags |
//! | [`config`] | Editor tunables |
//! | [`consts`] | Shared numeric constants |
//! | [`error`] | Crate error type |

pub mod config;
pub mod consts;
pub mod constraint;
pub mod engine;
pub mod error;
pub mod export;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod percent;
pub mod reconcile;
pub mod render;
pub mod scale;
pub mod store;
pub mod tags;
pub mod validate;
