//! Export readiness predicates.
//!
//! Every predicate is a pure function of its arguments. Export is allowed
//! only when all of them hold; [`ExportChecklist`] evaluates the full set
//! once so the host can show which requirements are still unmet.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::export::TemplateInputs;
use crate::geometry::{CanvasSpace, ImagePlaceholder, NamePlaceholder};
use crate::store::PlaceholderSnapshot;

/// One condition gating export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    BackgroundImage,
    OccasionTags,
    LanguageTags,
    TextLabel,
    ImageInBounds,
    NameInBounds,
}

impl Requirement {
    /// All requirements, in display order.
    pub const ALL: [Self; 6] = [
        Self::BackgroundImage,
        Self::OccasionTags,
        Self::LanguageTags,
        Self::TextLabel,
        Self::ImageInBounds,
        Self::NameInBounds,
    ];

    /// Checklist label shown next to the requirement.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::BackgroundImage => "Background image uploaded",
            Self::OccasionTags => "Occasion tags selected",
            Self::LanguageTags => "Language tags selected",
            Self::TextLabel => "Text placeholder provided",
            Self::ImageInBounds => "Image placeholder within canvas",
            Self::NameInBounds => "Name placeholder within canvas",
        }
    }
}

#[must_use]
pub fn has_background_image(inputs: &TemplateInputs) -> bool {
    inputs.background.as_ref().is_some_and(|bytes| !bytes.is_empty())
}

/// At least one occasion and at least one language are selected.
#[must_use]
pub fn has_required_tag_selections(occasions: &[String], languages: &[String]) -> bool {
    !occasions.is_empty() && !languages.is_empty()
}

/// The label has non-whitespace content.
#[must_use]
pub fn has_required_text_input(label: &str) -> bool {
    !label.trim().is_empty()
}

#[must_use]
pub fn image_in_bounds(image: &ImagePlaceholder, canvas: &CanvasSpace) -> bool {
    canvas.contains(image.x, image.y, image.footprint())
}

#[must_use]
pub fn name_in_bounds(name: &NamePlaceholder, canvas: &CanvasSpace) -> bool {
    canvas.contains(name.x, name.y, name.footprint())
}

/// Workflow progress: 1 until a background exists, 2 until both tag
/// categories have a selection, 3 afterwards.
#[must_use]
pub fn workflow_step(inputs: &TemplateInputs) -> u8 {
    if !has_background_image(inputs) {
        1
    } else if !has_required_tag_selections(&inputs.occasions, &inputs.languages) {
        2
    } else {
        3
    }
}

/// Evaluated state of every requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportChecklist {
    entries: Vec<(Requirement, bool)>,
}

impl ExportChecklist {
    /// Evaluate all requirements against the current session state.
    #[must_use]
    pub fn evaluate(inputs: &TemplateInputs, snapshot: &PlaceholderSnapshot, canvas: &CanvasSpace) -> Self {
        let entries = Requirement::ALL
            .into_iter()
            .map(|req| {
                let met = match req {
                    Requirement::BackgroundImage => has_background_image(inputs),
                    Requirement::OccasionTags => !inputs.occasions.is_empty(),
                    Requirement::LanguageTags => !inputs.languages.is_empty(),
                    Requirement::TextLabel => has_required_text_input(&inputs.label),
                    Requirement::ImageInBounds => image_in_bounds(&snapshot.image, canvas),
                    Requirement::NameInBounds => name_in_bounds(&snapshot.name, canvas),
                };
                (req, met)
            })
            .collect();
        Self { entries }
    }

    /// Every requirement with its met flag, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Requirement, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Requirements that are not met.
    #[must_use]
    pub fn failing(&self) -> Vec<Requirement> {
        self.entries.iter().filter(|(_, met)| !met).map(|(req, _)| *req).collect()
    }

    /// Whether export may proceed.
    #[must_use]
    pub fn all_met(&self) -> bool {
        self.entries.iter().all(|(_, met)| *met)
    }
}
