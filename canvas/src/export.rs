//! Export payload for the template upload.
//!
//! The geometry core produces the two percentage blocks and gathers the
//! side-channel fields the uploader needs. It never performs the upload;
//! [`TemplateUpload::form_fields`] lists the multipart fields in the order
//! the upload service expects them.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::{Deserialize, Serialize};

use crate::error::CanvasError;
use crate::geometry::{AspectRatio, CanvasSpace};
use crate::percent::PercentageGeometry;
use crate::store::PlaceholderSnapshot;
use crate::tags::{OccasionTag, fallback_occasions, resolve_tag_id};
use crate::validate::ExportChecklist;

/// File name the background image is uploaded under.
pub const BACKGROUND_FILE_NAME: &str = "template-background.png";

/// Non-geometry inputs collected from the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInputs {
    /// Cropped background image bytes, if one was uploaded.
    pub background: Option<Vec<u8>>,
    /// Selected occasion titles, in selection order.
    pub occasions: Vec<String>,
    /// Selected language titles, in selection order.
    pub languages: Vec<String>,
    /// Free-text label shown in the name placeholder.
    pub label: String,
    /// Occasion catalog used to resolve the exported tag id.
    pub catalog: Vec<OccasionTag>,
}

impl Default for TemplateInputs {
    fn default() -> Self {
        Self {
            background: None,
            occasions: Vec::new(),
            languages: Vec::new(),
            label: String::new(),
            catalog: fallback_occasions(),
        }
    }
}

/// Placeholder geometry delivered to the uploader.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub aspect_ratio: AspectRatio,
    pub image_placeholder: PercentageGeometry,
    pub name_placeholder: PercentageGeometry,
}

impl ExportPayload {
    /// Convert a snapshot to percentages against `canvas`. Never mutates anything.
    #[must_use]
    pub fn from_snapshot(aspect: AspectRatio, snapshot: &PlaceholderSnapshot, canvas: &CanvasSpace) -> Self {
        Self {
            aspect_ratio: aspect,
            image_placeholder: snapshot.image.to_percentage(canvas),
            name_placeholder: snapshot.name.to_percentage(canvas),
        }
    }
}

/// One multipart form value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    File { file_name: &'static str, bytes: Vec<u8> },
}

/// Everything the uploader needs for one template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateUpload {
    pub payload: ExportPayload,
    pub background: Vec<u8>,
    /// Occasion tag id; absent when no occasion is selected.
    pub tag: Option<String>,
    pub language_tags: Vec<String>,
    pub label: String,
}

impl TemplateUpload {
    /// Validate the session and assemble the upload.
    ///
    /// Fails with [`CanvasError::ExportNotReady`] listing every unmet requirement.
    pub fn build(
        aspect: AspectRatio,
        inputs: &TemplateInputs,
        snapshot: &PlaceholderSnapshot,
        canvas: &CanvasSpace,
    ) -> Result<Self, CanvasError> {
        let checklist = ExportChecklist::evaluate(inputs, snapshot, canvas);
        if !checklist.all_met() {
            return Err(CanvasError::ExportNotReady(checklist.failing()));
        }
        let Some(background) = inputs.background.clone() else {
            return Err(CanvasError::ExportNotReady(checklist.failing()));
        };
        Ok(Self {
            payload: ExportPayload::from_snapshot(aspect, snapshot, canvas),
            background,
            tag: resolve_tag_id(&inputs.catalog, &inputs.occasions),
            language_tags: inputs.languages.clone(),
            label: inputs.label.trim().to_string(),
        })
    }

    /// Multipart fields in upload order. Placeholder blocks are JSON-encoded.
    pub fn form_fields(&self) -> Result<Vec<(&'static str, FormValue)>, serde_json::Error> {
        let mut fields = vec![
            ("backgroundImage", FormValue::File { file_name: BACKGROUND_FILE_NAME, bytes: self.background.clone() }),
            ("aspectRatio", FormValue::Text(self.payload.aspect_ratio.as_str().to_string())),
        ];
        if let Some(tag) = &self.tag {
            fields.push(("tag", FormValue::Text(tag.clone())));
        }
        for language in &self.language_tags {
            fields.push(("languageTags", FormValue::Text(language.clone())));
        }
        fields.push(("imagePlaceholder", FormValue::Text(serde_json::to_string(&self.payload.image_placeholder)?)));
        fields.push(("namePlaceholder", FormValue::Text(serde_json::to_string(&self.payload.name_placeholder)?)));
        Ok(fields)
    }
}
