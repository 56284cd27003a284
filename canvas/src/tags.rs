//! Occasion and language tags attached to an exported template.
//!
//! The occasion catalog normally comes from the upload service; when that
//! fetch fails the host falls back to [`fallback_occasions`]. Tags are
//! selected by title and the first selected occasion is exported by id.

#[cfg(test)]
#[path = "tags_test.rs"]
mod tags_test;

use serde::{Deserialize, Serialize};

/// Languages a template can be tagged with.
pub const LANGUAGE_TAGS: [&str; 10] = [
    "English",
    "Hindi",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Marathi",
    "Bengali",
    "Gujarati",
    "Punjabi",
];

/// Tag id exported when the selected occasion title is not in the catalog.
pub const DEFAULT_TAG_ID: &str = "3";

/// One occasion from the tag catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccasionTag {
    pub id: u32,
    pub title: String,
}

/// Catalog used when the remote one is unavailable.
#[must_use]
pub fn fallback_occasions() -> Vec<OccasionTag> {
    [
        (10, "Motivational"),
        (9, "Anniversary"),
        (8, "New Year"),
        (7, "Birthday"),
        (6, "Quotes"),
        (5, "Diwali"),
        (4, "Pongal"),
        (3, "Christmas"),
        (2, "Good Evening"),
        (1, "Good Morning"),
    ]
    .into_iter()
    .map(|(id, title)| OccasionTag { id, title: title.to_string() })
    .collect()
}

/// Select `tag` if absent, deselect it if present. Selection order is preserved.
pub fn toggle_tag(selected: &mut Vec<String>, tag: &str) {
    if let Some(pos) = selected.iter().position(|t| t == tag) {
        selected.remove(pos);
    } else {
        selected.push(tag.to_string());
    }
}

/// Tag id for the first selected occasion, or `None` when nothing is selected.
#[must_use]
pub fn resolve_tag_id(catalog: &[OccasionTag], selected: &[String]) -> Option<String> {
    let first = selected.first()?;
    let id = catalog
        .iter()
        .find(|tag| &tag.title == first)
        .map_or_else(|| DEFAULT_TAG_ID.to_string(), |tag| tag.id.to_string());
    Some(id)
}
