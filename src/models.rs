use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Default drinks shipped with the bundle.
const DEFAULT_CATALOG_JSON: &str = include_str!("../data/coffee_drinks.json");

/// One wedge of the wheel.  The record shape matches the drink file the wheel
/// page is fed from: `{ "name": .., "description": .., "image": .. }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(alias = "name")]
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

impl Segment {
    pub fn new(label: impl Into<String>, description: impl Into<String>, image: Option<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
            image,
        }
    }
}

/// Ordered, immutable, never-empty list of segments.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentCatalog {
    segments: Vec<Segment>,
}

impl SegmentCatalog {
    pub fn new(segments: Vec<Segment>) -> Result<Self, WheelError> {
        if segments.is_empty() {
            return Err(WheelError::EmptyCatalog);
        }
        Ok(Self { segments })
    }

    /// Build from parallel sequences.  `images` may be omitted entirely; when
    /// given it must line up with the labels like the descriptions do.
    pub fn from_parallel(
        labels: Vec<String>,
        descriptions: Vec<String>,
        images: Option<Vec<Option<String>>>,
    ) -> Result<Self, WheelError> {
        let image_count = images.as_ref().map_or(labels.len(), Vec::len);
        if labels.len() != descriptions.len() || labels.len() != image_count {
            return Err(WheelError::LengthMismatch {
                labels: labels.len(),
                descriptions: descriptions.len(),
                images: image_count,
            });
        }

        let images = images.unwrap_or_else(|| vec![None; labels.len()]);
        let segments = labels
            .into_iter()
            .zip(descriptions)
            .zip(images)
            .map(|((label, description), image)| {
                Segment::new(label, description, image.filter(|s| !s.trim().is_empty()))
            })
            .collect();
        Self::new(segments)
    }

    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let segments: Vec<Segment> = serde_json::from_str(json)?;
        Self::new(segments)
    }

    /// The catalog embedded in the bundle.
    pub fn default_drinks() -> Result<Self, WheelError> {
        Self::from_json(DEFAULT_CATALOG_JSON)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}
