//! Series: a named season collecting a player set.

use serde::{Deserialize, Serialize};

/// Identifier of a series. Opaque; persisted as a JSON string.
pub type SeriesId = String;

/// Id of the synthesized fallback series.
pub const DEFAULT_SERIES_ID: &str = "default";

/// Name of the synthesized fallback series.
pub const DEFAULT_SERIES_NAME: &str = "Default Series";

/// A series as persisted under the `pokerSeries` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    /// ISO-8601 creation stamp. Never mutated after creation.
    pub created_at: String,
    #[serde(default)]
    pub has_bounty: bool,
    /// Cover image as a `data:` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Series {
    /// The fallback series used on empty startup and for legacy migration.
    pub fn default_series(created_at: impl Into<String>) -> Self {
        Self {
            id: DEFAULT_SERIES_ID.to_string(),
            name: DEFAULT_SERIES_NAME.to_string(),
            created_at: created_at.into(),
            has_bounty: false,
            image: None,
        }
    }
}

/// User-editable series fields, for both create and update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesInput {
    pub name: String,
    #[serde(default)]
    pub has_bounty: bool,
    #[serde(default)]
    pub image: Option<String>,
}

impl SeriesInput {
    pub fn new(name: impl Into<String>, has_bounty: bool) -> Self {
        Self {
            name: name.into(),
            has_bounty,
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Trimmed name, or `None` when nothing is left after trimming.
    pub fn trimmed_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }

    /// Trimmed image payload; blank payloads count as no image.
    pub fn trimmed_image(&self) -> Option<String> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}
