//! Domain types shared across Tale Player crates.

use serde::{Deserialize, Serialize};

/// Sentinel facet name that matches every episode.
///
/// Selecting it resets the filter dimension; it is never a real category or
/// language value.
pub const ALL_FACET: &str = "All";

/// One playable story episode from the catalog.
///
/// Immutable once fetched. The catalog service derives `category` and
/// `language` from the episode text, so both are open string sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Stable unique identifier.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Display description (HTML already stripped by the service).
    #[serde(default)]
    pub description: String,

    /// Locator handed to the audio backend.
    pub audio_url: String,

    /// Artwork locator (may be empty).
    #[serde(default)]
    pub image_url: String,

    /// Category facet value.
    pub category: String,

    /// Language facet value ("English", "Swahili", ...).
    pub language: String,

    /// Opaque display string such as "00:12:34"; not necessarily seconds.
    #[serde(rename = "duration", default)]
    pub duration_label: String,

    /// RSS publication date, when the service provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_date: Option<String>,
}

/// A category or language filter value with its precomputed match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// Facet value, unique within its dimension.
    pub name: String,

    /// Number of episodes matching this value.
    pub count: usize,
}

impl Facet {
    /// Create a new facet.
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}
