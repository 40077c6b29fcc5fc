//! Wire types for the catalog service API.

use serde::{Deserialize, Serialize};
use tale_core::{Episode, Facet};

/// Body of `GET /api/episodes`, `/api/featured`, and `/api/recent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodesResponse {
    /// Episodes in service order.
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// Body of `GET /api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    /// Category facets with match counts.
    #[serde(default)]
    pub categories: Vec<Facet>,
}

/// Body of `GET /api/languages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagesResponse {
    /// Language facets with match counts.
    #[serde(default)]
    pub languages: Vec<Facet>,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status string ("healthy").
    pub status: String,

    /// Service name.
    #[serde(default)]
    pub app: String,
}

/// Everything the player needs at startup, fetched in one round.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    /// Full unfiltered episode set.
    pub episodes: Vec<Episode>,

    /// Server-computed category facets (without the "All" sentinel).
    pub categories: Vec<Facet>,

    /// Server-computed language facets (without the "All" sentinel).
    pub languages: Vec<Facet>,

    /// Featured subset.
    pub featured: Vec<Episode>,

    /// Recently-played subset.
    pub recent: Vec<Episode>,
}
