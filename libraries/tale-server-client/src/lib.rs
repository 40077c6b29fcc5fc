//! Tale Player - Catalog Service Client
//!
//! HTTP client for the remote catalog service: episode listings with
//! category/language filtering, facet lists, featured and recently-played
//! subsets, the backend resync trigger, and the fire-and-forget play-history
//! sink consumed by the playback controller.
//!
//! Fetches run concurrently with playback and never block transport
//! commands. A failed fetch returns an error and leaves caller state
//! untouched; there is no partial overwrite.

#![forbid(unsafe_code)]

mod client;
mod error;
mod history;
mod types;

pub use client::CatalogClient;
pub use error::{CatalogClientError, Result};
pub use history::HttpHistorySink;
pub use types::{
    CatalogSnapshot, CategoriesResponse, EpisodesResponse, HealthResponse, LanguagesResponse,
};
