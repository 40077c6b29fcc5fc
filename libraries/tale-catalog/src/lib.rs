//! Tale Player - Episode Catalog
//!
//! Holds the full episode set, derives category/language facet counts, and
//! answers pure `(category, language)` filter queries.
//!
//! Featured and recently-played subsets are supplied by the catalog service
//! and stored as-is; they are independent of the active filter and are never
//! re-filtered by selection changes.

#![forbid(unsafe_code)]

mod catalog;

pub use catalog::EpisodeCatalog;
pub use tale_core::{Episode, Facet, ALL_FACET};
