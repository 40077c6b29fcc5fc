//! Tale Player Core
//!
//! Shared domain types for Tale Player: the episode record fetched from the
//! catalog service and the facet values used for category/language filtering.
//!
//! Field names follow the catalog service's JSON wire format (camelCase);
//! unknown wire fields such as `createdAt` are ignored on deserialize.

#![forbid(unsafe_code)]

pub mod types;

pub use types::{Episode, Facet, ALL_FACET};
