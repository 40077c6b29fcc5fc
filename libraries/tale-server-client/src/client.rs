//! Catalog service client.

use crate::error::{CatalogClientError, Result};
use crate::types::{
    CatalogSnapshot, CategoriesResponse, EpisodesResponse, HealthResponse, LanguagesResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tale_core::{Episode, Facet, ALL_FACET};
use tracing::{debug, info, warn};

/// Client for the remote catalog service.
///
/// # Example
///
/// ```ignore
/// use tale_server_client::CatalogClient;
///
/// let client = CatalogClient::new("http://localhost:8001")?;
///
/// // Startup: resync, then fetch everything concurrently.
/// let snapshot = client.initial_load().await?;
/// println!("{} episodes", snapshot.episodes.len());
///
/// // Filter change: refetch the active list.
/// let animals = client.episodes(Some("Animals"), None).await?;
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let url = base_url.into();
        if url.is_empty() {
            return Err(CatalogClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CatalogClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("TalePlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogClientError::Request)?;

        Ok(Self {
            http,
            base_url: url,
        })
    }

    /// The normalized service URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Trigger a backend resync from the story feed.
    ///
    /// The response body is ignored; only the subsequent episode fetch
    /// matters.
    pub async fn refresh_episodes(&self) -> Result<()> {
        let url = format!("{}/api/refresh-episodes", self.base_url);
        debug!(url = %url, "Requesting episode refresh");

        let response = self.http.post(&url).send().await.map_err(map_send_error)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Fetch episodes, optionally filtered by category and language.
    ///
    /// `None` or the "All" sentinel means the parameter is omitted and
    /// nothing is excluded on that dimension.
    pub async fn episodes(
        &self,
        category: Option<&str>,
        language: Option<&str>,
    ) -> Result<Vec<Episode>> {
        let mut params = Vec::new();
        if let Some(category) = category.filter(|c| *c != ALL_FACET) {
            params.push(format!("category={}", urlencoding::encode(category)));
        }
        if let Some(language) = language.filter(|l| *l != ALL_FACET) {
            params.push(format!("language={}", urlencoding::encode(language)));
        }

        let mut url = format!("{}/api/episodes", self.base_url);
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }

        let body: EpisodesResponse = self.get_json(&url, "episodes").await?;
        debug!(count = body.episodes.len(), "Fetched episodes");
        Ok(body.episodes)
    }

    /// Server-computed category facets (without the "All" sentinel).
    pub async fn categories(&self) -> Result<Vec<Facet>> {
        let url = format!("{}/api/categories", self.base_url);
        let body: CategoriesResponse = self.get_json(&url, "categories").await?;
        Ok(body.categories)
    }

    /// Server-computed language facets (without the "All" sentinel).
    pub async fn languages(&self) -> Result<Vec<Facet>> {
        let url = format!("{}/api/languages", self.base_url);
        let body: LanguagesResponse = self.get_json(&url, "languages").await?;
        Ok(body.languages)
    }

    /// Featured episode subset.
    pub async fn featured(&self) -> Result<Vec<Episode>> {
        let url = format!("{}/api/featured", self.base_url);
        let body: EpisodesResponse = self.get_json(&url, "featured").await?;
        Ok(body.episodes)
    }

    /// Recently-played episode subset.
    pub async fn recent(&self) -> Result<Vec<Episode>> {
        let url = format!("{}/api/recent", self.base_url);
        let body: EpisodesResponse = self.get_json(&url, "recent").await?;
        Ok(body.episodes)
    }

    /// Service health check.
    pub async fn health(&self) -> Result<HealthResponse> {
        let url = format!("{}/api/health", self.base_url);
        self.get_json(&url, "health").await
    }

    /// Record a play event for `episode`.
    ///
    /// Call sites treat this as fire-and-forget; a failure here must never
    /// affect playback state.
    pub async fn record_play(&self, episode: &Episode) -> Result<()> {
        let url = format!("{}/api/play-history", self.base_url);
        debug!(url = %url, episode_id = %episode.id, "Recording play");

        let response = self
            .http
            .post(&url)
            .json(episode)
            .send()
            .await
            .map_err(map_send_error)?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Startup fetch: best-effort resync, then every catalog list
    /// concurrently.
    ///
    /// A failed resync is downgraded to a warning and the cached catalog is
    /// served; a failed list fetch fails the whole load so the caller never
    /// applies a partial snapshot.
    pub async fn initial_load(&self) -> Result<CatalogSnapshot> {
        if let Err(error) = self.refresh_episodes().await {
            warn!(%error, "Episode refresh failed, serving cached catalog");
        }

        let (episodes, categories, languages, featured, recent) = tokio::try_join!(
            self.episodes(None, None),
            self.categories(),
            self.languages(),
            self.featured(),
            self.recent(),
        )?;

        info!(episodes = episodes.len(), "Catalog loaded");
        Ok(CatalogSnapshot {
            episodes,
            categories,
            languages,
            featured,
            recent,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, what: &str) -> Result<T> {
        debug!(url = %url, "Fetching {what}");

        let response = self.http.get(url).send().await.map_err(map_send_error)?;
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                CatalogClientError::ParseError(format!("Failed to parse {what} response: {e}"))
            })
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CatalogClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

fn map_send_error(e: reqwest::Error) -> CatalogClientError {
    if e.is_connect() || e.is_timeout() {
        CatalogClientError::ServerUnreachable(e.to_string())
    } else {
        CatalogClientError::Request(e)
    }
}

// URL encoding helper
mod urlencoding {
    pub fn encode(s: &str) -> String {
        url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
    }
}
