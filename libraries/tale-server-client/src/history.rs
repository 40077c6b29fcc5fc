//! HTTP play-history sink.
//!
//! Implements the playback crate's [`PlayHistorySink`] over the catalog
//! service. Records are spawned onto the tokio runtime so the controller's
//! transport path never waits on the network; failures are logged and
//! swallowed, exactly as the fire-and-forget contract requires.

use crate::client::CatalogClient;
use std::sync::Arc;
use tale_core::Episode;
use tale_playback::PlayHistorySink;
use tokio::runtime::Handle;
use tracing::warn;

/// Fire-and-forget play-history recorder.
pub struct HttpHistorySink {
    client: Arc<CatalogClient>,
    runtime: Handle,
}

impl HttpHistorySink {
    /// Create a sink that spawns its requests onto `runtime`.
    pub fn new(client: Arc<CatalogClient>, runtime: Handle) -> Self {
        Self { client, runtime }
    }
}

impl PlayHistorySink for HttpHistorySink {
    fn record(&self, episode: &Episode) {
        let client = Arc::clone(&self.client);
        let episode = episode.clone();
        self.runtime.spawn(async move {
            if let Err(error) = client.record_play(&episode).await {
                warn!(episode_id = %episode.id, %error, "Failed to record play history");
            }
        });
    }
}
