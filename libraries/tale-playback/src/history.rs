//! Play-history collaborator
//!
//! Recording is fire-and-forget: implementations must never block the
//! transport path and must swallow (log) their own failures. Playback state
//! never depends on the sink.

use tale_core::Episode;

/// Sink that receives one record per episode started.
pub trait PlayHistorySink: Send {
    /// Record that `episode` started playing.
    fn record(&self, episode: &Episode);
}

/// Sink that drops every record; for tests and headless setups.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHistorySink;

impl PlayHistorySink for NullHistorySink {
    fn record(&self, _episode: &Episode) {}
}
