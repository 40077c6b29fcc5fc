//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// No audio source is attached
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// Fractional seek requested before the duration is known
    #[error("Episode duration is not known yet")]
    DurationUnknown,

    /// The backend could not open an episode's audio locator
    #[error("Failed to open audio source: {0}")]
    SourceUnavailable(String),

    /// The audio source rejected a transport command
    #[error("Audio source error: {0}")]
    Source(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
