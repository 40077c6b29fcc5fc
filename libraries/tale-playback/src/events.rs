//! Playback events
//!
//! Queued by the controller at state transitions and drained by the
//! rendering boundary via
//! [`PlaybackController::take_events`](crate::PlaybackController::take_events).
//! Continuous position updates are not events; the boundary reads them from
//! the [`Session`](crate::Session) directly.

use crate::types::{PlaybackRate, PlaybackState};
use serde::{Deserialize, Serialize};

/// Events emitted by the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Transport state changed
    StateChanged {
        /// The new state
        state: PlaybackState,
    },

    /// A different episode was loaded
    EpisodeChanged {
        /// ID of the new episode
        episode_id: String,
        /// Its position in the active list
        index: usize,
    },

    /// The current episode played to its end
    EpisodeFinished {
        /// ID of the finished episode
        episode_id: String,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume, 0.0..=1.0
        volume: f32,
    },

    /// Playback rate changed
    RateChanged {
        /// New rate
        rate: PlaybackRate,
    },

    /// Recoverable playback failure; the transport reverts to not playing
    Error {
        /// Human-readable description
        message: String,
    },
}
