//! Core types for playback control

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tale_core::Episode;

/// Transport state of the player.
///
/// "Ended" is not a distinct state: a finished episode leaves the player
/// `Paused` with a scheduled auto-advance (see
/// [`PlaybackController::on_ended`](crate::PlaybackController::on_ended)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No episode loaded
    Idle,

    /// Audio is rendering
    Playing,

    /// Episode loaded, audio halted
    Paused,
}

/// Playback rate as a closed set of supported values.
///
/// The transport cycles through these in order, wrapping after the fastest.
/// An arbitrary float is never a valid rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackRate {
    /// 0.5x
    Half,
    /// 0.75x
    ThreeQuarters,
    /// 1x
    #[default]
    Normal,
    /// 1.25x
    OneAndQuarter,
    /// 1.5x
    OneAndHalf,
    /// 2x
    Double,
}

impl PlaybackRate {
    /// All supported rates, in cycling order.
    pub const CYCLE: [PlaybackRate; 6] = [
        PlaybackRate::Half,
        PlaybackRate::ThreeQuarters,
        PlaybackRate::Normal,
        PlaybackRate::OneAndQuarter,
        PlaybackRate::OneAndHalf,
        PlaybackRate::Double,
    ];

    /// Multiplier handed to the audio source.
    pub fn as_f32(self) -> f32 {
        match self {
            PlaybackRate::Half => 0.5,
            PlaybackRate::ThreeQuarters => 0.75,
            PlaybackRate::Normal => 1.0,
            PlaybackRate::OneAndQuarter => 1.25,
            PlaybackRate::OneAndHalf => 1.5,
            PlaybackRate::Double => 2.0,
        }
    }

    /// Next rate in the cycle, wrapping after 2x.
    pub fn next(self) -> Self {
        match self {
            PlaybackRate::Half => PlaybackRate::ThreeQuarters,
            PlaybackRate::ThreeQuarters => PlaybackRate::Normal,
            PlaybackRate::Normal => PlaybackRate::OneAndQuarter,
            PlaybackRate::OneAndQuarter => PlaybackRate::OneAndHalf,
            PlaybackRate::OneAndHalf => PlaybackRate::Double,
            PlaybackRate::Double => PlaybackRate::Half,
        }
    }

    /// Short display label ("1.25x").
    pub fn label(self) -> &'static str {
        match self {
            PlaybackRate::Half => "0.5x",
            PlaybackRate::ThreeQuarters => "0.75x",
            PlaybackRate::Normal => "1x",
            PlaybackRate::OneAndQuarter => "1.25x",
            PlaybackRate::OneAndHalf => "1.5x",
            PlaybackRate::Double => "2x",
        }
    }
}

/// Configuration for the playback controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume, 0.0..=1.0 (default: 1.0)
    pub volume: f32,

    /// Initial playback rate (default: 1x)
    pub rate: PlaybackRate,

    /// Seconds skipped by the transport's rewind/fast-forward (default: 300)
    pub skip_seconds: f64,

    /// Pause between an episode ending and the auto-advance (default: 1s)
    pub advance_delay: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            rate: PlaybackRate::Normal,
            skip_seconds: 300.0,
            advance_delay: Duration::from_secs(1),
        }
    }
}

/// Observable playback state, owned by the controller and mutated in place.
///
/// One record instead of scattered top-level slots, so the invariants
/// (index validity, clamped time and volume, closed rate set) are enforced
/// in one place. Serializable for the rendering boundary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Episode currently loaded, if any.
    pub current_episode: Option<Episode>,

    /// Position within the active filtered list. Only meaningful while
    /// `current_episode` is set and the list is non-empty.
    pub current_index: usize,

    /// Transport state.
    pub state: PlaybackState,

    /// Seconds into the current episode.
    pub current_time: f64,

    /// Total seconds; 0.0 until metadata has loaded.
    pub duration: f64,

    /// Volume, 0.0..=1.0.
    pub volume: f32,

    /// Current playback rate.
    pub rate: PlaybackRate,
}

impl Session {
    pub(crate) fn new(config: &PlayerConfig) -> Self {
        Self {
            current_episode: None,
            current_index: 0,
            state: PlaybackState::Idle,
            current_time: 0.0,
            duration: 0.0,
            volume: config.volume.clamp(0.0, 1.0),
            rate: config.rate,
        }
    }

    /// True while audio is rendering.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.rate, PlaybackRate::Normal);
        assert_eq!(config.skip_seconds, 300.0);
        assert_eq!(config.advance_delay, Duration::from_secs(1));
    }

    #[test]
    fn rate_cycle_visits_all_values_in_order() {
        let mut rate = PlaybackRate::Half;
        let mut visited = vec![rate];
        for _ in 0..5 {
            rate = rate.next();
            visited.push(rate);
        }
        assert_eq!(visited, PlaybackRate::CYCLE);

        // Wraps back to the start
        assert_eq!(rate.next(), PlaybackRate::Half);
    }

    #[test]
    fn rate_multipliers() {
        let multipliers: Vec<f32> = PlaybackRate::CYCLE.iter().map(|r| r.as_f32()).collect();
        assert_eq!(multipliers, vec![0.5, 0.75, 1.0, 1.25, 1.5, 2.0]);
    }

    #[test]
    fn new_session_is_idle() {
        let session = Session::new(&PlayerConfig::default());
        assert!(session.current_episode.is_none());
        assert_eq!(session.state, PlaybackState::Idle);
        assert!(!session.is_playing());
        assert_eq!(session.volume, 1.0);
    }

    #[test]
    fn session_clamps_configured_volume() {
        let config = PlayerConfig {
            volume: 7.5,
            ..PlayerConfig::default()
        };
        assert_eq!(Session::new(&config).volume, 1.0);
    }
}
