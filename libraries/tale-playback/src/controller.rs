//! Playback controller - the core state machine
//!
//! Owns the [`Session`] (current episode, queue position, transport state,
//! time/duration, volume, rate), issues transport commands to the audio
//! backend, consumes its lifecycle notifications, navigates the active
//! filtered episode list, and reports play events to the history
//! collaborator.
//!
//! All transitions run on one logical thread: commands and notifications
//! are plain `&mut self` calls, so no two transitions race on the Session.
//! The only deferred work, the auto-advance after an episode ends, is an
//! explicit [`AdvanceHandle`] the host schedules and redeems.

use std::time::Duration;

use tale_core::Episode;
use tracing::{debug, warn};

use crate::{
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    history::PlayHistorySink,
    source::{AudioBackend, AudioSource},
    types::{PlaybackState, PlayerConfig, Session},
};

/// A scheduled auto-advance.
///
/// Issued by [`PlaybackController::on_ended`] and redeemed with
/// [`PlaybackController::fire_auto_advance`] after [`delay`](Self::delay)
/// has elapsed. The handle captures the transport generation at schedule
/// time: any explicit transport command issued in between invalidates it,
/// so a late timer can never double-advance the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceHandle {
    generation: u64,
    delay: Duration,
}

impl AdvanceHandle {
    /// How long the host should wait before redeeming the handle.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// The playback/queue state machine.
///
/// At most one Session exists per controller and at most one audio source
/// is active at a time; starting a new episode retires the previous source
/// before attaching the next.
pub struct PlaybackController {
    session: Session,

    /// Snapshot of the active filtered episode list. `current_index` is
    /// only meaningful relative to this snapshot and is recomputed on
    /// every replacement.
    active: Vec<Episode>,
    list_version: u64,

    source: Option<Box<dyn AudioSource>>,
    backend: Box<dyn AudioBackend>,
    history: Option<Box<dyn PlayHistorySink>>,

    /// Bumped by every explicit transport command; stale advance handles
    /// compare unequal and become no-ops.
    generation: u64,
    pending_advance: Option<AdvanceHandle>,

    pending_events: Vec<PlaybackEvent>,
    config: PlayerConfig,
}

impl PlaybackController {
    /// Create a controller with an empty session.
    pub fn new(backend: Box<dyn AudioBackend>, config: PlayerConfig) -> Self {
        Self {
            session: Session::new(&config),
            active: Vec::new(),
            list_version: 0,
            source: None,
            backend,
            history: None,
            generation: 0,
            pending_advance: None,
            pending_events: Vec::new(),
            config,
        }
    }

    /// Attach the play-history collaborator.
    pub fn set_history_sink(&mut self, sink: Box<dyn PlayHistorySink>) {
        self.history = Some(sink);
    }

    /// Observable playback state for the rendering boundary.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The active filtered episode list this controller navigates.
    pub fn active_list(&self) -> &[Episode] {
        &self.active
    }

    /// Version of the active-list snapshot; bumped on every replacement.
    pub fn list_version(&self) -> u64 {
        self.list_version
    }

    /// Drain queued events for the rendering boundary.
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// The auto-advance currently scheduled, if any.
    pub fn scheduled_advance(&self) -> Option<AdvanceHandle> {
        self.pending_advance
    }

    // ===== Transport commands =====

    /// Play an episode.
    ///
    /// Called on the currently playing episode, this is a pause toggle, not
    /// a restart. Otherwise the previous source is retired, a new one is
    /// opened for `episode.audio_url`, and the play event is reported to
    /// the history collaborator (fire-and-forget).
    ///
    /// `index` is the episode's position in the active list when the caller
    /// already knows it; otherwise the position is looked up, falling back
    /// to 0.
    pub fn play(&mut self, episode: Episode, index: Option<usize>) -> Result<()> {
        self.begin_transport();

        let same = self
            .session
            .current_episode
            .as_ref()
            .is_some_and(|current| current.id == episode.id);

        if same && self.session.state == PlaybackState::Playing {
            if let Some(source) = self.source.as_mut() {
                source.pause();
            }
            self.set_state(PlaybackState::Paused);
            return Ok(());
        }

        if same && self.source.is_some() {
            // Same episode, paused: resume in place instead of reloading.
            self.start_rendering();
            self.record_history(&episode);
            return Ok(());
        }

        // Retire the previous source before attaching the next one, so a
        // stale notification can never reach the new session.
        self.source = None;

        let index = index
            .or_else(|| self.active.iter().position(|e| e.id == episode.id))
            .unwrap_or(0);

        let mut source = match self.backend.open(&episode.audio_url) {
            Ok(source) => source,
            Err(e) => {
                // The previous source is already retired; settle the session
                // into a consistent not-playing state before reporting.
                warn!(episode_id = %episode.id, error = %e, "Failed to open audio source");
                self.settle_not_playing();
                self.pending_events.push(PlaybackEvent::Error {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };
        source.set_volume(self.session.volume);
        source.set_rate(self.session.rate.as_f32());
        self.source = Some(source);

        self.session.current_index = index;
        self.session.current_time = 0.0;
        self.session.duration = 0.0;
        self.pending_events.push(PlaybackEvent::EpisodeChanged {
            episode_id: episode.id.clone(),
            index,
        });
        self.session.current_episode = Some(episode.clone());

        self.start_rendering();
        self.record_history(&episode);
        Ok(())
    }

    /// Pause playback. Idempotent.
    pub fn pause(&mut self) {
        self.begin_transport();
        if let Some(source) = self.source.as_mut() {
            source.pause();
        }
        self.settle_not_playing();
    }

    /// Pause if playing, otherwise resume the loaded episode.
    ///
    /// No-op while nothing is loaded.
    pub fn toggle_play_pause(&mut self) {
        self.begin_transport();
        if self.session.state == PlaybackState::Playing {
            if let Some(source) = self.source.as_mut() {
                source.pause();
            }
            self.set_state(PlaybackState::Paused);
        } else if self.source.is_some() {
            self.start_rendering();
        }
    }

    /// Advance to the next episode in the active list.
    ///
    /// No-op at the last position.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        self.begin_transport();
        let next_index = self.session.current_index + 1;
        if next_index >= self.active.len() {
            return Ok(());
        }
        self.play(self.active[next_index].clone(), Some(next_index))
    }

    /// Retreat to the previous episode in the active list.
    ///
    /// No-op at position 0.
    pub fn previous(&mut self) -> Result<()> {
        self.begin_transport();
        if self.active.is_empty() || self.session.current_index == 0 {
            return Ok(());
        }
        let prev_index = self.session.current_index - 1;
        self.play(self.active[prev_index].clone(), Some(prev_index))
    }

    /// Seek by a signed number of seconds, clamped to `[0, duration]`.
    pub fn seek_relative(&mut self, delta_seconds: f64) -> Result<()> {
        let target = (self.session.current_time + delta_seconds)
            .clamp(0.0, self.session.duration.max(0.0));
        self.seek_to(target)
    }

    /// Fast-forward by the configured skip interval (5 minutes by default).
    pub fn skip_forward(&mut self) -> Result<()> {
        self.seek_relative(self.config.skip_seconds)
    }

    /// Rewind by the configured skip interval.
    pub fn skip_back(&mut self) -> Result<()> {
        self.seek_relative(-self.config.skip_seconds)
    }

    /// Scrub to a fraction of the episode, 0.0..=1.0.
    ///
    /// Requires the duration to be known.
    pub fn seek_fraction(&mut self, fraction: f64) -> Result<()> {
        if self.source.is_none() {
            return Err(PlaybackError::NoEpisodeLoaded);
        }
        if self.session.duration <= 0.0 {
            return Err(PlaybackError::DurationUnknown);
        }
        let target = fraction.clamp(0.0, 1.0) * self.session.duration;
        self.seek_to(target)
    }

    /// Set the volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        if let Some(source) = self.source.as_mut() {
            source.set_volume(volume);
        }
        self.session.volume = volume;
        self.pending_events
            .push(PlaybackEvent::VolumeChanged { volume });
    }

    /// Advance to the next playback rate in the fixed cycle.
    pub fn cycle_playback_rate(&mut self) {
        let rate = self.session.rate.next();
        self.session.rate = rate;
        if let Some(source) = self.source.as_mut() {
            source.set_rate(rate.as_f32());
        }
        self.pending_events.push(PlaybackEvent::RateChanged { rate });
    }

    // ===== Source notifications =====

    /// Progress notification from the active source.
    pub fn on_time_update(&mut self, seconds: f64) {
        if self.source.is_none() {
            return;
        }
        self.session.current_time = if self.session.duration > 0.0 {
            seconds.clamp(0.0, self.session.duration)
        } else {
            seconds.max(0.0)
        };
    }

    /// Metadata notification: the duration is now known.
    ///
    /// Reapplies the current rate and volume to the source, since both must
    /// survive across episode loads.
    pub fn on_metadata_loaded(&mut self, duration_seconds: f64) {
        let Some(source) = self.source.as_mut() else {
            return;
        };
        source.set_rate(self.session.rate.as_f32());
        source.set_volume(self.session.volume);
        self.session.duration = duration_seconds.max(0.0);
        self.session.current_time = self.session.current_time.min(self.session.duration);
    }

    /// The active source played to its end.
    ///
    /// Leaves the player paused on the finished episode. If a next episode
    /// exists in the active list, returns a single cancellable
    /// [`AdvanceHandle`] the host should redeem after its delay; any
    /// explicit transport command in between invalidates it.
    pub fn on_ended(&mut self) -> Option<AdvanceHandle> {
        let episode_id = self.session.current_episode.as_ref()?.id.clone();
        self.set_state(PlaybackState::Paused);
        self.pending_events
            .push(PlaybackEvent::EpisodeFinished { episode_id });

        if self.session.current_index + 1 < self.active.len() {
            let handle = AdvanceHandle {
                generation: self.generation,
                delay: self.config.advance_delay,
            };
            self.pending_advance = Some(handle);
            Some(handle)
        } else {
            self.pending_advance = None;
            None
        }
    }

    /// Redeem a scheduled auto-advance.
    ///
    /// Returns `Ok(true)` if the queue advanced; `Ok(false)` for a stale
    /// handle (an explicit transport command intervened), which is a no-op.
    pub fn fire_auto_advance(&mut self, handle: AdvanceHandle) -> Result<bool> {
        if self.pending_advance != Some(handle) || handle.generation != self.generation {
            debug!("Stale auto-advance handle ignored");
            return Ok(false);
        }
        self.pending_advance = None;
        self.next()?;
        Ok(true)
    }

    /// The active source failed asynchronously after a play request.
    ///
    /// Recoverable: revert to not-playing, no automatic retry.
    pub fn on_playback_error(&mut self, message: &str) {
        warn!(error = %message, "Playback error");
        self.settle_not_playing();
        self.pending_events.push(PlaybackEvent::Error {
            message: message.to_string(),
        });
    }

    // ===== Active list =====

    /// Replace the active filtered list (filter change or catalog refresh).
    ///
    /// Never interrupts playback of the loaded episode. `current_index` is
    /// revalidated against the new snapshot: still present means its new
    /// position, absent means 0, so subsequent `next`/`previous` use a
    /// corrected index rather than a stale one.
    pub fn set_active_list(&mut self, episodes: Vec<Episode>) {
        self.list_version += 1;
        if let Some(current) = &self.session.current_episode {
            self.session.current_index = episodes
                .iter()
                .position(|e| e.id == current.id)
                .unwrap_or(0);
        }
        debug!(
            version = self.list_version,
            episodes = episodes.len(),
            "Active list replaced"
        );
        self.active = episodes;
    }

    // ===== Internals =====

    /// Explicit transport command: invalidates any scheduled auto-advance.
    fn begin_transport(&mut self) {
        self.generation += 1;
        self.pending_advance = None;
    }

    /// Issue the asynchronous start-rendering request, optimistically
    /// entering `Playing` and reverting if the source rejects it.
    fn start_rendering(&mut self) {
        let Some(source) = self.source.as_mut() else {
            return;
        };
        match source.play() {
            Ok(()) => self.set_state(PlaybackState::Playing),
            Err(e) => {
                warn!(error = %e, "Transport start failed");
                self.settle_not_playing();
                self.pending_events.push(PlaybackEvent::Error {
                    message: e.to_string(),
                });
            }
        }
    }

    fn seek_to(&mut self, target_seconds: f64) -> Result<()> {
        let source = self.source.as_mut().ok_or(PlaybackError::NoEpisodeLoaded)?;
        source.seek(target_seconds)?;
        self.session.current_time = target_seconds;
        Ok(())
    }

    fn record_history(&self, episode: &Episode) {
        if let Some(sink) = &self.history {
            sink.record(episode);
        }
    }

    fn settle_not_playing(&mut self) {
        if self.session.current_episode.is_some() {
            self.set_state(PlaybackState::Paused);
        } else {
            self.set_state(PlaybackState::Idle);
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.session.state != state {
            self.session.state = state;
            self.pending_events
                .push(PlaybackEvent::StateChanged { state });
        }
    }
}
