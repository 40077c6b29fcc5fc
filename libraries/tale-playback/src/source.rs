//! Audio rendering capability traits
//!
//! The controller is polymorphic over any transport satisfying these traits:
//! an in-browser media element, a native audio stack, or a deterministic test
//! double. Timing and lifecycle notifications travel the other way, as the
//! `on_*` methods on [`PlaybackController`](crate::PlaybackController).

use crate::error::Result;

/// A single playable unit bound to one episode's audio locator.
///
/// The controller never inspects source-specific details; it only issues
/// transport commands and keeps its own clamped copies of time, volume, and
/// rate.
pub trait AudioSource: Send {
    /// Ask the source to start rendering.
    ///
    /// May fail (codec, network, autoplay policy). The failure is
    /// recoverable: the controller reverts to not-playing and moves on.
    fn play(&mut self) -> Result<()>;

    /// Halt rendering. Idempotent.
    fn pause(&mut self);

    /// Seek to an absolute position in seconds.
    ///
    /// The controller clamps to `[0, duration]` before calling.
    fn seek(&mut self, seconds: f64) -> Result<()>;

    /// Set the rendering volume, 0.0..=1.0.
    fn set_volume(&mut self, volume: f32);

    /// Set the rendering rate multiplier.
    fn set_rate(&mut self, rate: f32);

    /// Current position in seconds.
    fn position(&self) -> f64;

    /// Total length in seconds; 0.0 while unknown.
    fn duration(&self) -> f64;
}

/// Opens an [`AudioSource`] for an episode's audio locator.
///
/// At most one source is active at a time: the controller retires the
/// previous source by dropping it before opening the next. A retired source
/// must deliver no further notifications.
pub trait AudioBackend: Send {
    /// Bind a new source to `url`.
    ///
    /// Backends report a locator they cannot bind as
    /// [`PlaybackError::SourceUnavailable`](crate::PlaybackError::SourceUnavailable);
    /// the controller settles the session into a not-playing state and
    /// surfaces the failure as an error event.
    fn open(&mut self, url: &str) -> Result<Box<dyn AudioSource>>;
}
