//! Tale Player - Playback Control
//!
//! Platform-agnostic playback and queue management for Tale Player.
//!
//! This crate provides:
//! - The [`PlaybackController`] state machine: current episode, position in
//!   the active filtered list, transport state, time/duration, volume, rate
//! - Queue navigation (`next`/`previous`) over a versioned active-list
//!   snapshot that can change underneath the player
//! - A single, cancellable auto-advance after an episode ends
//! - Relative and fractional seeking with clamping
//! - A fixed six-value playback rate cycle
//! - Transport clock formatting ([`format_time`])
//!
//! # Architecture
//!
//! `tale-playback` is completely platform-agnostic: no HTTP, no browser, no
//! audio decoding. The audio transport is supplied through the
//! [`AudioBackend`]/[`AudioSource`] capability traits and lifecycle
//! notifications are delivered by calling the controller's `on_*` methods.
//! All transitions run on one logical thread; the only deferred work, the
//! auto-advance, is an explicit [`AdvanceHandle`] the host schedules and
//! redeems, invalidated by any explicit transport command in between.
//!
//! # Example
//!
//! ```rust
//! use tale_core::Episode;
//! use tale_playback::{
//!     AudioBackend, AudioSource, PlaybackController, PlayerConfig, Result,
//! };
//!
//! // Transport that renders nothing; stands in for a real media element.
//! struct SilentSource;
//!
//! impl AudioSource for SilentSource {
//!     fn play(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!     fn pause(&mut self) {}
//!     fn seek(&mut self, _seconds: f64) -> Result<()> {
//!         Ok(())
//!     }
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn set_rate(&mut self, _rate: f32) {}
//!     fn position(&self) -> f64 {
//!         0.0
//!     }
//!     fn duration(&self) -> f64 {
//!         0.0
//!     }
//! }
//!
//! struct SilentBackend;
//!
//! impl AudioBackend for SilentBackend {
//!     fn open(&mut self, _url: &str) -> Result<Box<dyn AudioSource>> {
//!         Ok(Box::new(SilentSource))
//!     }
//! }
//!
//! let mut controller =
//!     PlaybackController::new(Box::new(SilentBackend), PlayerConfig::default());
//!
//! let episode = Episode {
//!     id: "ep-1".to_string(),
//!     title: "The Clever Hare".to_string(),
//!     description: String::new(),
//!     audio_url: "https://cdn.example.com/ep-1.mp3".to_string(),
//!     image_url: String::new(),
//!     category: "Folktales".to_string(),
//!     language: "English".to_string(),
//!     duration_label: "00:12:34".to_string(),
//!     pub_date: None,
//! };
//!
//! controller.set_active_list(vec![episode.clone()]);
//! controller.play(episode, None)?;
//! assert!(controller.session().is_playing());
//! # Ok::<(), tale_playback::PlaybackError>(())
//! ```

#![forbid(unsafe_code)]

mod controller;
mod error;
mod events;
mod history;
mod source;
mod timefmt;
pub mod types;

// Public exports
pub use controller::{AdvanceHandle, PlaybackController};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use history::{NullHistorySink, PlayHistorySink};
pub use source::{AudioBackend, AudioSource};
pub use timefmt::format_time;
pub use types::{PlaybackRate, PlaybackState, PlayerConfig, Session};
