//! Property tests for session invariants.

use proptest::prelude::*;
use tale_core::Episode;
use tale_playback::{
    AudioBackend, AudioSource, PlaybackController, PlaybackRate, PlayerConfig, Result,
};

struct SilentSource;

impl AudioSource for SilentSource {
    fn play(&mut self) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek(&mut self, _seconds: f64) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, _volume: f32) {}

    fn set_rate(&mut self, _rate: f32) {}

    fn position(&self) -> f64 {
        0.0
    }

    fn duration(&self) -> f64 {
        0.0
    }
}

struct SilentBackend;

impl AudioBackend for SilentBackend {
    fn open(&mut self, _url: &str) -> Result<Box<dyn AudioSource>> {
        Ok(Box::new(SilentSource))
    }
}

fn episode(id: &str) -> Episode {
    Episode {
        id: id.to_string(),
        title: format!("Episode {id}"),
        description: String::new(),
        audio_url: format!("https://cdn.example.com/{id}.mp3"),
        image_url: String::new(),
        category: "Stories".to_string(),
        language: "English".to_string(),
        duration_label: "00:10:00".to_string(),
        pub_date: None,
    }
}

fn playing_controller(duration: f64) -> PlaybackController {
    let mut controller =
        PlaybackController::new(Box::new(SilentBackend), PlayerConfig::default());
    controller.set_active_list(vec![episode("a")]);
    controller
        .play(episode("a"), None)
        .expect("silent backend never fails");
    controller.on_metadata_loaded(duration);
    controller
}

proptest! {
    /// No sequence of relative seeks can push the clock outside
    /// [0, duration].
    #[test]
    fn seeks_stay_within_bounds(
        duration in 0.0f64..36_000.0,
        deltas in prop::collection::vec(-3600.0f64..3600.0, 0..40),
    ) {
        let mut controller = playing_controller(duration);
        for delta in deltas {
            controller.seek_relative(delta).unwrap();
            let t = controller.session().current_time;
            prop_assert!(t >= 0.0);
            prop_assert!(t <= duration);
        }
    }

    /// Scrubbing by any fraction lands inside [0, duration].
    #[test]
    fn fraction_seeks_stay_within_bounds(
        duration in 1.0f64..36_000.0,
        fractions in prop::collection::vec(-2.0f64..3.0, 1..20),
    ) {
        let mut controller = playing_controller(duration);
        for fraction in fractions {
            controller.seek_fraction(fraction).unwrap();
            let t = controller.session().current_time;
            prop_assert!(t >= 0.0);
            prop_assert!(t <= duration);
        }
    }

    /// The rate cycle is closed over the six supported values and has
    /// period six.
    #[test]
    fn rate_cycle_is_closed(steps in 0usize..48) {
        let mut rate = PlaybackRate::default();
        for _ in 0..steps {
            rate = rate.next();
        }
        prop_assert!(PlaybackRate::CYCLE.contains(&rate));

        let mut six_later = rate;
        for _ in 0..6 {
            six_later = six_later.next();
        }
        prop_assert_eq!(six_later, rate);
    }

    /// Volume is clamped no matter what the caller passes.
    #[test]
    fn volume_is_always_clamped(volumes in prop::collection::vec(-10.0f32..10.0, 1..20)) {
        let mut controller = playing_controller(100.0);
        for volume in volumes {
            controller.set_volume(volume);
            let v = controller.session().volume;
            prop_assert!((0.0..=1.0).contains(&v));
        }
    }
}
