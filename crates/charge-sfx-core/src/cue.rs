//! Pure per-tick cue state machine.
//!
//! [`ChargeCue`] holds the little state a charge cue needs between ticks
//! (last trigger seen, current ratio, end of the build-up window) and
//! [`advance`](ChargeCue::advance) turns one tick's inputs into a
//! [`CueFrame`] of sink commands. No sinks are touched here; applying
//! frames is the job of [`ChargeSfxController`](crate::ChargeSfxController)
//! or a host engine's own adapter.

use crate::config::ChargeSfxConfig;
use crate::util::{buildup_fade_level, lerp};

/// Sink commands produced by one cue tick.
///
/// Starts are edge-triggered and happen at most once per charge cycle;
/// volume and pitch fields are level-triggered and present on every charging
/// tick of the matching mode.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CueFrame {
    /// Start the burst sink from the beginning of its clip.
    pub start_burst: bool,
    /// Start the loop sink from the beginning of its clip.
    pub start_loop: bool,
    /// Stop both sinks. Mutually exclusive with every other command.
    pub stop: bool,
    /// New burst-sink volume (crossfade mode).
    pub burst_volume: Option<f32>,
    /// New loop-sink volume (crossfade mode).
    pub loop_volume: Option<f32>,
    /// New loop-sink pitch multiplier (procedural-pitch mode).
    pub loop_pitch: Option<f32>,
}

impl CueFrame {
    /// Whether this frame carries no commands at all.
    pub fn is_idle(&self) -> bool {
        *self == CueFrame::default()
    }
}

/// Runtime state of a charge cue.
///
/// Owned exclusively by whatever drives it; reset happens implicitly on the
/// next rising edge of the trigger timestamp, never explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChargeCue {
    last_trigger_timestamp: f32,
    charge_ratio: f32,
    end_of_buildup: f32,
}

impl ChargeCue {
    /// Create a cue with no trigger seen yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Charge ratio recorded on the most recent tick.
    pub fn charge_ratio(&self) -> f32 {
        self.charge_ratio
    }

    /// Most recent trigger timestamp accepted by a rising edge.
    pub fn last_trigger_timestamp(&self) -> f32 {
        self.last_trigger_timestamp
    }

    /// End of the current build-up window, on the tick clock.
    pub fn end_of_buildup(&self) -> f32 {
        self.end_of_buildup
    }

    /// Advance the cue by one tick.
    ///
    /// * `now` - current time in seconds, same clock as `trigger_timestamp`
    /// * `charge` - charge ratio from the weapon-state provider
    /// * `trigger_timestamp` - start time of the provider's current cycle
    /// * `loop_playing` - observed playback state of the loop sink
    ///
    /// A new cycle starts only when the loop sink is not playing and the
    /// trigger timestamp moved strictly past the last accepted one; while
    /// the loop keeps playing, newer triggers are absorbed without a
    /// restart.
    pub fn advance(
        &mut self,
        config: &ChargeSfxConfig,
        now: f32,
        charge: f32,
        trigger_timestamp: f32,
        loop_playing: bool,
    ) -> CueFrame {
        self.charge_ratio = charge;

        let mut frame = CueFrame::default();

        if charge <= 0.0 {
            frame.stop = true;
            return frame;
        }

        if !loop_playing && trigger_timestamp > self.last_trigger_timestamp {
            self.last_trigger_timestamp = trigger_timestamp;
            if !config.procedural_pitch {
                self.end_of_buildup = now + config.buildup_duration;
                frame.start_burst = true;
            }
            frame.start_loop = true;
        }

        if !config.procedural_pitch {
            let level = buildup_fade_level(self.end_of_buildup, now, config.fade_duration);
            frame.burst_volume = Some(level);
            frame.loop_volume = Some(1.0 - level);
        } else {
            frame.loop_pitch = Some(lerp(1.0, config.max_procedural_pitch, charge));
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn crossfade_config() -> ChargeSfxConfig {
        ChargeSfxConfig::new(1.0).with_fade_duration(0.5)
    }

    fn procedural_config(max_pitch: f32) -> ChargeSfxConfig {
        ChargeSfxConfig::default()
            .with_procedural_pitch(true)
            .with_max_procedural_pitch(max_pitch)
    }

    #[test]
    fn rising_edge_starts_both_sinks() {
        let mut cue = ChargeCue::new();
        let frame = cue.advance(&crossfade_config(), 10.0, 0.1, 10.0, false);

        assert!(frame.start_burst);
        assert!(frame.start_loop);
        assert!(!frame.stop);
        assert_relative_eq!(cue.last_trigger_timestamp(), 10.0);
        assert_relative_eq!(cue.end_of_buildup(), 11.0);
    }

    #[test]
    fn crossfade_ramp_matches_formula() {
        // Build-up 1.0s, fade 0.5s, triggered at t=10: the burst holds full
        // volume, ramps down across [10.0, 10.5], and is silent from half a
        // second before the build-up ends.
        let config = crossfade_config();
        let mut cue = ChargeCue::new();

        let frame = cue.advance(&config, 10.0, 0.2, 10.0, false);
        assert_relative_eq!(frame.burst_volume.unwrap(), 1.0);
        assert_relative_eq!(frame.loop_volume.unwrap(), 0.0);

        let frame = cue.advance(&config, 10.25, 0.5, 10.0, true);
        assert_relative_eq!(frame.burst_volume.unwrap(), 0.5);
        assert_relative_eq!(frame.loop_volume.unwrap(), 0.5);

        let frame = cue.advance(&config, 10.5, 0.8, 10.0, true);
        assert_relative_eq!(frame.burst_volume.unwrap(), 0.0);
        assert_relative_eq!(frame.loop_volume.unwrap(), 1.0);

        let frame = cue.advance(&config, 11.0, 1.0, 10.0, true);
        assert_relative_eq!(frame.burst_volume.unwrap(), 0.0);
        assert_relative_eq!(frame.loop_volume.unwrap(), 1.0);
    }

    #[test]
    fn crossfade_is_monotonic_bounded_and_complementary() {
        let config = crossfade_config();
        let mut cue = ChargeCue::new();
        cue.advance(&config, 0.0, 0.1, 0.5, false);

        let mut previous = f32::INFINITY;
        for step in 0..=40 {
            let now = step as f32 * 0.05;
            let frame = cue.advance(&config, now, 0.5, 0.5, true);
            let burst = frame.burst_volume.unwrap();
            let loop_volume = frame.loop_volume.unwrap();

            assert!((0.0..=1.0).contains(&burst));
            assert!(burst <= previous);
            assert_relative_eq!(loop_volume, 1.0 - burst);
            previous = burst;
        }
    }

    #[test]
    fn procedural_pitch_tracks_charge_linearly() {
        let config = procedural_config(2.0);
        let mut cue = ChargeCue::new();

        let frame = cue.advance(&config, 0.0, 0.5, 1.0, false);
        assert!(frame.start_loop);
        assert!(!frame.start_burst, "procedural mode skips the burst clip");
        assert_relative_eq!(frame.loop_pitch.unwrap(), 1.5);

        let frame = cue.advance(&config, 0.1, 1.0, 1.0, true);
        assert_relative_eq!(frame.loop_pitch.unwrap(), 2.0);

        let frame = cue.advance(&config, 0.2, 0.25, 1.0, true);
        assert_relative_eq!(frame.loop_pitch.unwrap(), 1.25);
    }

    #[test]
    fn retrigger_while_looping_is_suppressed() {
        let config = crossfade_config();
        let mut cue = ChargeCue::new();
        cue.advance(&config, 10.0, 0.4, 10.0, false);

        // A strictly newer trigger arrives while the loop still plays: no
        // restart, and the volume ramp keeps following the original window.
        let frame = cue.advance(&config, 10.25, 0.6, 12.0, true);
        assert!(!frame.start_burst);
        assert!(!frame.start_loop);
        assert_relative_eq!(cue.last_trigger_timestamp(), 10.0);
        assert_relative_eq!(frame.burst_volume.unwrap(), 0.5);
    }

    #[test]
    fn stale_trigger_after_stop_does_not_restart() {
        let config = crossfade_config();
        let mut cue = ChargeCue::new();
        cue.advance(&config, 10.0, 0.4, 10.0, false);
        cue.advance(&config, 10.5, 0.0, 10.0, false);

        // Loop stopped, but the trigger did not move forward.
        let frame = cue.advance(&config, 11.0, 0.4, 10.0, false);
        assert!(!frame.start_burst);
        assert!(!frame.start_loop);
    }

    #[test]
    fn release_stops_regardless_of_mode() {
        let mut crossfade = ChargeCue::new();
        crossfade.advance(&crossfade_config(), 0.0, 0.3, 0.5, false);
        let frame = crossfade.advance(&crossfade_config(), 0.1, 0.0, 0.5, true);
        assert!(frame.stop);
        assert!(frame.burst_volume.is_none());

        let mut procedural = ChargeCue::new();
        procedural.advance(&procedural_config(2.0), 0.0, 0.3, 0.5, false);
        let frame = procedural.advance(&procedural_config(2.0), 0.1, -0.5, 0.5, true);
        assert!(frame.stop);
        assert!(frame.loop_pitch.is_none());
    }

    #[test]
    fn idle_before_any_trigger_shapes_silence() {
        // Charging without ever seeing a trigger edge keeps the burst muted
        // and the loop level at full; nothing was started so nothing sounds.
        let mut cue = ChargeCue::new();
        let frame = cue.advance(&crossfade_config(), 5.0, 0.2, 0.0, false);
        assert!(!frame.start_loop);
        assert_relative_eq!(frame.burst_volume.unwrap(), 0.0);
        assert_relative_eq!(frame.loop_volume.unwrap(), 1.0);
    }
}
