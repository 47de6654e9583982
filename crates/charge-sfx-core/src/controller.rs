//! Sink-owning controller built on top of the pure cue.

use crate::config::ChargeSfxConfig;
use crate::cue::{ChargeCue, CueFrame};
use crate::error::Result;
use crate::provider::WeaponChargeSource;
use crate::sink::ChargeSink;

/// Charged-weapon audio cue controller.
///
/// Owns the burst and loop sinks for its whole lifetime and drives them from
/// a [`ChargeCue`]. Both sinks are handed in fully configured (clip, loop
/// flag, routing) at construction; the controller only ever issues
/// play/stop/volume/pitch commands.
///
/// # Example
///
/// ```ignore
/// let mut controller = ChargeSfxController::new(config, burst, loop_sink)?;
/// loop {
///     controller.update(clock.now(), &weapon);
/// }
/// ```
pub struct ChargeSfxController<B: ChargeSink, L: ChargeSink> {
    config: ChargeSfxConfig,
    cue: ChargeCue,
    burst: B,
    loop_sink: L,
}

impl<B: ChargeSink, L: ChargeSink> ChargeSfxController<B, L> {
    /// Build a controller from a validated configuration and two sinks.
    ///
    /// Fails with [`ChargeSfxError::InvalidConfig`](crate::ChargeSfxError)
    /// if the configuration does not pass
    /// [`ChargeSfxConfig::validate`].
    pub fn new(config: ChargeSfxConfig, burst: B, loop_sink: L) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cue: ChargeCue::new(),
            burst,
            loop_sink,
        })
    }

    /// Run one tick: read the provider, advance the cue, apply the frame.
    ///
    /// Returns the applied frame so hosts can mirror it elsewhere (events,
    /// diagnostics).
    pub fn update(&mut self, now: f32, source: &impl WeaponChargeSource) -> CueFrame {
        let frame = self.cue.advance(
            &self.config,
            now,
            source.current_charge(),
            source.last_trigger_timestamp(),
            self.loop_sink.is_playing(),
        );
        self.apply(frame);
        frame
    }

    fn apply(&mut self, frame: CueFrame) {
        if frame.stop {
            self.burst.stop();
            self.loop_sink.stop();
            return;
        }

        // Starts precede shaping so the first audible frame already carries
        // the computed levels.
        if frame.start_burst {
            self.burst.play();
        }
        if frame.start_loop {
            self.loop_sink.play();
        }

        if let Some(volume) = frame.burst_volume {
            self.burst.set_volume(volume);
        }
        if let Some(volume) = frame.loop_volume {
            self.loop_sink.set_volume(volume);
        }
        if let Some(pitch) = frame.loop_pitch {
            self.loop_sink.set_pitch(pitch);
        }
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &ChargeSfxConfig {
        &self.config
    }

    /// Cue state, for inspection.
    pub fn cue(&self) -> &ChargeCue {
        &self.cue
    }

    /// Charge ratio recorded on the most recent tick.
    pub fn charge_ratio(&self) -> f32 {
        self.cue.charge_ratio()
    }

    /// The burst sink.
    pub fn burst_sink(&self) -> &B {
        &self.burst
    }

    /// The loop sink.
    pub fn loop_sink(&self) -> &L {
        &self.loop_sink
    }

    /// Tear the controller apart, returning the sinks to the host.
    pub fn into_sinks(self) -> (B, L) {
        (self.burst, self.loop_sink)
    }
}
