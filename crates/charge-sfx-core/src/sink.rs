//! Capability trait for the two audio sinks a charge cue drives.

/// Minimal playback surface the controller needs from an audio sink.
///
/// Concrete sinks are created by the host once, at attach time, each with
/// its clip and routing already configured:
///
/// - the **burst** sink carries the one-shot build-up clip and must not loop
/// - the **loop** sink carries the fully-charged clip and must loop
///
/// # Implementation Requirements
///
/// - `play()` restarts the clip from the beginning
/// - `stop()` is idempotent; stopping a stopped sink is a no-op
/// - `set_volume` receives values in [0.0, 1.0]
/// - `set_pitch` receives multipliers ≥ 1.0 (1.0 = unmodified)
pub trait ChargeSink {
    /// Start playing the sink's clip from the beginning.
    fn play(&mut self);

    /// Stop playback.
    fn stop(&mut self);

    /// Whether the sink is currently playing.
    fn is_playing(&self) -> bool;

    /// Set the playback volume (0.0 = silent, 1.0 = full).
    fn set_volume(&mut self, volume: f32);

    /// Set the playback pitch multiplier (1.0 = unmodified).
    fn set_pitch(&mut self, pitch: f32);
}

impl<S: ChargeSink + ?Sized> ChargeSink for Box<S> {
    fn play(&mut self) {
        (**self).play();
    }

    fn stop(&mut self) {
        (**self).stop();
    }

    fn is_playing(&self) -> bool {
        (**self).is_playing()
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume);
    }

    fn set_pitch(&mut self, pitch: f32) {
        (**self).set_pitch(pitch);
    }
}

/// Boxed sink for hosts that pick implementations at runtime.
pub type BoxedChargeSink = Box<dyn ChargeSink + Send>;

/// Output routing group a sink is mixed through.
///
/// Hosts map these onto their mixer topology; the controller itself only
/// tags sinks, it never mixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargeMixGroup {
    /// Bus carrying the one-shot build-up sound.
    Buildup,
    /// Bus carrying the sustained full-charge loop.
    Loop,
}
