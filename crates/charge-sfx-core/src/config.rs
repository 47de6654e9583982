//! Author-time configuration for a charged-weapon cue.

use crate::error::{ChargeSfxError, Result};
use serde::{Deserialize, Serialize};

/// Default cross-fade duration between the build-up and loop sounds.
pub const DEFAULT_FADE_DURATION: f32 = 0.5;

/// Default maximum pitch multiplier in procedural-pitch mode.
pub const DEFAULT_MAX_PROCEDURAL_PITCH: f32 = 2.0;

/// Lower bound of the procedural pitch multiplier.
pub const PROCEDURAL_PITCH_MIN: f32 = 1.0;

/// Upper bound of the procedural pitch multiplier.
pub const PROCEDURAL_PITCH_MAX: f32 = 5.0;

/// Author-time constants describing how a charge cue sounds.
///
/// Two shaping modes exist:
///
/// - **Crossfade** (default): the one-shot build-up clip plays over the loop
///   and the two volumes cross linearly inside a `fade_duration` window at
///   the end of the build-up.
/// - **Procedural pitch**: the build-up clip is skipped entirely and the
///   loop's pitch tracks the charge ratio instead, from 1.0 up to
///   `max_procedural_pitch`.
///
/// Values are plain data; call [`validate`](Self::validate) (or construct a
/// [`ChargeSfxController`](crate::ChargeSfxController), which does) before
/// ticking with them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeSfxConfig {
    /// Length of the build-up clip in seconds. Used to derive the end of the
    /// build-up window after a trigger.
    pub buildup_duration: f32,
    /// Duration of the cross-fade between the build-up and loop sounds.
    pub fade_duration: f32,
    /// When true, the build-up clip is ignored and the loop pitch is driven
    /// by the charge ratio.
    pub procedural_pitch: bool,
    /// Pitch multiplier reached at full charge in procedural-pitch mode.
    pub max_procedural_pitch: f32,
}

impl Default for ChargeSfxConfig {
    fn default() -> Self {
        Self {
            buildup_duration: 0.0,
            fade_duration: DEFAULT_FADE_DURATION,
            procedural_pitch: false,
            max_procedural_pitch: DEFAULT_MAX_PROCEDURAL_PITCH,
        }
    }
}

impl ChargeSfxConfig {
    /// Create a configuration for a build-up clip of the given length.
    pub fn new(buildup_duration: f32) -> Self {
        Self {
            buildup_duration,
            ..Self::default()
        }
    }

    /// Override the cross-fade duration.
    ///
    /// Not clamped here; [`validate`](Self::validate) rejects non-positive
    /// values.
    pub fn with_fade_duration(mut self, seconds: f32) -> Self {
        self.fade_duration = seconds;
        self
    }

    /// Enable or disable procedural-pitch mode.
    pub fn with_procedural_pitch(mut self, enabled: bool) -> Self {
        self.procedural_pitch = enabled;
        self
    }

    /// Set the full-charge pitch multiplier, clamped into
    /// [[`PROCEDURAL_PITCH_MIN`], [`PROCEDURAL_PITCH_MAX`]].
    pub fn with_max_procedural_pitch(mut self, pitch: f32) -> Self {
        self.max_procedural_pitch = pitch.clamp(PROCEDURAL_PITCH_MIN, PROCEDURAL_PITCH_MAX);
        self
    }

    /// Validate the configuration for use on the tick path.
    ///
    /// The fade window is a divisor in the crossfade formula, so a zero or
    /// negative `fade_duration` is rejected up front instead of surfacing as
    /// a division by zero mid-game.
    pub fn validate(&self) -> Result<()> {
        if !self.fade_duration.is_finite() || self.fade_duration <= 0.0 {
            return Err(ChargeSfxError::invalid_config(format!(
                "fade_duration must be a positive number of seconds, got {}",
                self.fade_duration
            )));
        }
        if !self.buildup_duration.is_finite() || self.buildup_duration < 0.0 {
            return Err(ChargeSfxError::invalid_config(format!(
                "buildup_duration must be a non-negative number of seconds, got {}",
                self.buildup_duration
            )));
        }
        if !self.max_procedural_pitch.is_finite()
            || !(PROCEDURAL_PITCH_MIN..=PROCEDURAL_PITCH_MAX).contains(&self.max_procedural_pitch)
        {
            return Err(ChargeSfxError::invalid_config(format!(
                "max_procedural_pitch must lie in [{PROCEDURAL_PITCH_MIN}, {PROCEDURAL_PITCH_MAX}], got {}",
                self.max_procedural_pitch
            )));
        }
        Ok(())
    }
}
