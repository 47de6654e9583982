//! Components and resources for charged-weapon audio cues.
//!
//! Three components cooperate per weapon entity:
//!
//! - [`WeaponChargeState`] is the provider surface written by game code
//! - [`ChargedSfx`] is the author-time wiring (clips + configuration)
//! - [`ChargedSfxPlayback`] is the runtime state the plugin inserts and owns
//!
//! The plugin's systems are the only writers of [`ChargedSfxPlayback`];
//! game code reads it for introspection at most.

use bevy::audio::AudioSource;
use bevy::prelude::*;
use charge_sfx::{ChargeCue, ChargeMixGroup, ChargeSfxConfig, WeaponChargeSource};

/// Weapon charge state exposed to the audio cue.
///
/// This is the read side of the weapon controller: gameplay code keeps
/// `charge` current and stamps `last_trigger_timestamp` when a new charge
/// cycle begins. The audio systems never write it.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct WeaponChargeState {
    /// Charge ratio, nominally in [0.0, 1.0]. Zero or below means idle.
    pub charge: f32,
    /// Time the current charge cycle began, in seconds of `Time` elapsed.
    /// Must be monotonically non-decreasing across cycles.
    pub last_trigger_timestamp: f32,
}

impl WeaponChargeState {
    /// Stamp the beginning of a new charge cycle.
    pub fn begin_cycle(&mut self, now: f32) {
        self.last_trigger_timestamp = now;
    }

    /// Release the charge; the cue silences both sinks on the next tick.
    pub fn release(&mut self) {
        self.charge = 0.0;
    }
}

impl WeaponChargeSource for WeaponChargeState {
    fn current_charge(&self) -> f32 {
        self.charge
    }

    fn last_trigger_timestamp(&self) -> f32 {
        self.last_trigger_timestamp
    }
}

/// Author-time wiring for a charged weapon's audio cue.
#[derive(Component, Clone)]
pub struct ChargedSfx {
    /// One-shot clip played while the charge builds up.
    pub buildup_clip: Handle<AudioSource>,
    /// Clip looped while the weapon holds a charge.
    pub loop_clip: Handle<AudioSource>,
    /// Shaping configuration. Validated when playback is initialized.
    pub config: ChargeSfxConfig,
}

impl ChargedSfx {
    /// Wire a cue from two clip handles and a configuration.
    pub fn new(
        buildup_clip: Handle<AudioSource>,
        loop_clip: Handle<AudioSource>,
        config: ChargeSfxConfig,
    ) -> Self {
        Self {
            buildup_clip,
            loop_clip,
            config,
        }
    }
}

/// Runtime playback state for a charged weapon's audio cue.
///
/// Inserted by the plugin's initialization system; the two sink entities are
/// spawned once at that point and reused for the component's lifetime.
#[derive(Component)]
pub struct ChargedSfxPlayback {
    pub(crate) cue: ChargeCue,
    pub(crate) burst_entity: Entity,
    pub(crate) loop_entity: Entity,
    pub(crate) burst_active: bool,
    pub(crate) loop_active: bool,
    pub(crate) degraded: bool,
}

impl ChargedSfxPlayback {
    pub(crate) fn new(burst_entity: Entity, loop_entity: Entity) -> Self {
        Self {
            cue: ChargeCue::new(),
            burst_entity,
            loop_entity,
            burst_active: false,
            loop_active: false,
            degraded: false,
        }
    }

    /// Entity carrying the one-shot build-up player.
    pub fn burst_entity(&self) -> Entity {
        self.burst_entity
    }

    /// Entity carrying the looping full-charge player.
    pub fn loop_entity(&self) -> Entity {
        self.loop_entity
    }

    /// Whether a charge cycle is currently sounding.
    pub fn is_charging(&self) -> bool {
        self.loop_active
    }

    /// Charge ratio recorded on the most recent tick.
    pub fn charge_ratio(&self) -> f32 {
        self.cue.charge_ratio()
    }

    /// Whether initialization failed and this cue will never tick.
    ///
    /// Set when the weapon entity lacked a [`WeaponChargeState`] or carried
    /// an invalid configuration; the error was logged at attach time.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

/// Mix group a sink entity's output is routed through.
///
/// The plugin tags the spawned sink entities with this so gain buses and
/// game-side audio tooling can find them.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeSinkBus(pub ChargeMixGroup);

/// Global gain settings for all charge cues.
///
/// Applied on top of the per-tick volumes the cue computes; `master_volume`
/// scales both buses, the per-group fields scale one each.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ChargedSfxSettings {
    /// Master multiplier across both mix groups (0.0 - 1.0).
    pub master_volume: f32,
    /// Gain of the build-up bus (0.0 - 1.0).
    pub buildup_volume: f32,
    /// Gain of the loop bus (0.0 - 1.0).
    pub loop_volume: f32,
}

impl Default for ChargedSfxSettings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            buildup_volume: 1.0,
            loop_volume: 1.0,
        }
    }
}

impl ChargedSfxSettings {
    /// Effective gain for one mix group, clamped to [0.0, 1.0].
    pub fn group_volume(&self, group: ChargeMixGroup) -> f32 {
        let bus = match group {
            ChargeMixGroup::Buildup => self.buildup_volume,
            ChargeMixGroup::Loop => self.loop_volume,
        };
        (self.master_volume * bus).clamp(0.0, 1.0)
    }
}
