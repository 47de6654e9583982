//! Bevy plugin for charged-weapon audio cues.
//!
//! Layers a one-shot "charge build-up" clip and a looping "fully charged"
//! clip on top of a weapon entity, cross-faded by time or reshaped by
//! procedural pitch, using the engine-agnostic
//! [charge_sfx](charge_sfx) cue logic.
//!
//! The plugin handles the whole lifecycle through Bevy's ECS:
//! - Sink-entity creation when a [`ChargedSfx`] component is attached
//! - Per-frame cue advancement from the entity's [`WeaponChargeState`]
//! - Starting, stopping and shaping playback through `bevy_audio`
//! - Mix-group gains, lifecycle messages and diagnostics
//!
//! # Quick Start
//!
//! ```no_run
//! use bevy::prelude::*;
//! use bevy_charge_sfx::{ChargedSfx, ChargedSfxPlugin, WeaponChargeState};
//! use charge_sfx::ChargeSfxConfig;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(ChargedSfxPlugin::default())
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands, assets: Res<AssetServer>) {
//!     commands.spawn((
//!         WeaponChargeState::default(),
//!         ChargedSfx::new(
//!             assets.load("sfx/charge_buildup.ogg"),
//!             assets.load("sfx/charge_loop.ogg"),
//!             ChargeSfxConfig::new(1.2),
//!         ),
//!     ));
//! }
//! ```
//!
//! Game code drives the cue by writing the entity's [`WeaponChargeState`]:
//! call [`WeaponChargeState::begin_cycle`] when the player starts charging
//! and keep `charge` up to date; dropping it to zero releases the cue.
//!
//! # Module Organization
//!
//! - [`components`] - weapon-state provider, authoring and runtime components
//! - [`plugin`] - plugin registration and configuration flags
//! - [`events`] - per-entity charge lifecycle messages
//! - [`profile`] - RON profile assets for data-driven authoring
//! - [`diagnostics`] - engine diagnostics integration

pub mod components;
pub mod diagnostics;
pub mod events;
pub mod plugin;
pub mod profile;

mod systems;

pub use charge_sfx::{
    ChargeCue, ChargeMixGroup, ChargeSfxConfig, ChargeSfxError, CueFrame, WeaponChargeSource,
};
pub use components::{
    ChargeSinkBus, ChargedSfx, ChargedSfxPlayback, ChargedSfxSettings, WeaponChargeState,
};
pub use diagnostics::{CHARGE_RATIO_PATH, update_diagnostics};
pub use events::{ChargeCycleEnded, ChargeCycleStarted};
pub use plugin::{ChargedSfxPlugin, ChargedSfxPluginConfig};
pub use profile::{ChargedSfxFromProfile, ChargedSfxProfile, ChargedSfxProfileLoader};
