//! Plugin orchestration for charged-weapon audio cues within Bevy.

use crate::components::ChargedSfxSettings;
use crate::diagnostics;
use crate::events::{ChargeCycleEnded, ChargeCycleStarted};
use crate::profile::{ChargedSfxProfile, ChargedSfxProfileLoader, resolve_charged_sfx_profiles};
use crate::systems::{drive_charged_sfx, initialize_charged_sfx};
use bevy::prelude::*;

/// Configuration object used to enable/disable individual subsystems of the
/// plugin.
#[derive(Debug, Clone, Resource)]
pub struct ChargedSfxPluginConfig {
    /// Emit [`ChargeCycleStarted`]/[`ChargeCycleEnded`] messages.
    pub cycle_events: bool,
    /// Register and update engine diagnostics.
    pub diagnostics: bool,
    /// Register the RON profile asset and its resolution system.
    pub profiles: bool,
}

impl Default for ChargedSfxPluginConfig {
    fn default() -> Self {
        Self {
            cycle_events: true,
            diagnostics: true,
            profiles: true,
        }
    }
}

impl ChargedSfxPluginConfig {
    /// Enable or disable lifecycle messages.
    pub fn cycle_events(mut self, enabled: bool) -> Self {
        self.cycle_events = enabled;
        self
    }

    /// Enable or disable diagnostics integration.
    pub fn diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Enable or disable RON profile support.
    pub fn profiles(mut self, enabled: bool) -> Self {
        self.profiles = enabled;
        self
    }
}

/// Bevy plugin wiring charged-weapon audio cues into an application.
#[derive(Default)]
pub struct ChargedSfxPlugin {
    config: ChargedSfxPluginConfig,
}

impl ChargedSfxPlugin {
    /// Create a plugin instance with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plugin instance using the provided configuration.
    pub fn with_config(config: ChargedSfxPluginConfig) -> Self {
        Self { config }
    }

    /// Apply mutations to the internal configuration prior to registering.
    pub fn configure(mut self, configure: impl FnOnce(&mut ChargedSfxPluginConfig)) -> Self {
        configure(&mut self.config);
        self
    }

    /// Access the current configuration.
    pub fn config(&self) -> &ChargedSfxPluginConfig {
        &self.config
    }
}

impl Plugin for ChargedSfxPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());
        app.init_resource::<ChargedSfxSettings>();

        // Message channels always exist; emission is gated by the config so
        // disabling them costs nothing at runtime.
        app.add_message::<ChargeCycleStarted>();
        app.add_message::<ChargeCycleEnded>();

        app.add_systems(PreUpdate, initialize_charged_sfx);
        app.add_systems(Update, drive_charged_sfx);

        if self.config.profiles {
            app.init_asset::<ChargedSfxProfile>();
            app.init_asset_loader::<ChargedSfxProfileLoader>();
            app.add_systems(
                Update,
                resolve_charged_sfx_profiles.before(drive_charged_sfx),
            );
        }

        if self.config.diagnostics {
            diagnostics::register(app);
            app.add_systems(Update, diagnostics::update_diagnostics);
        }
    }
}
