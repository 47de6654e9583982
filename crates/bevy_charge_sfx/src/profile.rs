//! RON profile assets for data-driven cue authoring.
//!
//! A profile carries the full author-time surface of a charge cue (the two
//! clip paths plus its [`ChargeSfxConfig`]) so sound designers can tune
//! weapons without touching code:
//!
//! ```ron
//! (
//!     buildup_clip: "sfx/plasma_buildup.ogg",
//!     loop_clip: "sfx/plasma_loop.ogg",
//!     config: (
//!         buildup_duration: 1.2,
//!         fade_duration: 0.4,
//!         procedural_pitch: false,
//!         max_procedural_pitch: 2.0,
//!     ),
//! )
//! ```

use crate::components::ChargedSfx;
use bevy::asset::{AssetLoader, LoadContext, io::Reader};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use charge_sfx::ChargeSfxConfig;
use serde::Deserialize;

const PROFILE_EXTENSIONS: &[&str] = &["chargesfx.ron", "chargesfx"];

/// Profile asset describing one charged weapon's cue.
#[derive(Asset, Clone, Debug, TypePath, Deserialize)]
pub struct ChargedSfxProfile {
    /// Asset path of the one-shot build-up clip.
    pub buildup_clip: String,
    /// Asset path of the full-charge loop clip.
    pub loop_clip: String,
    /// Shaping configuration.
    #[serde(default)]
    pub config: ChargeSfxConfig,
}

/// Loader for `.chargesfx.ron` assets.
#[derive(Default)]
pub struct ChargedSfxProfileLoader;

impl AssetLoader for ChargedSfxProfileLoader {
    type Asset = ChargedSfxProfile;
    type Settings = ();
    type Error = anyhow::Error;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        let profile: ChargedSfxProfile = ron::de::from_bytes(&bytes)?;
        Ok(profile)
    }

    fn extensions(&self) -> &[&str] {
        PROFILE_EXTENSIONS
    }
}

/// Component requesting that a cue be wired from a profile asset.
///
/// Once the asset is loaded, [`resolve_charged_sfx_profiles`] replaces the
/// request with a concrete [`ChargedSfx`] component.
#[derive(Component, Clone)]
pub struct ChargedSfxFromProfile(pub Handle<ChargedSfxProfile>);

/// Resolve loaded profile assets into [`ChargedSfx`] components.
pub fn resolve_charged_sfx_profiles(
    mut commands: Commands,
    pending: Query<(Entity, &ChargedSfxFromProfile), Without<ChargedSfx>>,
    profiles: Res<Assets<ChargedSfxProfile>>,
    asset_server: Res<AssetServer>,
) {
    for (entity, request) in pending.iter() {
        let Some(profile) = profiles.get(&request.0) else {
            // Asset not ready yet; try again next frame.
            continue;
        };

        commands.entity(entity).insert(ChargedSfx::new(
            asset_server.load(&profile.buildup_clip),
            asset_server.load(&profile.loop_clip),
            profile.config,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_deserializes_from_ron() {
        let source = r#"(
            buildup_clip: "sfx/buildup.ogg",
            loop_clip: "sfx/loop.ogg",
            config: (
                buildup_duration: 1.5,
                fade_duration: 0.25,
            ),
        )"#;

        let profile: ChargedSfxProfile = ron::de::from_str(source).unwrap();
        assert_eq!(profile.buildup_clip, "sfx/buildup.ogg");
        assert_eq!(profile.config.buildup_duration, 1.5);
        assert_eq!(profile.config.fade_duration, 0.25);
        // Omitted fields fall back to their defaults.
        assert!(!profile.config.procedural_pitch);
    }

    #[test]
    fn profile_config_defaults_when_omitted() {
        let source = r#"(
            buildup_clip: "a.ogg",
            loop_clip: "b.ogg",
        )"#;

        let profile: ChargedSfxProfile = ron::de::from_str(source).unwrap();
        assert!(profile.config.validate().is_ok());
    }
}
