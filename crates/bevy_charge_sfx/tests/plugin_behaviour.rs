use bevy::asset::AssetPlugin;
use bevy::audio::{AudioPlayer, AudioSource};
use bevy::prelude::Messages;
use bevy::prelude::*;
use bevy_charge_sfx::{
    ChargeCycleEnded, ChargeCycleStarted, ChargeSfxConfig, ChargedSfx, ChargedSfxPlayback,
    ChargedSfxPlugin, WeaponChargeState,
};
use std::sync::Arc;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, AssetPlugin::default()));
    app.init_asset::<AudioSource>();
    // Diagnostics need the engine's diagnostics plugin; not under test here.
    app.add_plugins(ChargedSfxPlugin::default().configure(|config| {
        config.diagnostics = false;
    }));
    app
}

fn silent_clip(app: &mut App) -> Handle<AudioSource> {
    let mut assets = app.world_mut().resource_mut::<Assets<AudioSource>>();
    assets.add(AudioSource {
        bytes: Arc::from(vec![0u8; 16]),
    })
}

fn spawn_charged_weapon(app: &mut App, charge: f32, trigger: f32) -> Entity {
    let buildup = silent_clip(app);
    let loop_clip = silent_clip(app);
    app.world_mut()
        .spawn((
            WeaponChargeState {
                charge,
                last_trigger_timestamp: trigger,
            },
            ChargedSfx::new(
                buildup,
                loop_clip,
                ChargeSfxConfig::new(1.0).with_fade_duration(0.5),
            ),
        ))
        .id()
}

#[test]
fn rising_edge_starts_cycle_once() {
    let mut app = test_app();
    let entity = spawn_charged_weapon(&mut app, 0.5, 1.0);

    app.update();

    let playback = app.world().entity(entity).get::<ChargedSfxPlayback>().unwrap();
    assert!(playback.is_charging());
    assert!(!playback.is_degraded());

    let burst_entity = playback.burst_entity();
    let loop_entity = playback.loop_entity();
    assert!(
        app.world().entity(burst_entity).get::<AudioPlayer>().is_some(),
        "burst sink should have a player after the rising edge"
    );
    assert!(app.world().entity(loop_entity).get::<AudioPlayer>().is_some());
    assert_eq!(
        app.world().resource::<Messages<ChargeCycleStarted>>().len(),
        1
    );
}

#[test]
fn retrigger_while_looping_is_suppressed() {
    let mut app = test_app();
    let entity = spawn_charged_weapon(&mut app, 0.5, 1.0);

    app.update();

    // A strictly newer trigger arrives while the loop still plays.
    app.world_mut()
        .entity_mut(entity)
        .get_mut::<WeaponChargeState>()
        .unwrap()
        .last_trigger_timestamp = 2.0;

    app.update();

    assert_eq!(
        app.world().resource::<Messages<ChargeCycleStarted>>().len(),
        1,
        "no second cycle while the loop sink keeps playing"
    );
}

#[test]
fn release_silences_both_sinks() {
    let mut app = test_app();
    let entity = spawn_charged_weapon(&mut app, 0.3, 1.0);

    app.update();

    app.world_mut()
        .entity_mut(entity)
        .get_mut::<WeaponChargeState>()
        .unwrap()
        .release();

    app.update();

    let playback = app.world().entity(entity).get::<ChargedSfxPlayback>().unwrap();
    assert!(!playback.is_charging());
    assert!(
        app.world()
            .entity(playback.burst_entity())
            .get::<AudioPlayer>()
            .is_none(),
        "burst player should be torn down on release"
    );
    assert!(
        app.world()
            .entity(playback.loop_entity())
            .get::<AudioPlayer>()
            .is_none()
    );
    assert_eq!(app.world().resource::<Messages<ChargeCycleEnded>>().len(), 1);
}

#[test]
fn missing_weapon_state_degrades_instead_of_panicking() {
    let mut app = test_app();
    let buildup = silent_clip(&mut app);
    let loop_clip = silent_clip(&mut app);

    let entity = app
        .world_mut()
        .spawn(ChargedSfx::new(
            buildup,
            loop_clip,
            ChargeSfxConfig::new(1.0),
        ))
        .id();

    app.update();
    app.update();

    let playback = app.world().entity(entity).get::<ChargedSfxPlayback>().unwrap();
    assert!(playback.is_degraded());
    assert!(!playback.is_charging());
}

#[test]
fn invalid_fade_duration_degrades_at_attach() {
    let mut app = test_app();
    let buildup = silent_clip(&mut app);
    let loop_clip = silent_clip(&mut app);

    let entity = app
        .world_mut()
        .spawn((
            WeaponChargeState {
                charge: 1.0,
                last_trigger_timestamp: 1.0,
            },
            ChargedSfx::new(
                buildup,
                loop_clip,
                ChargeSfxConfig::new(1.0).with_fade_duration(0.0),
            ),
        ))
        .id();

    app.update();
    app.update();

    let playback = app.world().entity(entity).get::<ChargedSfxPlayback>().unwrap();
    assert!(playback.is_degraded());
    assert_eq!(
        app.world().resource::<Messages<ChargeCycleStarted>>().len(),
        0,
        "a degraded cue never starts a cycle"
    );
}
