//! Hold SPACE to charge a plasma shot, release to fire.
//!
//! Demonstrates wiring a weapon entity with `WeaponChargeState` +
//! `ChargedSfx` and driving the charge ratio from input.

use bevy::prelude::*;
use bevy_charge_sfx::{ChargeCycleEnded, ChargeCycleStarted, ChargedSfx, ChargedSfxPlugin, WeaponChargeState};
use charge_sfx::ChargeSfxConfig;

/// Seconds of held input to reach full charge.
const CHARGE_TIME: f32 = 1.5;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(ChargedSfxPlugin::default())
        .add_systems(Startup, setup)
        .add_systems(Update, (charge_from_input, log_cycles))
        .run();
}

fn setup(mut commands: Commands, assets: Res<AssetServer>) {
    commands.spawn(Camera2d);

    commands.spawn((
        WeaponChargeState::default(),
        ChargedSfx::new(
            assets.load("sfx/charge_buildup.ogg"),
            assets.load("sfx/charge_loop.ogg"),
            ChargeSfxConfig::new(1.2).with_fade_duration(0.4),
        ),
    ));
}

fn charge_from_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut weapons: Query<&mut WeaponChargeState>,
) {
    for mut weapon in weapons.iter_mut() {
        if keyboard.just_pressed(KeyCode::Space) {
            weapon.begin_cycle(time.elapsed_secs());
        }

        if keyboard.pressed(KeyCode::Space) {
            let charge = (weapon.charge + time.delta_secs() / CHARGE_TIME).min(1.0);
            weapon.charge = charge;
        } else if weapon.charge > 0.0 {
            weapon.release();
        }
    }
}

fn log_cycles(
    mut started: MessageReader<ChargeCycleStarted>,
    mut ended: MessageReader<ChargeCycleEnded>,
) {
    for message in started.read() {
        info!("charge cycle started on {:?}", message.entity);
    }
    for message in ended.read() {
        info!("charge cycle ended on {:?}", message.entity);
    }
}
