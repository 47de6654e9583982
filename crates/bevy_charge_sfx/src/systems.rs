//! Lifecycle and per-frame systems driving the charge cues.

use crate::components::{
    ChargeSinkBus, ChargedSfx, ChargedSfxPlayback, ChargedSfxSettings, WeaponChargeState,
};
use crate::events::{ChargeCycleEnded, ChargeCycleStarted};
use crate::plugin::ChargedSfxPluginConfig;
use bevy::audio::{AudioPlayer, AudioSink, AudioSource, PlaybackSettings, Volume};
use bevy::prelude::*;
use charge_sfx::{ChargeMixGroup, ChargeSfxError, WeaponChargeSource};

/// Create sink entities for freshly attached [`ChargedSfx`] components.
///
/// Runs in `PreUpdate` so a component added during `Update` is ready before
/// its first drive tick. The sink entities are spawned exactly once; a cue
/// whose wiring is unusable is inserted in a degraded state instead of being
/// retried every frame.
pub(crate) fn initialize_charged_sfx(
    mut commands: Commands,
    pending: Query<(Entity, &ChargedSfx, Option<&WeaponChargeState>), Without<ChargedSfxPlayback>>,
) {
    for (entity, sfx, weapon_state) in pending.iter() {
        // The cue needs its own sink entities since it plays on top of the
        // weapon's other sounds.
        let burst_entity = commands
            .spawn((ChargeSinkBus(ChargeMixGroup::Buildup), Name::new("charge buildup sink")))
            .id();
        let loop_entity = commands
            .spawn((ChargeSinkBus(ChargeMixGroup::Loop), Name::new("charge loop sink")))
            .id();

        let mut playback = ChargedSfxPlayback::new(burst_entity, loop_entity);

        if weapon_state.is_none() {
            let err = ChargeSfxError::missing_weapon_state(format!(
                "entity {entity:?} carries ChargedSfx without WeaponChargeState"
            ));
            error!("Charged SFX disabled: {err}");
            playback.degraded = true;
        } else if let Err(err) = sfx.config.validate() {
            error!("Charged SFX disabled on {entity:?}: {err}");
            playback.degraded = true;
        }

        commands.entity(entity).insert(playback);
    }
}

/// Advance every cue by one tick and apply the resulting sink commands.
pub(crate) fn drive_charged_sfx(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<ChargedSfxSettings>,
    config: Res<ChargedSfxPluginConfig>,
    mut cues: Query<(
        Entity,
        &ChargedSfx,
        &WeaponChargeState,
        &mut ChargedSfxPlayback,
    )>,
    mut audio_sinks: Query<&mut AudioSink>,
    mut started_events: MessageWriter<ChargeCycleStarted>,
    mut ended_events: MessageWriter<ChargeCycleEnded>,
) {
    let now = time.elapsed_secs();

    for (entity, sfx, weapon, mut playback) in cues.iter_mut() {
        if playback.degraded {
            continue;
        }

        let loop_playing = playback.loop_active;
        let frame = playback.cue.advance(
            &sfx.config,
            now,
            weapon.current_charge(),
            weapon.last_trigger_timestamp(),
            loop_playing,
        );

        if frame.stop {
            if playback.burst_active || playback.loop_active {
                stop_sink(&mut commands, &mut audio_sinks, playback.burst_entity);
                stop_sink(&mut commands, &mut audio_sinks, playback.loop_entity);
                playback.burst_active = false;
                playback.loop_active = false;
                if config.cycle_events {
                    ended_events.write(ChargeCycleEnded { entity });
                }
            }
            continue;
        }

        if frame.start_burst {
            let volume = frame.burst_volume.unwrap_or(1.0)
                * settings.group_volume(ChargeMixGroup::Buildup);
            start_sink(
                &mut commands,
                playback.burst_entity,
                sfx.buildup_clip.clone(),
                PlaybackSettings::ONCE.with_volume(Volume::Linear(volume)),
            );
            playback.burst_active = true;
        }

        if frame.start_loop {
            let volume =
                frame.loop_volume.unwrap_or(1.0) * settings.group_volume(ChargeMixGroup::Loop);
            start_sink(
                &mut commands,
                playback.loop_entity,
                sfx.loop_clip.clone(),
                PlaybackSettings::LOOP.with_volume(Volume::Linear(volume)),
            );
            playback.loop_active = true;
            if config.cycle_events {
                started_events.write(ChargeCycleStarted { entity });
            }
        }

        if let Some(level) = frame.burst_volume
            && let Ok(mut sink) = audio_sinks.get_mut(playback.burst_entity)
        {
            sink.set_volume(Volume::Linear(
                level * settings.group_volume(ChargeMixGroup::Buildup),
            ));
        }

        if let Some(level) = frame.loop_volume
            && let Ok(mut sink) = audio_sinks.get_mut(playback.loop_entity)
        {
            sink.set_volume(Volume::Linear(
                level * settings.group_volume(ChargeMixGroup::Loop),
            ));
        }

        if let Some(pitch) = frame.loop_pitch
            && let Ok(mut sink) = audio_sinks.get_mut(playback.loop_entity)
        {
            sink.set_speed(pitch);
        }
    }
}

/// (Re)start a sink entity's player from the beginning of its clip.
///
/// Replacing the `AudioPlayer`/`AudioSink` pair is the engine's way of
/// seeking to zero; inserting over a live player restarts decoding.
fn start_sink(
    commands: &mut Commands,
    sink_entity: Entity,
    clip: Handle<AudioSource>,
    playback_settings: PlaybackSettings,
) {
    commands
        .entity(sink_entity)
        .remove::<AudioSink>()
        .remove::<AudioPlayer>()
        .insert((AudioPlayer(clip), playback_settings));
}

fn stop_sink(
    commands: &mut Commands,
    audio_sinks: &mut Query<&mut AudioSink>,
    sink_entity: Entity,
) {
    if let Ok(sink) = audio_sinks.get_mut(sink_entity) {
        sink.stop();
    }
    commands
        .entity(sink_entity)
        .remove::<AudioSink>()
        .remove::<AudioPlayer>();
}
