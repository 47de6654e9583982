use bevy::prelude::*;

/// Fired when a weapon entity's charge cue starts sounding (rising edge of
/// the trigger timestamp while the loop sink was stopped).
#[derive(Event, Message, Clone, Debug)]
pub struct ChargeCycleStarted {
    /// The weapon entity carrying the cue.
    pub entity: Entity,
}

/// Fired when a weapon entity's charge cue is silenced (charge ratio dropped
/// to zero or below).
#[derive(Event, Message, Clone, Debug)]
pub struct ChargeCycleEnded {
    /// The weapon entity carrying the cue.
    pub entity: Entity,
}
