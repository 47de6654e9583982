//! Engine-agnostic charged-weapon audio cue controller.
//!
//! A weapon that charges up wants two layered sounds: a one-shot build-up
//! clip while the charge rises, and a sustained loop once the charge is held.
//! This crate implements the controller that decides, every tick, what those
//! two sinks should do: start, stop, and how loud (or how high-pitched)
//! they should be.
//!
//! # Architecture
//!
//! - [`ChargeCue`] - pure per-tick state machine; feed it the clock, the
//!   charge ratio and the trigger timestamp, get back a [`CueFrame`] of sink
//!   commands
//! - [`ChargeSfxController`] - owns the two sinks behind the [`ChargeSink`]
//!   capability trait and applies cue frames to them
//! - [`WeaponChargeSource`] - read-only view of the weapon state this
//!   controller reacts to
//!
//! The split keeps the decision logic testable without any audio subsystem:
//! a host engine can either hand its sinks to [`ChargeSfxController`], or
//! run [`ChargeCue`] directly and translate frames itself.
//!
//! # Example
//!
//! ```ignore
//! use charge_sfx::{ChargeSfxConfig, ChargeSfxController};
//!
//! let config = ChargeSfxConfig::new(1.2).with_fade_duration(0.5);
//! let mut controller = ChargeSfxController::new(config, burst, loop_sink)?;
//!
//! // once per frame:
//! controller.update(now, &weapon);
//! ```

#![warn(missing_docs)]

mod config;
mod controller;
mod cue;
mod error;
mod provider;
mod sink;
pub mod util;

pub use config::{
    ChargeSfxConfig, DEFAULT_FADE_DURATION, DEFAULT_MAX_PROCEDURAL_PITCH, PROCEDURAL_PITCH_MAX,
    PROCEDURAL_PITCH_MIN,
};
pub use controller::ChargeSfxController;
pub use cue::{ChargeCue, CueFrame};
pub use error::{ChargeSfxError, Result};
pub use provider::WeaponChargeSource;
pub use sink::{BoxedChargeSink, ChargeMixGroup, ChargeSink};
