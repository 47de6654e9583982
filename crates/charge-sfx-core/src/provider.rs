//! Read-only view of the weapon state the controller reacts to.

/// Interface to the external weapon-state provider.
///
/// The controller reads this once per tick and never mutates it. A new
/// charge cycle is signalled by `last_trigger_timestamp` moving strictly
/// forward; the provider is expected to keep it monotonically
/// non-decreasing.
///
/// # Output Range
///
/// `current_charge` is nominally in [0.0, 1.0]; the controller does not
/// clamp it. Values ≤ 0.0 mean "not charging" and silence both sinks.
pub trait WeaponChargeSource {
    /// Current charge ratio of the weapon.
    fn current_charge(&self) -> f32;

    /// Time at which the current charge cycle began, in seconds on the same
    /// clock the controller is ticked with.
    fn last_trigger_timestamp(&self) -> f32;
}

impl<P: WeaponChargeSource + ?Sized> WeaponChargeSource for &P {
    fn current_charge(&self) -> f32 {
        (**self).current_charge()
    }

    fn last_trigger_timestamp(&self) -> f32 {
        (**self).last_trigger_timestamp()
    }
}
