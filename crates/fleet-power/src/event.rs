//! Typed power-state transition notifications.

use fleet_core::EntityId;

/// A state transition of the battery state machine.
///
/// Events are buffered inside the wrapper and drained by the driver via
/// [`BatteryDecorator::take_events`][crate::BatteryDecorator::take_events],
/// which forwards them to the simulation observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerEvent {
    /// Charge dropped to the low threshold mid-delivery; heading to
    /// `station` to recharge.
    LowBatteryDiversion { station: EntityId },

    /// Arrived at the facility from a low-battery diversion; charging.
    DockedCharging,

    /// The entity went idle away from a facility; heading to `station` to
    /// stand by.
    StandbyDiversion { station: EntityId },

    /// Arrived at the standby facility.
    StandbyDocked,

    /// Charge reached full; returning to normal operation.
    FullyCharged,

    /// Charge hit zero away from a facility.  The entity is frozen until
    /// external intervention — there is deliberately no recovery path.
    Depleted,
}
