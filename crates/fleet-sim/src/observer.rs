//! Simulation observer trait for progress reporting and transition logging.

use fleet_core::EntityId;
use fleet_power::PowerEvent;

/// Callbacks invoked by [`SimulationModel::run`][crate::SimulationModel::run]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  State transitions reach tests and
/// tooling through [`on_power_event`][SimObserver::on_power_event] instead
/// of console output interleaved with the state machine.
///
/// # Example — transition printer
///
/// ```rust,ignore
/// struct TransitionPrinter;
///
/// impl SimObserver for TransitionPrinter {
///     fn on_power_event(&mut self, agent: EntityId, event: &PowerEvent) {
///         println!("{agent}: {event:?}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: u64) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: u64) {}

    /// Called for every power-state transition an agent recorded this tick,
    /// in the order the transitions happened.
    fn on_power_event(&mut self, _agent: EntityId, _event: &PowerEvent) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: u64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
