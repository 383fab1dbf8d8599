//! Read-only world state passed to every entity update.

use crate::details::detail_str;
use crate::entity::Entity;
use crate::station::RECHARGE_STATION_TYPE;

/// A read-only snapshot of the simulation's stationary roster, built by the
/// driver once per agent update and shared immutably.
///
/// The roster is owned by the simulation model; entities receive this view
/// explicitly at update time instead of holding a long-lived model pointer,
/// so no ambient shared state exists between ticks.
///
/// # Lifetimes
///
/// All borrows live for the duration of one entity's update call.  The
/// driver never allows mutable access to the roster while a `WorldView` is
/// live.
pub struct WorldView<'a> {
    /// Every stationary entity known to the model, in insertion order.
    pub roster: &'a [Box<dyn Entity>],

    /// How many recharge stations a fully initialized model carries.
    ///
    /// Routing only engages once the roster holds exactly this many — a
    /// defensive guard against reading a model that is still being built,
    /// not a domain invariant.
    pub expected_stations: usize,
}

impl<'a> WorldView<'a> {
    pub fn new(roster: &'a [Box<dyn Entity>], expected_stations: usize) -> Self {
        Self { roster, expected_stations }
    }

    /// A view over an empty roster.  Routing never engages against it.
    pub fn empty() -> WorldView<'static> {
        WorldView { roster: &[], expected_stations: usize::MAX }
    }

    /// Iterator over the roster as trait objects.
    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> {
        self.roster.iter().map(Box::as_ref)
    }

    /// Number of roster entries tagged as recharge stations.
    pub fn station_count(&self) -> usize {
        self.entities()
            .filter(|e| detail_str(e.details(), "type") == Some(RECHARGE_STATION_TYPE))
            .count()
    }

    /// The readiness guard: `true` once the station roster has stabilized
    /// at its expected size.
    pub fn roster_ready(&self) -> bool {
        self.station_count() == self.expected_stations
    }
}
