//! The `Entity` trait — the polymorphic mobile-entity contract.

use fleet_core::{Color, EntityId, Vec3};

use crate::{Details, Effect, WorldView};

/// What an entity is currently carrying.
///
/// Returned by [`Entity::payload`] as a capability query: callers that need
/// to know about a carried package ask for it explicitly instead of
/// downcasting to a concrete agent type.  Entities that never carry
/// anything simply report `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    /// Identity of the carried package (owned by the simulation model).
    pub package: EntityId,
    /// `true` once the package has been physically picked up and rides
    /// along with the carrier.
    pub picked_up: bool,
}

/// The base contract for anything the simulation can tick.
///
/// Everything with a position, direction, color, speed, and identity
/// implements this — delivery drones, packages, and stationary recharge
/// facilities alike, so all of them can be searched and reasoned about
/// uniformly.
///
/// # Update contract
///
/// The driver calls [`update`][Entity::update] once per simulated tick with
/// a non-negative time delta and a read-only [`WorldView`].  Updates run
/// strictly sequentially; all returned [`Effect`]s are applied by the model
/// before the next entity is ticked.
pub trait Entity {
    /// Immutable identity, assigned at creation.
    fn id(&self) -> EntityId;

    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    fn direction(&self) -> Vec3;
    fn set_direction(&mut self, direction: Vec3);

    /// Display color — a visual charge-state signal, not a physical property.
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn name(&self) -> &str;

    /// Scalar movement speed in scene units per simulated time-unit.
    fn speed(&self) -> f64;

    /// Rotate the entity's facing direction around the vertical axis.
    fn rotate(&mut self, angle: f64) {
        let rotated = self.direction().rotated_y(angle);
        self.set_direction(rotated);
    }

    /// The declarative record this entity was built from, exposed verbatim.
    fn details(&self) -> &Details;

    /// Advance the entity by one tick of length `dt`.
    fn update(&mut self, dt: f64, world: &WorldView<'_>) -> Vec<Effect>;

    /// The package this entity currently carries, if any.
    fn payload(&self) -> Option<Payload> {
        None
    }

    /// `true` when the entity is not currently fulfilling a delivery.
    fn is_available(&self) -> bool {
        true
    }
}
