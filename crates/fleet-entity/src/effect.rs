//! Effects — the side effects an entity update requests on state it does
//! not own.

use fleet_core::{EntityId, Vec3};

/// A mutation requested by an entity's tick update.
///
/// Effects are produced by [`Entity::update`][crate::Entity::update] and
/// consumed by the simulation model, which owns the package arena.  Applying
/// them sequentially in the order they were produced keeps the tick
/// deterministic and makes dangling-target bugs structurally impossible:
/// an effect names its target by [`EntityId`], never by reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The carrier moved; the carried package must mirror its position and
    /// direction exactly.
    PayloadMoved {
        package: EntityId,
        position: Vec3,
        direction: Vec3,
    },

    /// The carrier reached the pickup point and now holds the package.
    PayloadPickedUp { package: EntityId },

    /// The package was set down at its destination; the carrier is free.
    PayloadDelivered { package: EntityId },
}
