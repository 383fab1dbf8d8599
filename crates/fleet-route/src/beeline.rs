//! Straight-line movement between two points.

use fleet_core::Vec3;
use fleet_entity::Entity;

use crate::strategy::{ARRIVAL_TOLERANCE, Strategy};

/// Moves an entity along the straight segment from `origin` to
/// `destination`, clamping the final step to the destination exactly.
///
/// A zero-length segment completes on the first `advance` call.
pub struct BeelineStrategy {
    origin: Vec3,
    destination: Vec3,
    completed: bool,
}

impl BeelineStrategy {
    pub fn new(origin: Vec3, destination: Vec3) -> Self {
        Self { origin, destination, completed: false }
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn destination(&self) -> Vec3 {
        self.destination
    }
}

impl Strategy for BeelineStrategy {
    fn advance(&mut self, entity: &mut dyn Entity, dt: f64) {
        if self.completed {
            return;
        }

        let to_go = self.destination - entity.position();
        let remaining = to_go.magnitude();
        if remaining <= ARRIVAL_TOLERANCE {
            entity.set_position(self.destination);
            self.completed = true;
            return;
        }

        let step = entity.speed() * dt;
        if step <= 0.0 {
            // Zero speed or degenerate dt: stall in place, try again next tick.
            return;
        }

        let direction = to_go.normalized();
        entity.set_direction(direction);

        if step >= remaining {
            entity.set_position(self.destination);
            self.completed = true;
        } else {
            let position = entity.position() + direction * step;
            entity.set_position(position);
        }
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}
