//! Multi-leg waypoint movement.

use fleet_core::Vec3;
use fleet_entity::Entity;

use crate::strategy::{ARRIVAL_TOLERANCE, Strategy};

/// Visits a sequence of waypoints in order, moving beeline within each leg.
///
/// A step that reaches the current waypoint is clamped there; the next leg
/// starts on the following tick.  An empty waypoint list is complete from
/// the start.
pub struct PathStrategy {
    waypoints: Vec<Vec3>,
    next: usize,
}

impl PathStrategy {
    pub fn new(waypoints: Vec<Vec3>) -> Self {
        Self { waypoints, next: 0 }
    }

    /// The waypoint currently being approached, if any legs remain.
    pub fn current_target(&self) -> Option<Vec3> {
        self.waypoints.get(self.next).copied()
    }
}

impl Strategy for PathStrategy {
    fn advance(&mut self, entity: &mut dyn Entity, dt: f64) {
        let Some(target) = self.current_target() else {
            return;
        };

        let to_go = target - entity.position();
        let remaining = to_go.magnitude();
        if remaining <= ARRIVAL_TOLERANCE {
            entity.set_position(target);
            self.next += 1;
            return;
        }

        let step = entity.speed() * dt;
        if step <= 0.0 {
            return;
        }

        let direction = to_go.normalized();
        entity.set_direction(direction);

        if step >= remaining {
            entity.set_position(target);
            self.next += 1;
        } else {
            let position = entity.position() + direction * step;
            entity.set_position(position);
        }
    }

    fn is_completed(&self) -> bool {
        self.next >= self.waypoints.len()
    }
}
