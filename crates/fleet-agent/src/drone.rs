//! The delivery drone.

use fleet_core::{Color, EntityId, FleetError, FleetResult, Vec3};
use fleet_entity::{
    Details, Effect, Entity, Payload, WorldView, detail_f64, detail_position, detail_str,
};
use fleet_route::{BeelineStrategy, Strategy};

/// An unescorted delivery agent.
///
/// A delivery runs in two legs, each driven by a [`BeelineStrategy`]: fly
/// to the pickup point, pick the package up, then fly to the dropoff.  The
/// package itself is owned by the simulation model; the drone repositions
/// it through [`Effect::PayloadMoved`] every tick it is carried and reports
/// it through [`Entity::payload`].
pub struct Drone {
    id: EntityId,
    position: Vec3,
    direction: Vec3,
    color: Color,
    name: String,
    speed: f64,
    details: Details,

    available: bool,
    payload: Option<EntityId>,
    picked_up: bool,

    to_pickup: Option<BeelineStrategy>,
    to_dropoff: Option<BeelineStrategy>,
    /// Destination of the current delivery; meaningful only while one is
    /// assigned.
    dropoff: Vec3,
}

impl Drone {
    /// Build a drone from its declarative description.
    ///
    /// The record must supply `position` and a positive `speed`; `name` is
    /// optional.
    pub fn from_details(id: EntityId, details: Details) -> FleetResult<Self> {
        let position = detail_position(&details)?;
        let speed = detail_f64(&details, "speed")
            .ok_or_else(|| FleetError::Descriptor("missing `speed`".into()))?;
        if speed < 0.0 {
            return Err(FleetError::Descriptor(format!("negative speed {speed}")));
        }
        let name = detail_str(&details, "name").unwrap_or("drone").to_owned();

        Ok(Self {
            id,
            position,
            direction: Vec3::ZERO,
            color: Color::Green,
            name,
            speed,
            details,
            available: true,
            payload: None,
            picked_up: false,
            to_pickup: None,
            to_dropoff: None,
            dropoff: Vec3::ZERO,
        })
    }

    /// Assign a delivery: fly to `pickup`, collect `package`, carry it to
    /// `dropoff`.  The drone is unavailable until the package is delivered.
    pub fn assign_delivery(&mut self, package: EntityId, pickup: Vec3, dropoff: Vec3) {
        self.available = false;
        self.payload = Some(package);
        self.picked_up = false;
        self.to_pickup = Some(BeelineStrategy::new(self.position, pickup));
        self.to_dropoff = None;
        self.dropoff = dropoff;
    }
}

impl Entity for Drone {
    fn id(&self) -> EntityId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn direction(&self) -> Vec3 {
        self.direction
    }

    fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction;
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn details(&self) -> &Details {
        &self.details
    }

    fn update(&mut self, dt: f64, _world: &WorldView<'_>) -> Vec<Effect> {
        let mut effects = Vec::new();
        if dt <= 0.0 {
            return effects;
        }

        // Strategies are taken out of their slot for the duration of the
        // call so they can borrow `self` as the entity being moved.
        if let Some(mut leg) = self.to_pickup.take() {
            leg.advance(self, dt);
            if leg.is_completed() {
                self.picked_up = true;
                if let Some(package) = self.payload {
                    effects.push(Effect::PayloadPickedUp { package });
                }
                self.to_dropoff = Some(BeelineStrategy::new(self.position, self.dropoff));
            } else {
                self.to_pickup = Some(leg);
            }
        } else if let Some(mut leg) = self.to_dropoff.take() {
            leg.advance(self, dt);
            if let Some(package) = self.payload {
                effects.push(Effect::PayloadMoved {
                    package,
                    position: self.position,
                    direction: self.direction,
                });
            }
            if leg.is_completed() {
                if let Some(package) = self.payload.take() {
                    effects.push(Effect::PayloadDelivered { package });
                }
                self.picked_up = false;
                self.available = true;
            } else {
                self.to_dropoff = Some(leg);
            }
        }

        effects
    }

    fn payload(&self) -> Option<Payload> {
        self.payload.map(|package| Payload {
            package,
            picked_up: self.picked_up,
        })
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
