//! Stationary recharge facility.

use fleet_core::{Color, EntityId, FleetError, FleetResult, Vec3};

use crate::details::{detail_position, detail_str, detail_type};
use crate::entity::Entity;
use crate::{Details, Effect, WorldView};

/// The `type` discriminator that marks a descriptor as a recharge facility.
pub const RECHARGE_STATION_TYPE: &str = "recharge station";

/// A fixed recharge point, discoverable through its `type` tag.
///
/// Stations exist purely as positioned targets for low-battery routing.
/// They do not move or age: their update is a no-op.
pub struct RechargeStation {
    id: EntityId,
    position: Vec3,
    direction: Vec3,
    color: Color,
    name: String,
    details: Details,
}

impl RechargeStation {
    /// Build a station from its declarative description.
    ///
    /// The record must supply a `position` array and the
    /// `"recharge station"` type tag; `name` is optional.
    pub fn from_details(id: EntityId, details: Details) -> FleetResult<Self> {
        let tag = detail_type(&details)?;
        if tag != RECHARGE_STATION_TYPE {
            return Err(FleetError::Descriptor(format!(
                "expected type `{RECHARGE_STATION_TYPE}`, got `{tag}`"
            )));
        }
        let position = detail_position(&details)?;
        let name = detail_str(&details, "name").unwrap_or("station").to_owned();

        Ok(Self {
            id,
            position,
            direction: Vec3::ZERO,
            color: Color::Green,
            name,
            details,
        })
    }
}

impl Entity for RechargeStation {
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
        0.0
    }

    fn details(&self) -> &Details {
        &self.details
    }

    /// Self-check only: a facility never moves, so a non-finite position
    /// means something else corrupted it.
    fn update(&mut self, _dt: f64, _world: &WorldView<'_>) -> Vec<Effect> {
        debug_assert!(
            self.position.x.is_finite()
                && self.position.y.is_finite()
                && self.position.z.is_finite()
        );
        Vec::new()
    }
}
