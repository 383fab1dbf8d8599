//! Deliverable package entity.

use fleet_core::{Color, EntityId, FleetResult, Vec3};
use serde_json::json;

use crate::details::{detail_position, detail_str};
use crate::entity::Entity;
use crate::{Details, Effect, WorldView};

/// A payload awaiting (or undergoing) delivery.
///
/// Packages are owned by the simulation model; carriers hold only the
/// package's [`EntityId`] and reposition it through
/// [`Effect::PayloadMoved`][crate::Effect::PayloadMoved].
pub struct Package {
    id: EntityId,
    position: Vec3,
    direction: Vec3,
    color: Color,
    name: String,
    details: Details,

    /// Set by the model when the carrier reports pickup.
    pub picked_up: bool,
    /// Set by the model when the carrier reports delivery.
    pub delivered: bool,
}

impl Package {
    /// Build a package from its declarative description.
    pub fn from_details(id: EntityId, details: Details) -> FleetResult<Self> {
        let position = detail_position(&details)?;
        let name = detail_str(&details, "name").unwrap_or("package").to_owned();
        Ok(Self {
            id,
            position,
            direction: Vec3::ZERO,
            color: Color::Green,
            name,
            details,
            picked_up: false,
            delivered: false,
        })
    }

    /// Convenience constructor for a bare package at `position`.
    pub fn at(id: EntityId, position: Vec3) -> Self {
        let mut details = Details::new();
        details.insert("type".into(), json!("package"));
        details.insert(
            "position".into(),
            json!([position.x, position.y, position.z]),
        );
        Self {
            id,
            position,
            direction: Vec3::ZERO,
            color: Color::Green,
            name: "package".to_owned(),
            details,
            picked_up: false,
            delivered: false,
        }
    }
}

impl Entity for Package {
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

    /// Packages have no behavior of their own; carriers move them.
    fn update(&mut self, _dt: f64, _world: &WorldView<'_>) -> Vec<Effect> {
        Vec::new()
    }
}
