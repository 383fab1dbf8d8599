//! `fleet-agent` — the concrete delivery drone.
//!
//! A [`Drone`] is the mobile entity the battery wrapper owns.  It knows
//! nothing about batteries: it flies to a pickup point, carries the package
//! to the dropoff, and reports availability through the capability queries
//! on the [`Entity`][fleet_entity::Entity] trait.

pub mod drone;


pub use drone::Drone;
