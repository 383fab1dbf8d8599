//! `fleet-core` — foundational types for the `fleet_sim` delivery simulation.
//!
//! This crate is a dependency of every other `fleet-*` crate.  It
//! intentionally has no `fleet-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`vec3`]    | `Vec3` — 3D position/direction vector     |
//! | [`ids`]     | `EntityId`                                |
//! | [`color`]   | `Color` — visual charge-state signal      |
//! | [`error`]   | `FleetError`, `FleetResult`               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod color;
pub mod error;
pub mod ids;
pub mod vec3;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use error::{FleetError, FleetResult};
pub use ids::EntityId;
pub use vec3::Vec3;
