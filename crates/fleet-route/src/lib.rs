//! `fleet-route` — pluggable point-to-point movement strategies.
//!
//! # Crate layout
//!
//! | Module       | Contents                                        |
//! |--------------|--------------------------------------------------|
//! | [`strategy`] | `Strategy` trait — the routing extension point  |
//! | [`beeline`]  | `BeelineStrategy` — straight-line segment       |
//! | [`path`]     | `PathStrategy` — multi-leg waypoint sequence    |
//!
//! # Pluggability
//!
//! Consumers (the battery wrapper, the delivery drone) drive movement
//! exclusively through the [`Strategy`] trait, so a smarter algorithm —
//! graph routing, spline paths, congestion avoidance — can be swapped in
//! without touching the callers.

pub mod beeline;
pub mod path;
pub mod strategy;


pub use beeline::BeelineStrategy;
pub use path::PathStrategy;
pub use strategy::{ARRIVAL_TOLERANCE, Strategy};
