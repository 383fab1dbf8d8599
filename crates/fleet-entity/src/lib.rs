//! `fleet-entity` — the mobile-entity contract and stationary entities.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`details`] | `Details` descriptor records and field accessors             |
//! | [`entity`]  | `Entity` trait, `Payload` capability value                   |
//! | [`effect`]  | `Effect` enum — side effects produced by entity updates      |
//! | [`world`]   | `WorldView<'a>` — read-only roster snapshot passed to ticks  |
//! | [`package`] | `Package` — a deliverable payload entity                     |
//! | [`station`] | `RechargeStation` — stationary recharge facility             |
//!
//! # Design notes
//!
//! Entity updates never mutate anything they do not own.  An update receives
//! a read-only [`WorldView`] and returns a list of [`Effect`]s; the
//! simulation model applies those effects sequentially afterwards.  This is
//! what lets a drone (or its battery wrapper) reposition a package it
//! carries but does not own, without shared mutable state.

pub mod details;
pub mod effect;
pub mod entity;
pub mod package;
pub mod station;
pub mod world;


pub use details::{Details, detail_f64, detail_position, detail_str, detail_type};
pub use effect::Effect;
pub use entity::{Entity, Payload};
pub use package::Package;
pub use station::{RECHARGE_STATION_TYPE, RechargeStation};
pub use world::WorldView;
