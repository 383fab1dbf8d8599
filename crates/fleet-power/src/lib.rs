//! `fleet-power` — the battery capability, composed onto a mobile entity.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`battery`] | `BatteryDecorator` — the charging/routing state machine     |
//! | [`nearest`] | nearest-facility selection over a `WorldView` roster        |
//! | [`event`]   | `PowerEvent` — typed state-transition notifications         |
//!
//! # Composition model
//!
//! [`BatteryDecorator`] owns exactly one inner [`Entity`][fleet_entity::Entity]
//! and augments it with a finite energy budget: discharge while active,
//! divert to the nearest recharge facility when low, dock, recharge, and
//! resume.  The inner entity never learns that batteries exist — the wrapper
//! intercepts the tick, runs its state machine, and conditionally forwards
//! the tick inward.  All non-battery behavior (identity, position, payload,
//! availability) passes straight through.
//!
//! State transitions are reported as [`PowerEvent`]s instead of console
//! output, so the driver can forward them to an observer and tests can
//! assert on them directly.

pub mod battery;
pub mod event;
pub mod nearest;


pub use battery::{BatteryDecorator, CHARGE_RATE, DISCHARGE_RATE, FULL_CHARGE};
pub use event::PowerEvent;
pub use nearest::nearest_station;
