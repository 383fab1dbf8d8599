//! `fleet-sim` — simulation model and tick driver.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Agents    — update every battery-wrapped agent, strictly
//!                 sequentially, against a read-only WorldView of the
//!                 fixture roster.
//!   ② Effects   — apply each agent's returned Effects to the package
//!                 arena before the next agent is ticked.
//!   ③ Events    — drain the agent's PowerEvents into the observer.
//!   ④ Fixtures  — no-op self-check updates for stations and packages.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                     |
//! |--------------|-----------------------------------------------|
//! | [`config`]   | `SimConfig`                                   |
//! | [`model`]    | `SimulationModel` — entity ownership + driver |
//! | [`observer`] | `SimObserver`, `NoopObserver`                 |
//! | [`error`]    | `SimError`, `SimResult<T>`                    |

pub mod config;
pub mod error;
pub mod model;
pub mod observer;

#[cfg(test)]
mod tests;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use model::SimulationModel;
pub use observer::{NoopObserver, SimObserver};
