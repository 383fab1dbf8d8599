//! The `Strategy` trait — pluggable point-to-point motion.

use fleet_entity::Entity;

/// Distance below which a position counts as "at the target".
///
/// Overshoot is always clamped to the target exactly, so the tolerance only
/// matters for degenerate zero-length segments and float residue.
pub const ARRIVAL_TOLERANCE: f64 = 1e-6;

/// A movement algorithm that advances an entity toward a fixed target.
///
/// A strategy is constructed per trip and owns nothing but its own
/// origin/target geometry; the entity being moved is passed in each call.
/// Once [`is_completed`][Strategy::is_completed] reports `true`, further
/// [`advance`][Strategy::advance] calls must not move the entity — callers
/// normally discard the strategy on arrival, and this guarantee backs that
/// up.
///
/// An entity with zero speed never completes; that is a recoverable stall,
/// not a fault, and callers are expected to guard against zero-speed
/// carriers.
pub trait Strategy {
    /// Move `entity` by at most `entity.speed() * dt` toward the target,
    /// reorienting its direction to face the travel segment.
    fn advance(&mut self, entity: &mut dyn Entity, dt: f64);

    /// `true` once the entity has reached the target.
    fn is_completed(&self) -> bool;
}
