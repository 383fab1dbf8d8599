//! Strongly typed entity identifier.
//!
//! Every simulated object — drone, package, recharge station — gets an
//! `EntityId` at creation and keeps it for life.  IDs are `Copy + Ord +
//! Hash` so they can be used as map keys without ceremony; the inner integer
//! is `pub` to allow direct indexing, but callers should prefer the
//! `.index()` helper for clarity.

use std::fmt;

/// Immutable identity of a simulated entity, assigned at creation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: EntityId = EntityId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for EntityId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<EntityId> for usize {
    #[inline(always)]
    fn from(id: EntityId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for EntityId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<EntityId, Self::Error> {
        u32::try_from(n).map(EntityId)
    }
}
