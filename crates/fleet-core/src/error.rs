//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `FleetError` via `From` impls, or keep them separate and wrap
//! `FleetError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

use crate::EntityId;

/// The top-level error type for `fleet-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("malformed entity descriptor: {0}")]
    Descriptor(String),

    #[error("entity {0} not found")]
    UnknownEntity(EntityId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `fleet-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
