//! Declarative entity descriptors.
//!
//! Entities are built from key/value records handed over by the scenario
//! loader (parsing the records themselves is the loader's concern).  The
//! same record is kept alive inside the entity and exposed verbatim through
//! [`Entity::details`][crate::Entity::details] so external tooling can read
//! whatever schema the record carries.

use fleet_core::{FleetError, FleetResult, Vec3};
use serde_json::Value;

/// A declarative entity description: an ordered JSON object.
pub type Details = serde_json::Map<String, Value>;

/// The `type` discriminator string of a descriptor.
///
/// Every descriptor must carry one; it is how heterogeneous rosters are
/// filtered (e.g. the nearest-facility search keeps only
/// `"recharge station"` entries).
pub fn detail_type(details: &Details) -> FleetResult<&str> {
    detail_str(details, "type")
        .ok_or_else(|| FleetError::Descriptor("missing `type` discriminator".into()))
}

/// The `[x, y, z]` position array of a descriptor.
pub fn detail_position(details: &Details) -> FleetResult<Vec3> {
    let arr = details
        .get("position")
        .and_then(Value::as_array)
        .ok_or_else(|| FleetError::Descriptor("missing `position` array".into()))?;
    match arr.as_slice() {
        [x, y, z] => {
            let coord = |v: &Value, axis: &str| {
                v.as_f64().ok_or_else(|| {
                    FleetError::Descriptor(format!("`position.{axis}` is not a number"))
                })
            };
            Ok(Vec3::new(coord(x, "x")?, coord(y, "y")?, coord(z, "z")?))
        }
        _ => Err(FleetError::Descriptor(format!(
            "`position` has {} elements, expected 3",
            arr.len()
        ))),
    }
}

/// Optional string field accessor.
pub fn detail_str<'a>(details: &'a Details, key: &str) -> Option<&'a str> {
    details.get(key).and_then(Value::as_str)
}

/// Optional numeric field accessor.
pub fn detail_f64(details: &Details, key: &str) -> Option<f64> {
    details.get(key).and_then(Value::as_f64)
}
