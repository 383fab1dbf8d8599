//! Nearest recharge-facility selection.

use fleet_core::Vec3;
use fleet_entity::{Entity, RECHARGE_STATION_TYPE, WorldView, detail_str};

/// Scan the roster for the recharge station closest to `from`.
///
/// Filters the full entity roster by the `"recharge station"` type tag and
/// keeps the minimum Euclidean distance under a strict comparison, so a tie
/// resolves to the first station encountered in roster order.  Returns
/// `None` when no tagged station exists; callers stall silently rather than
/// routing to nothing.
pub fn nearest_station<'a>(world: &WorldView<'a>, from: Vec3) -> Option<&'a dyn Entity> {
    let mut nearest: Option<(f64, &dyn Entity)> = None;
    for entity in world.roster.iter().map(Box::as_ref) {
        if detail_str(entity.details(), "type") != Some(RECHARGE_STATION_TYPE) {
            continue;
        }
        let distance = entity.position().distance(from);
        match nearest {
            Some((best, _)) if best <= distance => {}
            _ => nearest = Some((distance, entity)),
        }
    }
    nearest.map(|(_, entity)| entity)
}
