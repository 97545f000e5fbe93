//! Avoidance steering: the persistent agent drifts away from cells
//! where collisions have historically happened.

use hecs::World;

use isrm_core::constants::AVOIDANCE_NUDGE;
use isrm_core::enums::AgentKind;
use isrm_core::types::{Position, Velocity};
use isrm_policy::DangerMap;

/// Nudge each persistent agent's velocity toward the least-threatening
/// neighboring danger-map cell.
pub fn run(world: &mut World, danger_map: &DangerMap) {
    for (_entity, (kind, pos, vel)) in
        world.query_mut::<(&AgentKind, &Position, &mut Velocity)>()
    {
        if *kind != AgentKind::Persistent {
            continue;
        }
        let (dx, dy) = danger_map.safest_direction(pos);
        vel.dx += dx as f64 * AVOIDANCE_NUDGE;
        vel.dy += dy as f64 * AVOIDANCE_NUDGE;
    }
}
