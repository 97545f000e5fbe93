//! Cleanup system: despawns agents marked for removal this tick.
//!
//! Removal is by entity identity, never by positional index, so
//! multiple removals in one tick cannot skip over each other.

use hecs::{Entity, World};
use tracing::debug;

use isrm_core::components::AgentId;
use isrm_core::enums::RemovalCause;
use isrm_core::events::SimEvent;

pub fn run(
    world: &mut World,
    roster: &mut Vec<Entity>,
    doomed: &mut Vec<(Entity, RemovalCause)>,
    events: &mut Vec<SimEvent>,
) {
    if doomed.is_empty() {
        return;
    }

    for (entity, cause) in doomed.drain(..) {
        if let Ok(id) = world.get::<&AgentId>(entity) {
            events.push(SimEvent::Removed { id: *id, cause });
            debug!(id = id.0, ?cause, "removed transient agent");
        }
        let _ = world.despawn(entity);
    }

    roster.retain(|&entity| world.contains(entity));
}
