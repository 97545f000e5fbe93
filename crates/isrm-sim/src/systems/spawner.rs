//! Probabilistic spawn system: at most one transient agent per tick.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use isrm_core::config::SimConfig;
use isrm_core::events::SimEvent;

use crate::world_setup;

/// Roll the spawn gate and, if it passes (and the population cap
/// allows), append one transient agent to the roster.
pub fn run(
    world: &mut World,
    roster: &mut Vec<Entity>,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    next_id: &mut u64,
    events: &mut Vec<SimEvent>,
) {
    if rng.gen_range(0.0..1.0) >= config.spawn_probability {
        return;
    }
    if let Some(cap) = config.max_agents {
        if roster.len() >= cap {
            return;
        }
    }

    let (entity, id) = world_setup::spawn_transient(world, rng, config, next_id);
    roster.push(entity);
    events.push(SimEvent::Spawned { id });
    debug!(id = id.0, "spawned transient agent");
}
