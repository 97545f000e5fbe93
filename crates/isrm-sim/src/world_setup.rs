//! Entity spawn factories.
//!
//! Creates the persistent agent and transient agents with appropriate
//! component bundles. All randomness flows through the engine's seeded
//! RNG so identical seeds reproduce identical populations.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use isrm_core::components::{AgentId, Body, LastUtility, Lifetime, Signals};
use isrm_core::config::SimConfig;
use isrm_core::constants::*;
use isrm_core::enums::AgentKind;
use isrm_core::types::{Position, Velocity};

/// Spawn the single persistent agent ("the immortal"). Called once at
/// engine construction.
pub fn spawn_persistent(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    next_id: &mut u64,
) -> (hecs::Entity, AgentId) {
    let id = allocate_id(next_id);
    let entity = world.spawn((
        id,
        AgentKind::Persistent,
        random_position(rng, config),
        random_velocity(rng, PERSISTENT_SPEED_SCALE),
        Body {
            radius: PERSISTENT_RADIUS,
        },
        Signals {
            energy: PERSISTENT_ENERGY,
            salience: PERSISTENT_SALIENCE,
        },
        Lifetime {
            age: 0,
            lifespan: None,
        },
        LastUtility::default(),
    ));
    (entity, id)
}

/// Spawn one transient agent with randomized signals and lifespan.
pub fn spawn_transient(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SimConfig,
    next_id: &mut u64,
) -> (hecs::Entity, AgentId) {
    let id = allocate_id(next_id);
    let entity = world.spawn((
        id,
        AgentKind::Transient,
        random_position(rng, config),
        random_velocity(rng, TRANSIENT_SPEED_SCALE),
        Body {
            radius: TRANSIENT_RADIUS,
        },
        Signals {
            energy: rng.gen_range(SPAWN_ENERGY_MIN..SPAWN_ENERGY_MAX),
            salience: rng.gen_range(0.0..SPAWN_SALIENCE_MAX),
        },
        Lifetime {
            age: 0,
            lifespan: Some(rng.gen_range(LIFESPAN_MIN_TICKS..LIFESPAN_MAX_TICKS)),
        },
        LastUtility::default(),
    ));
    (entity, id)
}

fn allocate_id(next_id: &mut u64) -> AgentId {
    let id = AgentId(*next_id);
    *next_id += 1;
    id
}

fn random_position(rng: &mut ChaCha8Rng, config: &SimConfig) -> Position {
    Position::new(
        rng.gen_range(0.0..config.width),
        rng.gen_range(0.0..config.height),
    )
}

/// Unit-scaled random velocity: each component uniform in [-1, 1),
/// multiplied by the kind's speed scale.
fn random_velocity(rng: &mut ChaCha8Rng, scale: f64) -> Velocity {
    Velocity::new(
        rng.gen_range(-1.0..1.0) * scale,
        rng.gen_range(-1.0..1.0) * scale,
    )
}
