//! Simulation engine — the core of the crate.
//!
//! `SimulationEngine` owns the hecs ECS world, the insertion-ordered
//! agent roster, the danger map, and the seeded RNG. The host calls
//! `tick` once per rendered frame and draws the returned snapshot.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use isrm_core::components::AgentId;
use isrm_core::config::SimConfig;
use isrm_core::constants::DANGER_CELL_SIZE;
use isrm_core::enums::RemovalCause;
use isrm_core::error::ConfigError;
use isrm_core::events::SimEvent;
use isrm_core::state::SimSnapshot;
use isrm_policy::{CoherencePolicy, DangerMap, DecisionPolicy};

use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
///
/// Single-owner by construction: `tick` takes `&mut self`, so Rust's
/// ownership rules serialize access without any internal locking.
pub struct SimulationEngine {
    world: World,
    /// Live entities in insertion order. The index of an entity here is
    /// its "slot", which offsets the coherence oscillation phase.
    roster: Vec<hecs::Entity>,
    frame: u64,
    rng: ChaCha8Rng,
    danger_map: DangerMap,
    config: SimConfig,
    policy: Box<dyn DecisionPolicy>,
    next_agent_id: u64,
    doomed: Vec<(hecs::Entity, RemovalCause)>,
    events: Vec<SimEvent>,
    persistent_id: AgentId,
}

impl SimulationEngine {
    /// Create a new simulation containing exactly one persistent agent
    /// at a random in-bounds position.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut next_agent_id = 0;

        let (entity, persistent_id) =
            world_setup::spawn_persistent(&mut world, &mut rng, &config, &mut next_agent_id);

        Ok(Self {
            world,
            roster: vec![entity],
            frame: 0,
            rng,
            danger_map: DangerMap::new(DANGER_CELL_SIZE),
            config,
            policy: Box::new(CoherencePolicy::default()),
            next_agent_id,
            doomed: Vec::new(),
            events: Vec::new(),
            persistent_id,
        })
    }

    /// Replace the default coherence policy with a custom decision rule.
    pub fn with_policy(mut self, policy: Box<dyn DecisionPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Advance the simulation by one tick (dt = 1) and return the
    /// resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.tick_dt(1.0)
    }

    /// Advance the simulation by one tick with an explicit timestep.
    pub fn tick_dt(&mut self, dt: f64) -> SimSnapshot {
        // 1. Spawn
        systems::spawner::run(
            &mut self.world,
            &mut self.roster,
            &mut self.rng,
            &self.config,
            &mut self.next_agent_id,
            &mut self.events,
        );
        // 2. Utility + removal marking
        systems::utility::run(
            &mut self.world,
            &self.roster,
            self.policy.as_ref(),
            self.frame,
            self.config.salience_decay,
            &mut self.doomed,
        );
        // 3. Avoidance steering (persistent agents only)
        if self.config.avoidance {
            systems::steering::run(&mut self.world, &self.danger_map);
        }
        // 4. Movement integration + boundary reflection + aging
        systems::movement::run(
            &mut self.world,
            &self.roster,
            &self.doomed,
            self.config.width,
            self.config.height,
            dt,
        );
        // 5. Collision detection + danger-map recording
        systems::collision::run(
            &self.world,
            &self.roster,
            &mut self.doomed,
            &mut self.danger_map,
            &mut self.events,
        );
        // 6. Prune marked agents
        systems::cleanup::run(
            &mut self.world,
            &mut self.roster,
            &mut self.doomed,
            &mut self.events,
        );
        // 7. Frame advance
        self.frame += 1;

        trace!(
            frame = self.frame,
            population = self.roster.len(),
            danger_cells = self.danger_map.len(),
            "tick"
        );

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.roster, self.frame, events)
    }

    /// Read-only snapshot of the current state. Carries no events;
    /// those belong to the snapshot returned by `tick`.
    pub fn snapshot(&self) -> SimSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.roster, self.frame, Vec::new())
    }

    /// Current frame counter.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of live agents, the persistent one included.
    pub fn population(&self) -> usize {
        self.roster.len()
    }

    /// Id of the persistent agent created at construction.
    pub fn persistent_id(&self) -> AgentId {
        self.persistent_id
    }

    /// Read-only access to the danger map, for hosts that visualize it.
    pub fn danger_map(&self) -> &DangerMap {
        &self.danger_map
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Insert a transient agent with fixed state (for tests needing
    /// exact positions and signals).
    #[cfg(test)]
    pub fn spawn_test_transient(
        &mut self,
        position: isrm_core::types::Position,
        velocity: isrm_core::types::Velocity,
        lifespan: u64,
    ) -> AgentId {
        use isrm_core::components::{Body, LastUtility, Lifetime, Signals};
        use isrm_core::constants::TRANSIENT_RADIUS;
        use isrm_core::enums::AgentKind;

        let id = AgentId(self.next_agent_id);
        self.next_agent_id += 1;
        let entity = self.world.spawn((
            id,
            AgentKind::Transient,
            position,
            velocity,
            Body {
                radius: TRANSIENT_RADIUS,
            },
            // Zero energy and high salience keep utility positive, so
            // these agents only die by lifespan or collision.
            Signals {
                energy: 0.0,
                salience: 0.5,
            },
            Lifetime {
                age: 0,
                lifespan: Some(lifespan),
            },
            LastUtility::default(),
        ));
        self.roster.push(entity);
        id
    }
}
