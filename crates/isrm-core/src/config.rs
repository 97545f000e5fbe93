//! Engine configuration.

use crate::constants::DEFAULT_SPAWN_PROBABILITY;
use crate::error::ConfigError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Plane width in abstract units.
    pub width: f64,
    /// Plane height in abstract units.
    pub height: f64,
    /// Per-tick probability of spawning one transient agent.
    pub spawn_probability: f64,
    /// Hard population cap. `None` leaves growth bounded only by the
    /// spawn/despawn equilibrium.
    pub max_agents: Option<usize>,
    /// Whether the persistent agent steers away from danger-map cells.
    pub avoidance: bool,
    /// Multiplicative per-tick salience decay. 1.0 disables decay.
    pub salience_decay: f64,
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 400.0,
            spawn_probability: DEFAULT_SPAWN_PROBABILITY,
            max_agents: None,
            avoidance: true,
            salience_decay: 1.0,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Validate field ranges. Called once by the engine constructor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::InvalidBounds {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(ConfigError::InvalidProbability(self.spawn_probability));
        }
        if !(self.salience_decay > 0.0 && self.salience_decay <= 1.0) {
            return Err(ConfigError::InvalidDecay(self.salience_decay));
        }
        Ok(())
    }
}
