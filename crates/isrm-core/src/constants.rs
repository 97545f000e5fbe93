//! Simulation constants and tuning parameters.

// --- Spawn policy ---

/// Default per-tick probability of spawning one transient agent.
pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.03;

/// Transient lifespan range in ticks, sampled uniformly [min, max).
pub const LIFESPAN_MIN_TICKS: u64 = 300;
pub const LIFESPAN_MAX_TICKS: u64 = 600;

/// Transient energy at spawn, sampled uniformly [min, max).
pub const SPAWN_ENERGY_MIN: f64 = 0.4;
pub const SPAWN_ENERGY_MAX: f64 = 1.0;

/// Transient salience at spawn, sampled uniformly [0, max).
pub const SPAWN_SALIENCE_MAX: f64 = 0.5;

// --- Persistent agent defaults ---

pub const PERSISTENT_ENERGY: f64 = 0.35;
pub const PERSISTENT_SALIENCE: f64 = 0.45;
pub const PERSISTENT_RADIUS: f64 = 10.0;

/// Velocity scale for the persistent agent (slower than transients).
pub const PERSISTENT_SPEED_SCALE: f64 = 0.6;

// --- Transient agent defaults ---

pub const TRANSIENT_RADIUS: f64 = 6.0;
pub const TRANSIENT_SPEED_SCALE: f64 = 1.0;

// --- Coherence oscillation ---

/// Baseline of the delta-coherence oscillation.
pub const COHERENCE_BASE: f64 = 0.5;

/// Amplitude of the delta-coherence oscillation.
pub const COHERENCE_AMPLITUDE: f64 = 0.5;

/// Angular frequency of the oscillation (radians per tick).
pub const COHERENCE_FREQUENCY: f64 = 0.01;

// --- Avoidance steering ---

/// Danger-map grid cell size in plane units.
pub const DANGER_CELL_SIZE: f64 = 20.0;

/// Velocity nudge applied per tick toward the safest direction.
pub const AVOIDANCE_NUDGE: f64 = 0.1;
