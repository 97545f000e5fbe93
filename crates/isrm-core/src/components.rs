//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.
//!
//! `Position` and `Velocity` from `types` are used as components too.

use serde::{Deserialize, Serialize};

/// Opaque identifier, unique for the agent's lifetime. Assigned from a
/// monotonically increasing engine counter, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(pub u64);

/// Physical extent. Radius is fixed at creation and always positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub radius: f64,
}

/// Internal scalar signals driving the utility rule.
/// Both are clamped to [0, 1] after every update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Signals {
    /// Inverse cost of acting.
    pub energy: f64,
    /// Contextual urgency; may decay multiplicatively each tick.
    pub salience: f64,
}

/// Tick counts for the despawn rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    /// Ticks since creation.
    pub age: u64,
    /// `Some(n)` for transient agents, `None` for the persistent one.
    pub lifespan: Option<u64>,
}

/// Most recently computed utility, for label rendering by the host.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LastUtility(pub f64);

impl Signals {
    /// Clamp both signals into [0, 1].
    pub fn clamp(&mut self) {
        self.energy = self.energy.clamp(0.0, 1.0);
        self.salience = self.salience.clamp(0.0, 1.0);
    }
}

impl Lifetime {
    /// Whether age has exceeded the lifespan (always false for the
    /// persistent agent).
    pub fn expired(&self) -> bool {
        matches!(self.lifespan, Some(limit) if self.age > limit)
    }
}
