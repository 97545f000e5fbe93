//! The utility rule: U = max(0, delta_coherence - energy + salience).
//!
//! Delta-coherence stands in for "how well the agent's internal
//! prediction matches its environment". It is recomputed every tick
//! from the global frame counter and the agent's roster slot — a cheap
//! bounded oscillation, not a physical model.

use isrm_core::components::Signals;
use isrm_core::constants::{COHERENCE_AMPLITUDE, COHERENCE_BASE, COHERENCE_FREQUENCY};
use isrm_core::enums::AgentKind;

/// What to do with an agent whose utility has collapsed to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseAction {
    /// Remove the agent from the population.
    Remove,
    /// Leave the agent alone (persistent agents).
    Spare,
}

/// Per-agent decision rule. The engine consults this every tick; swap
/// implementations to express the different simulation variants
/// (avoidance, feeding, oscillation) without duplicating the loop.
pub trait DecisionPolicy: Send {
    /// Utility for an agent occupying roster `slot` at `frame`.
    /// Must return a non-negative value.
    fn utility(&self, signals: &Signals, frame: u64, slot: usize) -> f64;

    /// Action taken when utility reaches zero (or lifespan expires).
    fn collapse_action(&self, kind: AgentKind) -> CollapseAction;
}

/// Default policy: sinusoidal delta-coherence, transients removed on
/// collapse, the persistent agent spared.
#[derive(Debug, Clone)]
pub struct CoherencePolicy {
    pub base: f64,
    pub amplitude: f64,
    /// Angular frequency in radians per tick.
    pub frequency: f64,
}

impl Default for CoherencePolicy {
    fn default() -> Self {
        Self {
            base: COHERENCE_BASE,
            amplitude: COHERENCE_AMPLITUDE,
            frequency: COHERENCE_FREQUENCY,
        }
    }
}

impl CoherencePolicy {
    /// The oscillating prediction-alignment proxy, in [base - amplitude,
    /// base + amplitude].
    pub fn delta_coherence(&self, frame: u64, slot: usize) -> f64 {
        let phase = (frame + slot as u64) as f64 * self.frequency;
        self.base + self.amplitude * phase.sin()
    }
}

impl DecisionPolicy for CoherencePolicy {
    fn utility(&self, signals: &Signals, frame: u64, slot: usize) -> f64 {
        let delta_c = self.delta_coherence(frame, slot);
        (delta_c - signals.energy + signals.salience).max(0.0)
    }

    fn collapse_action(&self, kind: AgentKind) -> CollapseAction {
        match kind {
            AgentKind::Transient => CollapseAction::Remove,
            AgentKind::Persistent => CollapseAction::Spare,
        }
    }
}
