//! Snapshot views — the complete visible state handed to the host each
//! tick. The host turns these into pixels; the engine never renders.

use serde::{Deserialize, Serialize};

use crate::components::AgentId;
use crate::enums::AgentKind;
use crate::events::SimEvent;
use crate::types::Position;

/// Read-only copy of the simulation state. Mutating it has no effect
/// on the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    /// Global frame counter at the time of the snapshot.
    pub frame: u64,
    /// All live agents, in roster (insertion) order.
    pub agents: Vec<AgentView>,
    /// Events from the tick that produced this snapshot. Empty when
    /// the snapshot was requested outside of `tick`.
    pub events: Vec<SimEvent>,
}

/// One renderable agent: a filled circle at `position` with `radius`,
/// plus the utility value for label rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentView {
    pub id: AgentId,
    pub position: Position,
    pub radius: f64,
    pub kind: AgentKind,
    /// Utility computed on the most recent tick.
    pub utility: f64,
    pub energy: f64,
    pub salience: f64,
    pub age: u64,
}
