//! Events emitted by the simulation for host feedback.

use serde::{Deserialize, Serialize};

use crate::components::AgentId;
use crate::enums::RemovalCause;

/// Lifecycle events buffered during a tick and drained into the
/// snapshot it returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A transient agent entered the population.
    Spawned { id: AgentId },
    /// A transient agent left the population.
    Removed { id: AgentId, cause: RemovalCause },
    /// Two agents overlapped this tick.
    Collision { a: AgentId, b: AgentId },
}
