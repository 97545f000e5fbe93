//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Agent lifecycle category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    /// Spawned probabilistically, removed by utility collapse, lifespan
    /// expiry, or collision.
    #[default]
    Transient,
    /// Created once at engine construction, exempt from every despawn
    /// rule ("the immortal").
    Persistent,
}

/// Why a transient agent was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalCause {
    /// Utility fell to zero.
    UtilityCollapse,
    /// Age exceeded lifespan.
    LifespanExceeded,
    /// Overlapped another agent.
    Collision,
}
