//! Decision logic for the ISRM agent simulation.
//!
//! Pure functions and plain data: the utility rule that gates each
//! agent's move/decay/remove decision, and the danger-map steering used
//! by the persistent agent. No ECS dependency.

pub mod steering;
pub mod utility;

pub use steering::{DangerMap, DIRECTIONS};
pub use utility::{CoherencePolicy, CollapseAction, DecisionPolicy};

#[cfg(test)]
mod tests;
