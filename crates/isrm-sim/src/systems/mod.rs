//! Simulation systems, run by the engine in a fixed order each tick:
//! spawn, utility, steering, movement, collision, cleanup, snapshot.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod steering;
pub mod utility;
