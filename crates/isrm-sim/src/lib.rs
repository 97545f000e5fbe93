//! The ISRM agent simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world, advances the agent
//! population one discrete step per `tick`, and produces `SimSnapshot`s
//! for the host to render. Completely headless (no canvas or window
//! dependency), enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use isrm_core as core;
