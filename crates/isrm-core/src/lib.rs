//! Core types and definitions for the ISRM agent simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, configuration, snapshot views, events, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
