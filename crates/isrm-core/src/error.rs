//! Error taxonomy. Construction is the only fallible operation; every
//! other engine call is total over valid state.

use thiserror::Error;

/// Rejected simulation configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("plane bounds must be positive, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    #[error("spawn probability must be in [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("salience decay must be in (0, 1], got {0}")]
    InvalidDecay(f64),
}
