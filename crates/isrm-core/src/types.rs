//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D position on the simulation plane (abstract units, origin top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (units per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

/// A quantized danger-map grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub gx: i64,
    pub gy: i64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Quantize to a grid cell of the given size.
    pub fn to_cell(&self, cell_size: f64) -> GridCell {
        GridCell {
            gx: (self.x / cell_size).floor() as i64,
            gy: (self.y / cell_size).floor() as i64,
        }
    }
}

impl Velocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Speed magnitude (units per tick).
    pub fn speed(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

impl GridCell {
    /// Neighboring cell offset by (dx, dy) steps.
    pub fn offset(&self, dx: i32, dy: i32) -> GridCell {
        GridCell {
            gx: self.gx + dx as i64,
            gy: self.gy + dy as i64,
        }
    }
}
