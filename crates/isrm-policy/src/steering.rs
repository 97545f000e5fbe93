//! Danger map and avoidance steering.
//!
//! Collisions are recorded into a sparse grid of quantized cells; the
//! persistent agent reads the 8 cells around its position and steers
//! toward the least-threatening one. Cells are never evicted — the map
//! grows for the life of the simulation.

use std::collections::HashMap;

use isrm_core::types::{GridCell, Position};

/// The 8 candidate directions, in tie-break order: when several cells
/// record the same threat count, the earliest entry wins.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Sparse grid cell -> collision count.
#[derive(Debug, Clone)]
pub struct DangerMap {
    cell_size: f64,
    cells: HashMap<GridCell, u32>,
}

impl DangerMap {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
        }
    }

    /// Quantize a position to its cell.
    pub fn cell_for(&self, position: &Position) -> GridCell {
        position.to_cell(self.cell_size)
    }

    /// Record one collision at the given position.
    pub fn record(&mut self, position: &Position) {
        let cell = self.cell_for(position);
        *self.cells.entry(cell).or_insert(0) += 1;
    }

    /// Collision count recorded for a cell.
    pub fn threat_at(&self, cell: &GridCell) -> u32 {
        self.cells.get(cell).copied().unwrap_or(0)
    }

    /// Number of cells that have recorded at least one collision.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The direction among [`DIRECTIONS`] whose neighboring cell has the
    /// lowest recorded threat, ties broken by list order.
    pub fn safest_direction(&self, position: &Position) -> (i32, i32) {
        let here = self.cell_for(position);
        let mut safest = DIRECTIONS[0];
        let mut min_threat = u32::MAX;
        for (dx, dy) in DIRECTIONS {
            let threat = self.threat_at(&here.offset(dx, dy));
            if threat < min_threat {
                min_threat = threat;
                safest = (dx, dy);
            }
        }
        safest
    }
}
