//! Uniform grid for neighbour lookups.
//!
//! Agents are bucketed by cell; a query returns every agent in the 3×3 block
//! of cells around a position. With a cell size at least as large as the
//! widest rule radius, the block is a superset of every distance band, so
//! the rules see exactly the neighbours a full scan would give them.

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeMap, vec::Vec};
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use crate::{vector, Boid, BoidConfig, Vector2D};

type Cell = (i32, i32);

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f32,
    cells: BTreeMap<Cell, Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size: cell_size.max(1.0),
            cells: BTreeMap::new(),
        }
    }

    /// Grid sized to the widest band of the rules
    pub fn for_config(config: &BoidConfig) -> Self {
        Self::new(config.separation_radius().max(config.alignment_radius()))
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Positions are unbounded, so cells are keyed rather than clamped
    fn cell_of(&self, position: Vector2D) -> Cell {
        (
            vector::floor(position.x / self.cell_size) as i32,
            vector::floor(position.y / self.cell_size) as i32,
        )
    }

    pub fn rebuild(&mut self, boids: &[Boid]) {
        self.cells.clear();
        for (index, boid) in boids.iter().enumerate() {
            let cell = self.cell_of(boid.position);
            self.cells.entry(cell).or_default().push(index);
        }
    }

    /// Writes the indices near `position` into `out`, in ascending order
    pub fn candidates_into(&self, position: Vector2D, out: &mut Vec<usize>) {
        out.clear();
        let (cx, cy) = self.cell_of(position);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let cell = (cx.saturating_add(dx), cy.saturating_add(dy));
                if let Some(indices) = self.cells.get(&cell) {
                    out.extend_from_slice(indices);
                }
            }
        }
        out.sort_unstable();
        out.dedup();
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}
