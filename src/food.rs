use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// Random samples tried per grid cell before falling back to a full scan.
const SAMPLES_PER_CELL: usize = 4;

/// A set of cells food must not be placed on.
pub trait Occupancy {
    fn occupies(&self, cell: Cell) -> bool;
}

impl Occupancy for Snake {
    fn occupies(&self, cell: Cell) -> bool {
        self.collides_with(cell)
    }
}

impl Occupancy for HashSet<Cell> {
    fn occupies(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

/// Picks free cells for food with its own random source.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    /// Creates a placer seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a deterministic placer for tests and reproducible sessions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly random cell not in `occupied`.
    ///
    /// Samples the whole grid until a free cell turns up. A crowded grid
    /// falls back to enumerating the free cells; `None` means every cell is
    /// taken.
    pub fn place<O: Occupancy + ?Sized>(&mut self, bounds: GridSize, occupied: &O) -> Option<Cell> {
        let attempts = bounds.total_cells().saturating_mul(SAMPLES_PER_CELL);

        for _ in 0..attempts {
            let candidate = Cell {
                x: self.rng.gen_range(0..i32::from(bounds.width)),
                y: self.rng.gen_range(0..i32::from(bounds.height)),
            };
            if !occupied.occupies(candidate) {
                return Some(candidate);
            }
        }

        debug!(attempts, "food sampling exhausted, scanning for free cells");
        free_cell(&mut self.rng, bounds, occupied)
    }
}

fn free_cell<R, O>(rng: &mut R, bounds: GridSize, occupied: &O) -> Option<Cell>
where
    R: Rng + ?Sized,
    O: Occupancy + ?Sized,
{
    let mut candidates = Vec::new();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let cell = Cell { x, y };
            if !occupied.occupies(cell) {
                candidates.push(cell);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
