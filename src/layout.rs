use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{CellCount, Coord};

/// Mixed-radix mapping between N-dimensional coordinates and flat storage
/// indices, most significant dimension first (row-major).
///
/// The two mapping functions are exact inverses over the grid: every flat
/// index in `[0, total_cells)` and every in-bounds coordinate tuple round-trip
/// losslessly. Neither bounds-checks its input; out-of-range values are a
/// caller contract violation, and checked entry points go through
/// [`GridLayout::in_bounds`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    dim_sizes: Vec<Coord>,
    weights: Vec<CellCount>,
}

impl GridLayout {
    /// Expects a size vector already validated by `GameConfig`: non-empty,
    /// all sizes positive, product within `usize`.
    pub fn new(dim_sizes: &[Coord]) -> Self {
        let mut weights = Vec::with_capacity(dim_sizes.len());
        let mut weight: CellCount = 1;
        for &size in dim_sizes.iter().rev() {
            weights.push(weight);
            weight *= size;
        }
        weights.reverse();
        Self {
            dim_sizes: dim_sizes.to_vec(),
            weights,
        }
    }

    pub fn dim(&self) -> usize {
        self.dim_sizes.len()
    }

    pub fn dim_sizes(&self) -> &[Coord] {
        &self.dim_sizes
    }

    pub fn total_cells(&self) -> CellCount {
        self.dim_sizes.iter().product()
    }

    pub fn coords_to_index(&self, coords: &[Coord]) -> usize {
        debug_assert_eq!(coords.len(), self.dim_sizes.len());
        coords.iter().zip(&self.weights).map(|(&c, &w)| c * w).sum()
    }

    pub fn index_to_coords(&self, index: usize) -> Vec<Coord> {
        debug_assert!(index < self.total_cells());
        let mut rest = index;
        self.weights
            .iter()
            .map(|&weight| {
                let coord = rest / weight;
                rest %= weight;
                coord
            })
            .collect()
    }

    pub fn in_bounds(&self, coords: &[Coord]) -> bool {
        coords.len() == self.dim_sizes.len()
            && coords.iter().zip(&self.dim_sizes).all(|(&c, &size)| c < size)
    }
}
