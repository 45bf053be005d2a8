#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use layout::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod layout;
mod types;

/// Validated grid shape: dimension count and per-dimension sizes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    dim_sizes: Vec<Coord>,
}

impl GameConfig {
    pub fn new(dim_sizes: Vec<Coord>) -> Result<Self> {
        if dim_sizes.is_empty() || dim_sizes.iter().any(|&size| size == 0) {
            return Err(GameError::InvalidDimensions);
        }
        dim_sizes
            .iter()
            .try_fold(1usize, |acc, &size| acc.checked_mul(size))
            .ok_or(GameError::TooManyCells)?;
        Ok(Self { dim_sizes })
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
}

/// Where the mines are: a boolean mask over the full grid plus the number of
/// mask bits set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: ArrayD<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: ArrayD<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Builds the mask from explicit mine coordinates. A coordinate with the
    /// wrong arity or outside the grid is rejected; duplicates coalesce into
    /// a single mine, so `mine_count` reflects distinct mined cells.
    pub fn from_mine_coords(config: &GameConfig, mine_coords: &[Vec<Coord>]) -> Result<Self> {
        let mut mine_mask: ArrayD<bool> = ArrayD::from_elem(IxDyn(config.dim_sizes()), false);

        for coords in mine_coords {
            if coords.len() != config.dim()
                || coords.iter().zip(config.dim_sizes()).any(|(&c, &size)| c >= size)
            {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[IxDyn(coords)] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            dim_sizes: self.dim_sizes().to_vec(),
        }
    }

    pub fn dim_sizes(&self) -> &[Coord] {
        self.mine_mask.shape()
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len()
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: &[Coord]) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: &[Coord]) -> CellCount {
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|pos| self[&pos[..]])
            .count()
    }

    pub(crate) fn mask(&self) -> &ArrayD<bool> {
        &self.mine_mask
    }

    pub(crate) fn iter_neighbors(&self, coords: &[Coord]) -> NeighborIter {
        self.mine_mask.iter_neighbors(coords)
    }
}

impl Index<&[Coord]> for MineLayout {
    type Output = bool;

    fn index(&self, coords: &[Coord]) -> &Self::Output {
        &self.mine_mask[IxDyn(coords)]
    }
}

/// Result of a single select operation.
///
/// `NoChange` and `Revealed` both mean the game continues; they are kept
/// distinct so callers can tell a no-op (out of bounds, already revealed,
/// game over) from an actual reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitMine | Self::Won)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn config_rejects_degenerate_shapes() {
        assert_eq!(GameConfig::new(vec![]), Err(GameError::InvalidDimensions));
        assert_eq!(
            GameConfig::new(vec![3, 0, 2]),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(
            GameConfig::new(vec![usize::MAX, usize::MAX]),
            Err(GameError::TooManyCells)
        );
    }

    #[test]
    fn config_reports_shape() {
        let config = GameConfig::new(vec![7, 7]).unwrap();
        assert_eq!(config.dim(), 2);
        assert_eq!(config.total_cells(), 49);
        assert_eq!(config.dim_sizes(), &[7, 7]);
    }

    #[test]
    fn mine_layout_rejects_bad_coordinates() {
        let config = GameConfig::new(vec![3, 3]).unwrap();
        assert_eq!(
            MineLayout::from_mine_coords(&config, &[vec![3, 0]]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            MineLayout::from_mine_coords(&config, &[vec![1]]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            MineLayout::from_mine_coords(&config, &[vec![0, 1, 2]]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn duplicate_mines_coalesce() {
        let config = GameConfig::new(vec![3, 3]).unwrap();
        let layout =
            MineLayout::from_mine_coords(&config, &[vec![1, 1], vec![1, 1], vec![0, 2]]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 7);
    }

    #[test]
    fn adjacent_mine_count_sums_moore_neighborhood() {
        let config = GameConfig::new(vec![3, 3]).unwrap();
        let layout =
            MineLayout::from_mine_coords(&config, &[vec![0, 0], vec![2, 2], vec![1, 2]]).unwrap();
        assert_eq!(layout.adjacent_mine_count(&[1, 1]), 3);
        assert_eq!(layout.adjacent_mine_count(&[0, 1]), 2);
        assert_eq!(layout.adjacent_mine_count(&[2, 0]), 0);
        // The cell's own mine is not part of its hint.
        assert_eq!(layout.adjacent_mine_count(&[0, 0]), 0);
    }
}
