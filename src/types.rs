use alloc::vec;
use alloc::vec::Vec;
use ndarray::ArrayD;

/// Single coordinate axis used for grid sizes and positions.
pub type Coord = usize;

/// Count type used for mine counts, cell counts, and hint values.
///
/// Hints are counts of mined Moore neighbors, which can reach `3^dim - 1`
/// on high-dimensional grids, so they share the wide count type instead of
/// a fixed small integer.
pub type CellCount = usize;

/// True iff the two cells are within Chebyshev distance 1 of each other on
/// every axis. Callers exclude the `a == b` case themselves; a cell is
/// never its own neighbor.
pub fn is_adjacent(a: &[Coord], b: &[Coord]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| x.abs_diff(y) <= 1)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: &[Coord]) -> NeighborIter;
}

impl<T> NeighborIterExt for ArrayD<T> {
    fn iter_neighbors(&self, center: &[Coord]) -> NeighborIter {
        NeighborIter::new(center.to_vec(), self.shape().to_vec())
    }
}

/// Applies a per-axis displacement to `center`, returning a value only when
/// every axis remains in bounds.
fn apply_offsets(center: &[Coord], offsets: &[i8], bounds: &[Coord]) -> Option<Vec<Coord>> {
    center
        .iter()
        .zip(offsets)
        .zip(bounds)
        .map(|((&pos, &offset), &size)| {
            let next = pos.checked_add_signed(offset as isize)?;
            (next < size).then_some(next)
        })
        .collect()
}

/// Iterator over the in-bounds Moore neighborhood of a center cell in any
/// number of dimensions.
///
/// Walks the displacement vectors in `{-1, 0, 1}^dim` as a ternary counter,
/// skipping the zero vector, so the neighborhood is never truncated no
/// matter the dimension count.
#[derive(Debug)]
pub struct NeighborIter {
    center: Vec<Coord>,
    bounds: Vec<Coord>,
    offsets: Vec<i8>,
    done: bool,
}

impl NeighborIter {
    fn new(center: Vec<Coord>, bounds: Vec<Coord>) -> Self {
        debug_assert_eq!(center.len(), bounds.len());
        let dim = center.len();
        Self {
            center,
            bounds,
            offsets: vec![-1; dim],
            done: dim == 0,
        }
    }

    /// Ternary increment of the offset vector, least significant axis last.
    fn advance(&mut self) {
        for offset in self.offsets.iter_mut().rev() {
            if *offset < 1 {
                *offset += 1;
                return;
            }
            *offset = -1;
        }
        self.done = true;
    }
}

impl Iterator for NeighborIter {
    type Item = Vec<Coord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let skip_center = self.offsets.iter().all(|&offset| offset == 0);
            let next_item = if skip_center {
                None
            } else {
                apply_offsets(&self.center, &self.offsets, &self.bounds)
            };
            self.advance();

            if next_item.is_some() {
                return next_item;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridLayout;

    #[test]
    fn adjacency_is_chebyshev_distance_one() {
        assert!(is_adjacent(&[3, 3], &[4, 4]));
        assert!(is_adjacent(&[3, 3], &[3, 2]));
        assert!(is_adjacent(&[3, 3], &[3, 3]));
        assert!(!is_adjacent(&[3, 3], &[5, 3]));
        assert!(!is_adjacent(&[3, 3], &[4, 1]));
    }

    #[test]
    fn adjacency_on_single_axis() {
        assert!(is_adjacent(&[1], &[2]));
        assert!(is_adjacent(&[3], &[2]));
        assert!(!is_adjacent(&[0], &[2]));
        assert!(!is_adjacent(&[4], &[2]));
    }

    #[test]
    fn adjacency_rejects_arity_mismatch() {
        assert!(!is_adjacent(&[1, 1], &[1]));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let layout = GridLayout::new(&[3, 4]);
        for i in 0..layout.total_cells() {
            for j in 0..layout.total_cells() {
                let a = layout.index_to_coords(i);
                let b = layout.index_to_coords(j);
                assert_eq!(is_adjacent(&a, &b), is_adjacent(&b, &a));
            }
        }
    }

    #[test]
    fn neighbor_iter_agrees_with_pairwise_adjacency() {
        let grid: ArrayD<u8> = ArrayD::from_elem(ndarray::IxDyn(&[3, 2, 4]), 0);
        let layout = GridLayout::new(&[3, 2, 4]);

        for i in 0..layout.total_cells() {
            let center = layout.index_to_coords(i);
            let mut expected: Vec<Vec<Coord>> = (0..layout.total_cells())
                .filter(|&j| j != i)
                .map(|j| layout.index_to_coords(j))
                .filter(|other| is_adjacent(&center, other))
                .collect();
            let mut found: Vec<Vec<Coord>> = grid.iter_neighbors(&center).collect();
            expected.sort();
            found.sort();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn neighbor_counts_match_position_in_grid() {
        let grid: ArrayD<u8> = ArrayD::from_elem(ndarray::IxDyn(&[7, 7]), 0);
        assert_eq!(grid.iter_neighbors(&[0, 0]).count(), 3);
        assert_eq!(grid.iter_neighbors(&[0, 3]).count(), 5);
        assert_eq!(grid.iter_neighbors(&[3, 3]).count(), 8);

        let cube: ArrayD<u8> = ArrayD::from_elem(ndarray::IxDyn(&[5, 5, 5]), 0);
        assert_eq!(cube.iter_neighbors(&[2, 2, 2]).count(), 26);
        assert_eq!(cube.iter_neighbors(&[0, 0, 0]).count(), 7);
    }

    #[test]
    fn neighbor_iter_on_single_axis_stays_on_that_axis() {
        let line: ArrayD<u8> = ArrayD::from_elem(ndarray::IxDyn(&[5]), 0);
        let found: Vec<Vec<Coord>> = line.iter_neighbors(&[2]).collect();
        assert_eq!(found, vec![vec![1], vec![3]]);
        let found: Vec<Vec<Coord>> = line.iter_neighbors(&[0]).collect();
        assert_eq!(found, vec![vec![1]]);
    }
}
