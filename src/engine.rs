use alloc::collections::VecDeque;
use alloc::vec::Vec;
use ndarray::{ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Game-state engine over an N-dimensional grid.
///
/// Owns the mine layout, the hint grid, and the monotonic revealed mask.
/// Hints are computed once at construction by enumerating each cell's Moore
/// neighborhood; this produces the same result as a pairwise scan of all
/// cells in O(cells * 3^dim) instead of O(cells^2).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    mine_layout: MineLayout,
    layout: GridLayout,
    hints: ArrayD<CellCount>,
    revealed: ArrayD<bool>,
    revealed_count: CellCount,
    state: EngineState,
    triggered_mine: Option<Vec<Coord>>,
}

impl PlayEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let layout = GridLayout::new(mine_layout.dim_sizes());
        let shape = IxDyn(mine_layout.dim_sizes());

        let mut hints: ArrayD<CellCount> = ArrayD::from_elem(shape.clone(), 0);
        for index in 0..layout.total_cells() {
            let coords = layout.index_to_coords(index);
            hints[IxDyn(&coords)] = mine_layout.adjacent_mine_count(&coords);
        }

        Self {
            mine_layout,
            layout,
            hints,
            revealed: ArrayD::from_elem(shape, false),
            revealed_count: 0,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn dim(&self) -> usize {
        self.layout.dim()
    }

    pub fn dim_sizes(&self) -> &[Coord] {
        self.layout.dim_sizes()
    }

    pub fn total_cells(&self) -> CellCount {
        self.layout.total_cells()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    /// The mine that ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<&[Coord]> {
        self.triggered_mine.as_deref()
    }

    /// Selects the cell at `coords`.
    ///
    /// Out-of-range or wrong-arity coordinates, an already-revealed target,
    /// and any call after the game has finished are silent no-ops returning
    /// [`SelectOutcome::NoChange`]. Selecting a mine loses immediately with
    /// no propagation; selecting a zero-hint cell flood-fills its connected
    /// zero region plus the one-deep hinted boundary.
    pub fn select(&mut self, coords: &[Coord]) -> SelectOutcome {
        if self.state.is_finished() {
            return SelectOutcome::NoChange;
        }

        if !self.layout.in_bounds(coords) {
            log::warn!("select out of bounds: {:?}", coords);
            return SelectOutcome::NoChange;
        }

        if self.revealed[IxDyn(coords)] {
            return SelectOutcome::NoChange;
        }

        if self.mine_layout.contains_mine(coords) {
            log::debug!("mine hit at {:?}", coords);
            self.revealed[IxDyn(coords)] = true;
            self.triggered_mine = Some(coords.to_vec());
            self.state = EngineState::Lost;
            return SelectOutcome::HitMine;
        }

        self.mark_revealed(coords);
        if self.hints[IxDyn(coords)] == 0 {
            self.flood_fill(coords);
        }

        if self.revealed_count == self.mine_layout.safe_cell_count() {
            log::debug!("all {} safe cells revealed", self.revealed_count);
            self.state = EngineState::Won;
            SelectOutcome::Won
        } else {
            self.mark_started();
            SelectOutcome::Revealed
        }
    }

    /// Reveals the connected zero-hint region around `start` plus its
    /// one-cell-deep boundary of hinted cells.
    ///
    /// Uses an explicit work list rather than recursion so the depth of the
    /// cascade is bounded by the queue, not the call stack. A zero-hint cell
    /// has no mined neighbor by definition, so the fill can never step on a
    /// mine.
    fn flood_fill(&mut self, start: &[Coord]) {
        let mut to_visit: VecDeque<Vec<Coord>> = self
            .revealed
            .iter_neighbors(start)
            .filter(|pos| !self.revealed[IxDyn(pos)])
            .collect();

        while let Some(coords) = to_visit.pop_front() {
            if self.revealed[IxDyn(&coords)] {
                continue;
            }
            self.mark_revealed(&coords);

            if self.hints[IxDyn(&coords)] == 0 {
                let next: Vec<Vec<Coord>> = self
                    .mine_layout
                    .iter_neighbors(&coords)
                    .filter(|pos| !self.revealed[IxDyn(pos)])
                    .collect();
                to_visit.extend(next);
            }
        }
    }

    // Only called on unrevealed, unmined cells.
    fn mark_revealed(&mut self, coords: &[Coord]) {
        self.revealed[IxDyn(coords)] = true;
        self.revealed_count += 1;
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = EngineState::Active;
        }
    }

    /// Pure win scan: true iff every non-mined cell has been revealed.
    /// Recomputed from the masks rather than read from the cached counter.
    pub fn is_cleared(&self) -> bool {
        self.revealed
            .iter()
            .zip(self.mine_layout.mask())
            .all(|(&selected, &mined)| selected || mined)
    }

    pub fn cell_at(&self, coords: &[Coord]) -> Option<CellView> {
        self.layout
            .in_bounds(coords)
            .then(|| self.cell_view(coords.to_vec()))
    }

    /// Enumerates every cell in flat-index order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        (0..self.layout.total_cells()).map(|index| self.cell_view(self.layout.index_to_coords(index)))
    }

    fn cell_view(&self, coords: Vec<Coord>) -> CellView {
        CellView {
            mined: self.mine_layout.contains_mine(&coords),
            selected: self.revealed[IxDyn(&coords)],
            hint: self.hints[IxDyn(&coords)],
            neighbor_count: self.revealed.iter_neighbors(&coords).count(),
            coords,
        }
    }
}
