use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{CellCount, Coord};

/// Read-only snapshot of a single grid cell, for display callers.
///
/// `hint` and `mined` are exposed unconditionally; it is the renderer's job
/// to decide what an unrevealed cell may show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub coords: Vec<Coord>,
    pub mined: bool,
    pub selected: bool,
    pub hint: CellCount,
    pub neighbor_count: CellCount,
}
