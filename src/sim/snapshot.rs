use serde::{Deserialize, Serialize};

use crate::grid::Percolation;

/// Renderable state of one site, as classified by the core's queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Blocked,
    Open,
    Full,
}

/// Immutable picture of the whole grid at one simulation step, handed from
/// the driver to whoever displays it. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub n: usize,
    pub step: usize,
    pub open_sites: usize,
    pub percolates: bool,
    pub cells: Vec<CellState>,
}

impl GridSnapshot {
    pub fn capture(model: &mut Percolation, step: usize) -> Self {
        let n = model.size();
        let mut cells = Vec::with_capacity(n * n);
        for row in 1..=n {
            for col in 1..=n {
                let state = if model.is_full(row, col).expect("coordinates stay in range") {
                    CellState::Full
                } else if model.is_open(row, col).expect("coordinates stay in range") {
                    CellState::Open
                } else {
                    CellState::Blocked
                };
                cells.push(state);
            }
        }
        Self {
            n,
            step,
            open_sites: model.open_sites(),
            percolates: model.percolates(),
            cells,
        }
    }

    /// Cell state at 1-based `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.cells[(row - 1) * self.n + (col - 1)]
    }
}
