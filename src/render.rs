//! Text rendering of grid snapshots.
use itertools::Itertools;

use crate::sim::snapshot::{CellState, GridSnapshot};

fn glyph(state: CellState) -> char {
    match state {
        CellState::Blocked => '#',
        CellState::Open => '.',
        CellState::Full => '~',
    }
}

/// One character per site, rows separated by newlines.
pub fn render(snapshot: &GridSnapshot) -> String {
    snapshot
        .cells
        .chunks(snapshot.n)
        .map(|row| row.iter().map(|&cell| glyph(cell)).collect::<String>())
        .join("\n")
}

/// Status line in the visualizer's format.
pub fn status_line(snapshot: &GridSnapshot) -> String {
    format!(
        "{} open sites, {}",
        snapshot.open_sites,
        if snapshot.percolates {
            "percolates"
        } else {
            "does not percolate"
        }
    )
}
