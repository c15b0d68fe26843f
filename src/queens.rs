//! A region-queens puzzle asks for one queen per labeled region of an
//! `n` × `n` board such that no two queens share a row or a column, and no
//! two queens touch, even diagonally.
//!
//! Unlike the classical
//! [`n` queens puzzle](https://en.wikipedia.org/wiki/Eight_queens_puzzle),
//! the diagonal exclusion is king-move only: a queen blocks its eight
//! surrounding cells, not entire diagonal rays.

use crate::{Assignment, Error, Grid, Model, Placement};

/// Marker value for a cell that holds a queen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Queen;

/// An instance of the region queens puzzle.
///
/// The board is described by one region label per cell, row-major. The number
/// of distinct labels must equal the side length, so that one queen per
/// region also covers every row and column.
#[derive(Debug, Clone)]
pub struct RegionQueens {
    grid: Grid,
    regions: Vec<u8>,
    // Distinct labels sorted by region size, smallest first. Ties keep the
    // order of first occurrence in the grid, which fixes the search order.
    ordered_labels: Vec<u8>,
    // Cells of each region in ascending index order, parallel to
    // `ordered_labels`.
    region_cells: Vec<Vec<usize>>,
}

impl RegionQueens {
    /// Create a puzzle from a flat, row-major sequence of region labels.
    ///
    /// Fails with [`Error::NotSquare`] if the length is not a perfect square
    /// and [`Error::RegionCountMismatch`] if the number of distinct labels
    /// does not equal the side length.
    pub fn new(regions: Vec<u8>) -> Result<Self, Error> {
        let grid = Grid::from_len(regions.len())?;

        let mut ordered_labels: Vec<u8> = Vec::new();
        for &label in &regions {
            if !ordered_labels.contains(&label) {
                ordered_labels.push(label);
            }
        }

        if ordered_labels.len() != grid.side() {
            return Err(Error::RegionCountMismatch {
                regions: ordered_labels.len(),
                side: grid.side(),
            });
        }

        // Smallest region first. `sort_by_key` is stable, so equally sized
        // regions stay in first-occurrence order.
        ordered_labels.sort_by_key(|&label| regions.iter().filter(|&&r| r == label).count());

        let region_cells = ordered_labels
            .iter()
            .map(|&label| {
                (0..regions.len())
                    .filter(|&cell| regions[cell] == label)
                    .collect()
            })
            .collect();

        Ok(RegionQueens {
            grid,
            regions,
            ordered_labels,
            region_cells,
        })
    }

    /// Return the board geometry.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Solve the puzzle.
    ///
    /// Returns one `true` per queen cell, row-major, or `None` if no
    /// placement satisfies every constraint.
    pub fn solve(&self) -> Option<Vec<bool>> {
        let solution = self.solver().solve()?;
        let queens: Vec<bool> = solution.iter().map(|value| value.is_some()).collect();

        debug_assert!(
            self.verify(&queens),
            "search accepted an inconsistent queen placement"
        );
        Some(queens)
    }

    /// Return true if `queens` is a complete, valid solution to this puzzle.
    pub fn verify(&self, queens: &[bool]) -> bool {
        if queens.len() != self.regions.len() {
            return false;
        }

        let queen_cells: Vec<usize> = (0..queens.len()).filter(|&cell| queens[cell]).collect();
        if queen_cells.len() != self.grid.side() {
            return false;
        }

        for (i, &a) in queen_cells.iter().enumerate() {
            for &b in &queen_cells[i + 1..] {
                if self.regions[a] == self.regions[b]
                    || self.grid.row(a) == self.grid.row(b)
                    || self.grid.column(a) == self.grid.column(b)
                    || self.grid.king_neighbors(a).contains(&b)
                {
                    return false;
                }
            }
        }

        // One queen per region follows from the counts: `side` queens in
        // `side` regions with no region repeated.
        true
    }
}

impl Model for RegionQueens {
    type Value = Queen;
    // Index into the size-ordered region list.
    type Variable = usize;

    fn cell_count(&self) -> usize {
        self.regions.len()
    }

    fn select_variable(&self, assignment: &Assignment<Queen>) -> Option<usize> {
        self.region_cells
            .iter()
            .position(|cells| cells.iter().all(|&cell| !assignment.is_assigned(cell)))
    }

    fn placements(&self, _: &Assignment<Queen>, &region: &usize) -> Vec<Placement<Queen>> {
        self.region_cells[region]
            .iter()
            .map(|&cell| Placement { cell, value: Queen })
            .collect()
    }

    fn is_consistent(&self, assignment: &Assignment<Queen>, placement: &Placement<Queen>) -> bool {
        let cell = placement.cell;

        for other in 0..self.regions.len() {
            if !assignment.is_assigned(other) {
                continue;
            }
            if self.regions[other] == self.regions[cell]
                || self.grid.row(other) == self.grid.row(cell)
                || self.grid.column(other) == self.grid.column(cell)
            {
                return false;
            }
        }

        self.grid
            .king_neighbors(cell)
            .iter()
            .all(|&neighbor| !assignment.is_assigned(neighbor))
    }
}
