//! A binary-relation coloring puzzle in the style of
//! [Takuzu](https://en.wikipedia.org/wiki/Takuzu): every cell ends up one of
//! two symbols, each row and column holds exactly half of each, no three
//! consecutive cells in a row or column may match, and declared cell pairs
//! must end up equal ("same") or unequal ("different").

use crate::{Assignment, Error, Grid, Model, PairSet, Placement};

/// One of the two symbols a cell can hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// The first symbol; tried first during search.
    Sun,
    /// The second symbol.
    Moon,
}

/// An instance of the binary coloring puzzle.
#[derive(Debug, Clone)]
pub struct Tango {
    grid: Grid,
    givens: Vec<Option<Symbol>>,
    same: PairSet,
    different: PairSet,
}

impl Tango {
    /// Create a puzzle from a flat, row-major sequence of given cells
    /// (`None` for empty) plus "same" and "different" pair constraints.
    ///
    /// Pairs may be supplied in either or both directions. Fails with
    /// [`Error::NotSquare`], [`Error::OddSide`] (half-and-half rows need an
    /// even side), or [`Error::PairOutOfBounds`].
    pub fn new(
        givens: Vec<Option<Symbol>>,
        same: &[(usize, usize)],
        different: &[(usize, usize)],
    ) -> Result<Self, Error> {
        let grid = Grid::from_len(givens.len())?;
        if grid.side() % 2 != 0 {
            return Err(Error::OddSide { side: grid.side() });
        }

        let same = PairSet::new(same.iter().copied(), givens.len())?;
        let different = PairSet::new(different.iter().copied(), givens.len())?;

        Ok(Tango {
            grid,
            givens,
            same,
            different,
        })
    }

    /// Return the board geometry.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Solve the puzzle.
    ///
    /// Returns the completed board row-major, or `None` if no completion
    /// satisfies every constraint.
    pub fn solve(&self) -> Option<Vec<Symbol>> {
        let solution = self.solver().solve()?;
        let board: Vec<Symbol> = solution
            .iter()
            .map(|symbol| symbol.expect("complete board left a cell empty"))
            .collect();

        debug_assert!(self.verify(&board), "search accepted an invalid board");
        Some(board)
    }

    /// Return true if `board` is a complete, valid solution to this puzzle.
    pub fn verify(&self, board: &[Symbol]) -> bool {
        if board.len() != self.grid.len() {
            return false;
        }

        for (cell, &given) in self.givens.iter().enumerate() {
            if let Some(symbol) = given {
                if board[cell] != symbol {
                    return false;
                }
            }
        }

        let half = self.grid.side() / 2;
        for line in 0..self.grid.side() {
            let row_suns = (0..self.grid.side())
                .filter(|&c| board[self.grid.index(line, c)] == Symbol::Sun)
                .count();
            let column_suns = (0..self.grid.side())
                .filter(|&r| board[self.grid.index(r, line)] == Symbol::Sun)
                .count();
            if row_suns != half || column_suns != half {
                return false;
            }
        }

        self.scan(|cell| Some(board[cell]))
    }

    // Shared consistency scan over a board view, which may be partial:
    // run-of-three and half-count limits per row and column, plus the pair
    // constraints, ignoring empty cells.
    fn scan(&self, at: impl Fn(usize) -> Option<Symbol>) -> bool {
        let side = self.grid.side();
        let half = side / 2;

        for line in 0..side {
            let mut row_counts = [0usize; 2];
            let mut column_counts = [0usize; 2];

            for other in 0..side {
                if let Some(symbol) = at(self.grid.index(line, other)) {
                    row_counts[symbol as usize] += 1;
                }
                if let Some(symbol) = at(self.grid.index(other, line)) {
                    column_counts[symbol as usize] += 1;
                }
            }
            if row_counts.iter().any(|&count| count > half)
                || column_counts.iter().any(|&count| count > half)
            {
                return false;
            }

            for start in 0..side.saturating_sub(2) {
                let row_run = [
                    at(self.grid.index(line, start)),
                    at(self.grid.index(line, start + 1)),
                    at(self.grid.index(line, start + 2)),
                ];
                let column_run = [
                    at(self.grid.index(start, line)),
                    at(self.grid.index(start + 1, line)),
                    at(self.grid.index(start + 2, line)),
                ];
                for run in [row_run, column_run] {
                    if run[0].is_some() && run[0] == run[1] && run[1] == run[2] {
                        return false;
                    }
                }
            }
        }

        for (a, b) in self.same.iter() {
            if let (Some(left), Some(right)) = (at(a), at(b)) {
                if left != right {
                    return false;
                }
            }
        }
        for (a, b) in self.different.iter() {
            if let (Some(left), Some(right)) = (at(a), at(b)) {
                if left == right {
                    return false;
                }
            }
        }

        true
    }
}

impl Model for Tango {
    type Value = Symbol;
    type Variable = usize;

    fn cell_count(&self) -> usize {
        self.grid.len()
    }

    fn seed(&self, assignment: &mut Assignment<Symbol>) {
        for (cell, &given) in self.givens.iter().enumerate() {
            if let Some(symbol) = given {
                assignment.assign(cell, symbol);
            }
        }
    }

    fn select_variable(&self, assignment: &Assignment<Symbol>) -> Option<usize> {
        (0..assignment.len()).find(|&cell| !assignment.is_assigned(cell))
    }

    fn placements(&self, _: &Assignment<Symbol>, &cell: &usize) -> Vec<Placement<Symbol>> {
        [Symbol::Sun, Symbol::Moon]
            .into_iter()
            .map(|value| Placement { cell, value })
            .collect()
    }

    fn is_consistent(&self, assignment: &Assignment<Symbol>, placement: &Placement<Symbol>) -> bool {
        // Full-board re-scan with the candidate overlaid; cheap at these
        // sizes.
        self.scan(|cell| {
            if cell == placement.cell {
                Some(placement.value)
            } else {
                assignment.get(cell)
            }
        })
    }
}
