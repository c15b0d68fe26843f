//! A 6×6 [Sudoku](https://en.wikipedia.org/wiki/Sudoku) variant: digits 1–6,
//! each row, column, and 2-row × 3-column box containing every digit exactly
//! once, with some cells pre-filled.

use crate::{Assignment, Error, Grid, Model, Placement};

/// The fixed board side length.
pub const SIDE: usize = 6;

const BOX_ROWS: usize = 2;
const BOX_COLUMNS: usize = 3;

/// An instance of the 6×6 boxed Latin square puzzle.
#[derive(Debug, Clone)]
pub struct MiniSudoku {
    grid: Grid,
    givens: Vec<Option<u8>>,
}

impl MiniSudoku {
    /// Create a puzzle from a flat, row-major sequence of 36 cells, `0` for
    /// blank and `1..=6` for a given digit.
    ///
    /// Fails with [`Error::NotSquare`], [`Error::SideMismatch`] for square
    /// boards of any other size, or [`Error::ValueOutOfRange`] for a given
    /// outside the digit range.
    pub fn new(cells: &[u8]) -> Result<Self, Error> {
        let grid = Grid::from_len(cells.len())?;
        if grid.side() != SIDE {
            return Err(Error::SideMismatch {
                expected: SIDE,
                actual: grid.side(),
            });
        }

        let mut givens = Vec::with_capacity(cells.len());
        for (cell, &value) in cells.iter().enumerate() {
            match value {
                0 => givens.push(None),
                1..=6 => givens.push(Some(value)),
                _ => return Err(Error::ValueOutOfRange { cell, value }),
            }
        }

        Ok(MiniSudoku { grid, givens })
    }

    /// Solve the puzzle.
    ///
    /// Returns the completed board row-major, or `None` if the givens admit
    /// no completion.
    pub fn solve(&self) -> Option<Vec<u8>> {
        let solution = self.solver().solve()?;
        let board: Vec<u8> = solution
            .iter()
            .map(|digit| digit.expect("complete board left a cell blank"))
            .collect();

        debug_assert!(self.verify(&board), "search accepted an invalid board");
        Some(board)
    }

    /// Return true if `board` is a complete, valid solution to this puzzle.
    pub fn verify(&self, board: &[u8]) -> bool {
        if board.len() != self.grid.len() {
            return false;
        }

        for (cell, &given) in self.givens.iter().enumerate() {
            if let Some(digit) = given {
                if board[cell] != digit {
                    return false;
                }
            }
        }

        // Each row, column, and box must hold six distinct digits in 1..=6.
        for unit in Self::units() {
            let mut seen = [false; SIDE];
            for cell in unit {
                let digit = board[cell];
                if !(1..=6).contains(&digit) || seen[digit as usize - 1] {
                    return false;
                }
                seen[digit as usize - 1] = true;
            }
        }

        true
    }

    // All row, column, and box cell groups.
    fn units() -> impl Iterator<Item = [usize; SIDE]> {
        let rows = (0..SIDE).map(|r| core::array::from_fn(|c| r * SIDE + c));
        let columns = (0..SIDE).map(|c| core::array::from_fn(|r| r * SIDE + c));
        let boxes_per_row = SIDE / BOX_COLUMNS;
        let boxes = (0..SIDE).map(move |b| {
            let start_row = (b / boxes_per_row) * BOX_ROWS;
            let start_column = (b % boxes_per_row) * BOX_COLUMNS;
            core::array::from_fn(|i| {
                (start_row + i / BOX_COLUMNS) * SIDE + start_column + i % BOX_COLUMNS
            })
        });

        rows.chain(columns).chain(boxes)
    }

    // True if `digit` already appears in the row, column, or box of `cell`.
    fn conflicts(&self, assignment: &Assignment<u8>, cell: usize, digit: u8) -> bool {
        let (row, column) = (self.grid.row(cell), self.grid.column(cell));

        for i in 0..SIDE {
            if assignment.get(self.grid.index(row, i)) == Some(digit)
                || assignment.get(self.grid.index(i, column)) == Some(digit)
            {
                return true;
            }
        }

        let start_row = row - row % BOX_ROWS;
        let start_column = column - column % BOX_COLUMNS;
        for r in start_row..start_row + BOX_ROWS {
            for c in start_column..start_column + BOX_COLUMNS {
                if assignment.get(self.grid.index(r, c)) == Some(digit) {
                    return true;
                }
            }
        }

        false
    }
}

impl Model for MiniSudoku {
    type Value = u8;
    type Variable = usize;

    fn cell_count(&self) -> usize {
        self.grid.len()
    }

    fn seed(&self, assignment: &mut Assignment<u8>) {
        for (cell, &given) in self.givens.iter().enumerate() {
            if let Some(digit) = given {
                assignment.assign(cell, digit);
            }
        }
    }

    fn select_variable(&self, assignment: &Assignment<u8>) -> Option<usize> {
        (0..assignment.len()).find(|&cell| !assignment.is_assigned(cell))
    }

    fn placements(&self, _: &Assignment<u8>, &cell: &usize) -> Vec<Placement<u8>> {
        (1..=6).map(|value| Placement { cell, value }).collect()
    }

    fn is_consistent(&self, assignment: &Assignment<u8>, placement: &Placement<u8>) -> bool {
        !self.conflicts(assignment, placement.cell, placement.value)
    }
}
