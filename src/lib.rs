#![deny(missing_docs)]

//! Chronological [backtracking](https://en.wikipedia.org/wiki/Backtracking)
//! solvers for a family of small
//! [constraint-satisfaction](https://en.wikipedia.org/wiki/Constraint_satisfaction_problem)
//! grid puzzles: region queens, waypoint paths, binary coloring, and 6×6
//! boxed Latin squares.

use core::fmt;

pub mod grid;
pub mod queens;
pub(crate) mod solver;
pub mod sudoku;
pub mod tango;
pub mod zip;

pub use grid::{Grid, PairSet};
pub use solver::{Assignment, Solver};

/// A constraint model that can be plugged into the backtracking [`Solver`].
///
/// A model supplies the four capabilities the engine is parameterized over:
/// variable selection, candidate generation, a local-consistency predicate,
/// and (folded into [`select_variable`](Model::select_variable) returning
/// `None`) the terminal check.
pub trait Model {
    /// The type of value a cell holds once assigned.
    type Value: Copy + Eq + fmt::Debug;

    /// Identifies the variable chosen by the model's selection heuristic.
    type Variable: fmt::Debug;

    /// Return the number of cells on the board.
    fn cell_count(&self) -> usize;

    /// Write the puzzle's given (pre-filled, immutable) cells into a fresh
    /// assignment before search starts.
    ///
    /// The engine never clears a cell it did not assign itself, so seeded
    /// cells survive backtracking.
    fn seed(&self, assignment: &mut Assignment<Self::Value>) {
        let _ = assignment;
    }

    /// Pick the next unassigned variable, or `None` if the assignment is
    /// complete and the search should succeed.
    fn select_variable(&self, assignment: &Assignment<Self::Value>) -> Option<Self::Variable>;

    /// Return the candidate placements for the chosen variable, in the order
    /// they should be tried.
    ///
    /// An empty list means the variable has no legal extension and the engine
    /// must backtrack.
    fn placements(
        &self,
        assignment: &Assignment<Self::Value>,
        variable: &Self::Variable,
    ) -> Vec<Placement<Self::Value>>;

    /// Return true if committing `placement` on top of the current assignment
    /// keeps the board locally consistent.
    fn is_consistent(
        &self,
        assignment: &Assignment<Self::Value>,
        placement: &Placement<Self::Value>,
    ) -> bool;

    /// Create a [`Solver`] over this model.
    fn solver(&self) -> Solver<Self>
    where
        Self: Sized,
    {
        Solver::new(self)
    }
}

impl<M> Model for &M
where
    M: Model,
{
    type Value = M::Value;
    type Variable = M::Variable;

    fn cell_count(&self) -> usize {
        <M as Model>::cell_count(self)
    }

    fn seed(&self, assignment: &mut Assignment<Self::Value>) {
        <M as Model>::seed(self, assignment)
    }

    fn select_variable(&self, assignment: &Assignment<Self::Value>) -> Option<Self::Variable> {
        <M as Model>::select_variable(self, assignment)
    }

    fn placements(
        &self,
        assignment: &Assignment<Self::Value>,
        variable: &Self::Variable,
    ) -> Vec<Placement<Self::Value>> {
        <M as Model>::placements(self, assignment, variable)
    }

    fn is_consistent(
        &self,
        assignment: &Assignment<Self::Value>,
        placement: &Placement<Self::Value>,
    ) -> bool {
        <M as Model>::is_consistent(self, assignment, placement)
    }
}

/// A tentative assignment of a value to a single cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement<V> {
    /// The flat, row-major cell index.
    pub cell: usize,
    /// The value to try at that cell.
    pub value: V,
}

/// Errors reported when constructing a puzzle from malformed input.
///
/// All variants are detected before any search starts; an unsatisfiable but
/// well-formed puzzle is *not* an error and is reported as `None` from
/// `solve`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The flat grid length is not a perfect square.
    NotSquare {
        /// The offending length.
        len: usize,
    },
    /// A relation pair references a cell outside the board.
    PairOutOfBounds {
        /// The offending pair.
        pair: (usize, usize),
        /// The number of cells on the board.
        cells: usize,
    },
    /// A region-queens grid must have exactly one region per row.
    RegionCountMismatch {
        /// The number of distinct region labels found.
        regions: usize,
        /// The board side length.
        side: usize,
    },
    /// A binary-coloring grid must have an even side length.
    OddSide {
        /// The offending side length.
        side: usize,
    },
    /// The grid has a fixed expected size which the input does not match.
    SideMismatch {
        /// The required side length.
        expected: usize,
        /// The side length derived from the input.
        actual: usize,
    },
    /// A given cell value lies outside the puzzle's digit range.
    ValueOutOfRange {
        /// The cell holding the bad value.
        cell: usize,
        /// The bad value.
        value: u8,
    },
    /// Two waypoint cells carry the same order label.
    DuplicateWaypoint {
        /// The repeated label.
        label: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::NotSquare { len } => {
                write!(f, "grid length {len} is not a perfect square")
            },
            Error::PairOutOfBounds { pair, cells } => {
                write!(
                    f,
                    "relation pair ({}, {}) references a cell outside 0..{cells}",
                    pair.0, pair.1
                )
            },
            Error::RegionCountMismatch { regions, side } => {
                write!(
                    f,
                    "expected {side} regions for a {side}x{side} grid, found {regions}"
                )
            },
            Error::OddSide { side } => {
                write!(f, "side length {side} is odd, expected an even board")
            },
            Error::SideMismatch { expected, actual } => {
                write!(
                    f,
                    "expected a {expected}x{expected} grid, found side length {actual}"
                )
            },
            Error::ValueOutOfRange { cell, value } => {
                write!(f, "given value {value} at cell {cell} is out of range")
            },
            Error::DuplicateWaypoint { label } => {
                write!(f, "waypoint label {label} appears more than once")
            },
        }
    }
}

impl std::error::Error for Error {}
