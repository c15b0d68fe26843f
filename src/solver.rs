//! The generic depth-first backtracking engine shared by every puzzle model.

use crate::{Model, Placement};

/// The mutable solution-in-progress: one slot per board cell, `None` while
/// unassigned.
///
/// An `Assignment` is owned by exactly one search; the engine mutates it in
/// place during trial-and-undo and hands it back by value once complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<V> {
    cells: Vec<Option<V>>,
}

impl<V: Copy> Assignment<V> {
    /// Create an assignment with every cell unassigned.
    pub fn new(len: usize) -> Self {
        Assignment {
            cells: vec![None; len],
        }
    }

    /// Return the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return true if the assignment covers no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Return the value at `cell`, or `None` if it is unassigned.
    pub fn get(&self, cell: usize) -> Option<V> {
        self.cells[cell]
    }

    /// Return true if `cell` holds a value.
    pub fn is_assigned(&self, cell: usize) -> bool {
        self.cells[cell].is_some()
    }

    /// Commit a value to a cell.
    pub fn assign(&mut self, cell: usize, value: V) {
        self.cells[cell] = Some(value);
    }

    /// Revert a cell to unassigned.
    pub fn clear(&mut self, cell: usize) {
        self.cells[cell] = None;
    }

    /// Iterate over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Option<V>> + '_ {
        self.cells.iter().copied()
    }

    /// Consume the assignment, yielding the flat cell sequence.
    pub fn into_cells(self) -> Vec<Option<V>> {
        self.cells
    }
}

/// Depth-first exhaustive search with constraint pruning, parameterized by a
/// [`Model`].
///
/// The search is chronological: it commits one placement at a time, recurses,
/// and undoes the placement when the subtree fails. No learning, no
/// snapshots. Given identical inputs the search order is fixed, so the first
/// solution found is the same on every run.
#[derive(Debug)]
pub struct Solver<'m, M: Model> {
    model: &'m M,
    assignment: Assignment<M::Value>,
    steps: u64,
}

impl<'m, M> Solver<'m, M>
where
    M: Model,
{
    /// Create a solver over the given model, seeding the assignment with the
    /// model's given cells.
    pub fn new(model: &'m M) -> Self {
        let mut assignment = Assignment::new(model.cell_count());
        model.seed(&mut assignment);

        Solver {
            model,
            assignment,
            steps: 0,
        }
    }

    /// Run the search to completion.
    ///
    /// Returns the completed assignment for the first solution found, or
    /// `None` if the constraint set is unsatisfiable. The returned value is
    /// detached from the engine; callers never observe intermediate
    /// backtracking states.
    ///
    /// Seeded givens are validated first: the "complete by invariant" base
    /// case only holds for cells the search placed itself, so a board whose
    /// givens already contradict each other is unsatisfiable, not solved.
    pub fn solve(mut self) -> Option<Assignment<M::Value>> {
        let solved = self.seeds_consistent() && self.search();
        log::debug!(
            "search over {} cells finished: solved={} placements_tried={}",
            self.assignment.len(),
            solved,
            self.steps
        );

        if solved {
            Some(self.assignment)
        } else {
            None
        }
    }

    // Re-check every seeded cell against the rest of the assignment, the
    // same way a trial placement would be checked. Runs once, before the
    // search.
    fn seeds_consistent(&mut self) -> bool {
        for cell in 0..self.assignment.len() {
            let value = match self.assignment.get(cell) {
                Some(value) => value,
                None => continue,
            };

            self.assignment.clear(cell);
            let consistent = self
                .model
                .is_consistent(&self.assignment, &Placement { cell, value });
            self.assignment.assign(cell, value);

            if !consistent {
                return false;
            }
        }

        true
    }

    fn search(&mut self) -> bool {
        let variable = match self.model.select_variable(&self.assignment) {
            // No unassigned variable remains: complete by invariant.
            None => return true,
            Some(variable) => variable,
        };

        for placement in self.model.placements(&self.assignment, &variable) {
            if !self.model.is_consistent(&self.assignment, &placement) {
                continue;
            }

            self.steps += 1;
            self.assignment.assign(placement.cell, placement.value);
            if self.search() {
                return true;
            }
            self.assignment.clear(placement.cell);
        }

        false
    }
}
