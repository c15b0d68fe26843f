//! A waypoint-path puzzle asks for a single
//! [Hamiltonian path](https://en.wikipedia.org/wiki/Hamiltonian_path) over
//! the grid: every cell visited exactly once, moving between orthogonal
//! neighbors, passing through numbered waypoint cells in ascending label
//! order and never crossing a declared wall.
//!
//! Unlike the other models this is not an independent-cell assignment: the
//! only choice at each step is which neighbor of the path's frontier to
//! visit next.

use crate::{Assignment, Error, Grid, Model, PairSet, Placement};

/// The most recently visited cell of an in-progress path, from which the
/// next step is chosen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Frontier {
    /// The cell holding the highest visit number so far.
    pub cell: usize,
    /// The visit number the next extension will receive.
    pub next: u32,
}

/// An instance of the waypoint-path puzzle.
#[derive(Debug, Clone)]
pub struct Zip {
    grid: Grid,
    // (cell, label) sorted by ascending label.
    waypoints: Vec<(usize, u32)>,
    walls: PairSet,
}

impl Zip {
    /// Create a puzzle from a flat, row-major sequence of waypoint labels
    /// (`0` for plain cells) and a list of walls between orthogonally
    /// adjacent cells.
    ///
    /// Wall pairs may be supplied in either or both directions. Fails with
    /// [`Error::NotSquare`], [`Error::PairOutOfBounds`], or
    /// [`Error::DuplicateWaypoint`] on malformed input.
    pub fn new(labels: &[u32], walls: &[(usize, usize)]) -> Result<Self, Error> {
        let grid = Grid::from_len(labels.len())?;
        let walls = PairSet::new(walls.iter().copied(), labels.len())?;

        let mut waypoints: Vec<(usize, u32)> = labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label != 0)
            .map(|(cell, &label)| (cell, label))
            .collect();
        waypoints.sort_by_key(|&(_, label)| label);

        for pair in waypoints.windows(2) {
            if pair[0].1 == pair[1].1 {
                return Err(Error::DuplicateWaypoint { label: pair[0].1 });
            }
        }

        Ok(Zip {
            grid,
            waypoints,
            walls,
        })
    }

    /// Return the board geometry.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The cell the path starts from: the lowest-labeled waypoint, or cell 0
    /// when the puzzle declares no waypoints.
    pub fn start_cell(&self) -> usize {
        self.waypoints.first().map_or(0, |&(cell, _)| cell)
    }

    /// Solve the puzzle.
    ///
    /// Returns the visit number of every cell (`1..=n²`, row-major), or
    /// `None` if no full path exists.
    pub fn solve(&self) -> Option<Vec<u32>> {
        let solution = self.solver().solve()?;
        let path: Vec<u32> = solution
            .iter()
            .map(|visit| visit.expect("complete path left a cell unvisited"))
            .collect();

        debug_assert!(self.verify(&path), "search accepted an invalid path");
        Some(path)
    }

    /// Return true if `path` is a complete, valid solution to this puzzle.
    pub fn verify(&self, path: &[u32]) -> bool {
        let cells = self.grid.len();
        if path.len() != cells {
            return false;
        }
        if cells == 0 {
            return true;
        }

        // Every visit number 1..=n² exactly once.
        let mut cell_of_visit = vec![usize::MAX; cells];
        for (cell, &visit) in path.iter().enumerate() {
            if visit == 0 || visit as usize > cells || cell_of_visit[visit as usize - 1] != usize::MAX
            {
                return false;
            }
            cell_of_visit[visit as usize - 1] = cell;
        }

        if cell_of_visit[0] != self.start_cell() {
            return false;
        }

        // Consecutive visits must be orthogonal neighbors with no wall
        // between them.
        for step in cell_of_visit.windows(2) {
            let (from, to) = (step[0], step[1]);
            if !self.grid.orthogonal_neighbors(from).contains(&to) || self.walls.contains(from, to)
            {
                return false;
            }
        }

        // Waypoints in ascending label order get ascending visit numbers.
        self.waypoints
            .windows(2)
            .all(|pair| path[pair[0].0] < path[pair[1].0])
    }

    // Waypoint-order check with `placement` overlaid on the assignment: in
    // label order, no waypoint may be visited while a lower-labeled one is
    // still unreached, and visit numbers must ascend.
    fn waypoints_ordered(&self, assignment: &Assignment<u32>, placement: &Placement<u32>) -> bool {
        let at = |cell: usize| {
            if cell == placement.cell {
                Some(placement.value)
            } else {
                assignment.get(cell)
            }
        };

        let mut last_visit = 0;
        let mut unreached_earlier = false;
        for &(cell, _) in &self.waypoints {
            match at(cell) {
                Some(visit) => {
                    if unreached_earlier || visit < last_visit {
                        return false;
                    }
                    last_visit = visit;
                }
                None => unreached_earlier = true,
            }
        }

        true
    }
}

impl Model for Zip {
    type Value = u32;
    type Variable = Frontier;

    fn cell_count(&self) -> usize {
        self.grid.len()
    }

    fn seed(&self, assignment: &mut Assignment<u32>) {
        if !assignment.is_empty() {
            assignment.assign(self.start_cell(), 1);
        }
    }

    fn select_variable(&self, assignment: &Assignment<u32>) -> Option<Frontier> {
        let (cell, visit) = (0..assignment.len())
            .filter_map(|cell| assignment.get(cell).map(|visit| (cell, visit)))
            .max_by_key(|&(_, visit)| visit)?;

        if visit as usize == self.grid.len() {
            // Every cell visited: the path is complete.
            None
        } else {
            Some(Frontier {
                cell,
                next: visit + 1,
            })
        }
    }

    fn placements(&self, assignment: &Assignment<u32>, frontier: &Frontier) -> Vec<Placement<u32>> {
        self.grid
            .orthogonal_neighbors(frontier.cell)
            .into_iter()
            .filter(|&cell| !assignment.is_assigned(cell) && !self.walls.contains(frontier.cell, cell))
            .map(|cell| Placement {
                cell,
                value: frontier.next,
            })
            .collect()
    }

    fn is_consistent(&self, assignment: &Assignment<u32>, placement: &Placement<u32>) -> bool {
        self.waypoints_ordered(assignment, placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            Zip::new(&[0; 10], &[]),
            Err(Error::NotSquare { len: 10 })
        ));
        assert!(matches!(
            Zip::new(&[0; 9], &[(0, 9)]),
            Err(Error::PairOutOfBounds { pair: (0, 9), cells: 9 })
        ));
        assert!(matches!(
            Zip::new(&[1, 0, 0, 1], &[]),
            Err(Error::DuplicateWaypoint { label: 1 })
        ));
    }

    #[test]
    fn full_path_between_two_waypoints() {
        // 3x3, start top-left, end bottom-right, no walls. The frontier
        // tries up, down, left, right, so the first path found is fixed.
        let puzzle = Zip::new(&[1, 0, 0, 0, 0, 0, 0, 0, 2], &[]).unwrap();

        let path = puzzle.solve().unwrap();
        assert_eq!(path, vec![1, 6, 7, 2, 5, 8, 3, 4, 9]);
        assert!(puzzle.verify(&path));
        // Start before end.
        assert!(path[0] < path[8]);
    }

    #[test]
    fn waypoint_order_prunes_early_finishes() {
        // Cell 8 (label 2) must be reached before cell 2 (label 3), which
        // rules out the path the unconstrained search would find first.
        let puzzle = Zip::new(&[1, 0, 3, 0, 0, 0, 0, 0, 2], &[]).unwrap();

        let path = puzzle.solve().unwrap();
        assert_eq!(path, vec![1, 8, 7, 2, 9, 6, 3, 4, 5]);
        assert!(path[8] < path[2]);
    }

    #[test]
    fn walled_in_start_is_unsolvable() {
        // Both exits from cell 0 are walled off.
        let puzzle = Zip::new(&[1, 0, 0, 0, 0, 0, 0, 0, 2], &[(0, 1), (0, 3)]).unwrap();

        assert_eq!(puzzle.solve(), None);
    }

    #[test]
    fn walls_reroute_the_path() {
        // 2x2 with a wall on the right edge of the start cell: only one
        // direction remains at each step.
        let puzzle = Zip::new(&[1, 0, 0, 2], &[(0, 1)]).unwrap();

        let path = puzzle.solve().unwrap();
        assert_eq!(path, vec![1, 4, 2, 3]);
    }

    #[test]
    fn single_cell_board() {
        let puzzle = Zip::new(&[1], &[]).unwrap();

        assert_eq!(puzzle.solve(), Some(vec![1]));
    }
}
