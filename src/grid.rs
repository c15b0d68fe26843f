//! Board geometry shared by every puzzle model: flat row-major cell
//! indexing and symmetric cell-pair relations (walls, same/different
//! constraints).

use crate::Error;
use std::collections::HashSet;

/// The geometry of a square board backed by a flat, row-major cell sequence.
///
/// A `Grid` carries no cell contents, only the side length and the index
/// arithmetic derived from it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
}

impl Grid {
    /// Derive a grid from the length of a flat cell sequence.
    ///
    /// Fails with [`Error::NotSquare`] if `len` is not a perfect square.
    pub fn from_len(len: usize) -> Result<Self, Error> {
        let side = (len as f64).sqrt().round() as usize;
        if side * side != len {
            return Err(Error::NotSquare { len });
        }

        Ok(Grid { side })
    }

    /// Return the side length of the board.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Return the number of cells on the board.
    pub fn len(&self) -> usize {
        self.side * self.side
    }

    /// Return true if the board has no cells.
    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    /// Return the row of a flat cell index.
    pub fn row(&self, cell: usize) -> usize {
        cell / self.side
    }

    /// Return the column of a flat cell index.
    pub fn column(&self, cell: usize) -> usize {
        cell % self.side
    }

    /// Return the flat index of a (row, column) coordinate.
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.side + column
    }

    /// Return the orthogonal neighbors of a cell in up, down, left, right
    /// order.
    ///
    /// The order is load-bearing: the waypoint-path model tries frontier
    /// extensions in exactly this order, which fixes which solution a search
    /// finds first.
    pub fn orthogonal_neighbors(&self, cell: usize) -> Vec<usize> {
        let side = self.side;
        let mut neighbors = Vec::with_capacity(4);

        if cell >= side {
            neighbors.push(cell - side);
        }
        if cell + side < self.len() {
            neighbors.push(cell + side);
        }
        if cell % side > 0 {
            neighbors.push(cell - 1);
        }
        if cell % side < side - 1 {
            neighbors.push(cell + 1);
        }

        neighbors
    }

    /// Return all cells of the 3×3 neighborhood around a cell, excluding the
    /// cell itself (king-move adjacency).
    pub fn king_neighbors(&self, cell: usize) -> Vec<usize> {
        let side = self.side as isize;
        let (row, column) = (self.row(cell) as isize, self.column(cell) as isize);
        let mut neighbors = Vec::with_capacity(8);

        for r in (row - 1)..=(row + 1) {
            for c in (column - 1)..=(column + 1) {
                if r < 0 || r >= side || c < 0 || c >= side || (r, c) == (row, column) {
                    continue;
                }
                neighbors.push((r * side + c) as usize);
            }
        }

        neighbors
    }
}

/// An unordered set of symmetric cell-index pairs.
///
/// Callers hand in pairs in either or both directions; lookup is
/// order-independent either way because pairs are normalized on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSet {
    pairs: HashSet<(usize, usize)>,
}

impl PairSet {
    /// Build a pair set over a board with `cells` cells.
    ///
    /// Fails with [`Error::PairOutOfBounds`] if either endpoint of a pair is
    /// not a valid cell index.
    pub fn new(
        pairs: impl IntoIterator<Item = (usize, usize)>,
        cells: usize,
    ) -> Result<Self, Error> {
        let mut normalized = HashSet::new();

        for (a, b) in pairs {
            if a >= cells || b >= cells {
                return Err(Error::PairOutOfBounds { pair: (a, b), cells });
            }
            normalized.insert((a.min(b), a.max(b)));
        }

        Ok(PairSet { pairs: normalized })
    }

    /// Return true if the pair `(a, b)` is present, in either order.
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.pairs.contains(&(a.min(b), a.max(b)))
    }

    /// Return the number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Return true if the set holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the normalized `(low, high)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }
}
