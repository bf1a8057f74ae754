//! The grid of cells.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
};
use rand::Rng;
use std::{
    fmt::{self, Display, Formatter},
    ops::{Index, IndexMut},
    slice::ChunksExact,
};

/// A rectangular grid of cells.
///
/// Cells are stored in row-major order. All rows have the same length,
/// and both dimensions are at least 1.
///
/// A grid is a snapshot of one generation. The [`World`](crate::World)
/// owns the grids it evolves; a renderer should borrow the current grid,
/// draw it, and let go of the borrow before the next step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// The cells, in row-major order.
    cells: Vec<State>,
}

impl Grid {
    /// Creates an all-dead grid with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        if rows < 1 || cols < 1 {
            return Err(Error::InvalidDimensions);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![DEAD; rows * cols],
        })
    }

    /// Creates a grid where every cell is alive with probability 1/2,
    /// drawn from the given random source.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, Error> {
        let mut grid = Self::new(rows, cols)?;
        for cell in grid.cells.iter_mut() {
            if rng.gen_bool(0.5) {
                *cell = ALIVE;
            }
        }
        Ok(grid)
    }

    /// Builds a grid from rows of cells.
    ///
    /// The caller guarantees that the rows are nonempty and of equal length.
    pub(crate) fn from_rows(rows: usize, cols: usize, cells: Vec<State>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Gets the state of the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<State, Error> {
        let (row, col) = coord;
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds(coord));
        }
        Ok(self.cells[row * self.cols + col])
    }

    /// Sets the state of the cell at `coord`.
    ///
    /// The state must be [`DEAD`] or [`ALIVE`].
    pub fn set(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        let (row, col) = coord;
        if row >= self.rows || col >= self.cols {
            return Err(Error::OutOfBounds(coord));
        }
        if state != DEAD && state != ALIVE {
            return Err(Error::InvalidValue(state));
        }
        self.cells[row * self.cols + col] = state;
        Ok(())
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    /// Iterates over the rows of the grid, as slices of cells.
    pub fn iter_rows(&self) -> ChunksExact<'_, State> {
        self.cells.chunks_exact(self.cols)
    }
}

impl Index<Coord> for Grid {
    type Output = State;

    #[inline]
    fn index(&self, (row, col): Coord) -> &State {
        assert!(row < self.rows && col < self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<Coord> for Grid {
    #[inline]
    fn index_mut(&mut self, (row, col): Coord) -> &mut State {
        assert!(row < self.rows && col < self.cols);
        &mut self.cells[row * self.cols + col]
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`.
///
/// This is for viewing only. The file format lives in [`codec`](crate::codec).
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for &cell in row {
                f.write_str(if cell == ALIVE { "o" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
