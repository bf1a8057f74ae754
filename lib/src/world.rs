//! The world.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    error::Error,
    grid::Grid,
    neighborhood::count_live_neighbors,
};
use std::mem;

/// The world.
///
/// Owns the current generation of cells and the one before it,
/// and evolves them by the rule `B3/S23`.
///
/// The world halts when the current generation equals the previous one,
/// or when the generation count reaches `max_generations`. Halting is
/// derived from the grids on every call, never stored: editing a cell of
/// a stagnant world makes it steppable again.
///
/// The stagnation check only looks one generation back, so an oscillator
/// such as the blinker is never detected and keeps stepping until
/// `max_generations`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    /// The current generation of cells.
    current: Grid,

    /// The previous generation of cells.
    ///
    /// Only used for the stagnation check.
    previous: Grid,

    /// The generation count, starting at 1.
    generation: u64,

    /// The upper bound on the generation count.
    ///
    /// `None` means that the world may evolve forever.
    max_generations: Option<u64>,
}

impl World {
    /// Creates a world whose first generation is the given grid.
    ///
    /// The previous generation starts all-dead, so the first stagnation
    /// check never reports no-change for a nonempty grid.
    pub fn from_grid(grid: Grid) -> Self {
        let previous = Grid::from_rows(
            grid.rows(),
            grid.cols(),
            vec![DEAD; grid.rows() * grid.cols()],
        );
        Self {
            current: grid,
            previous,
            generation: 1,
            max_generations: None,
        }
    }

    /// The current generation of cells.
    #[inline]
    pub const fn current(&self) -> &Grid {
        &self.current
    }

    /// The generation count.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.current.rows()
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.current.cols()
    }

    /// Number of living cells in the current generation.
    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Sets the upper bound on the generation count.
    ///
    /// This is the only parameter that you can change while the
    /// world is evolving.
    pub fn set_max_generations(&mut self, max_generations: Option<u64>) {
        self.max_generations = max_generations;
    }

    /// Whether the generation count has reached its upper bound.
    pub fn is_max_generations_exceeded(&self) -> bool {
        self.max_generations
            .map_or(false, |max| self.generation >= max)
    }

    /// Whether the current generation differs from the previous one.
    pub fn is_changing(&self) -> bool {
        self.previous != self.current
    }

    /// Whether [`step`](Self::step) would do nothing.
    pub fn is_halted(&self) -> bool {
        self.is_max_generations_exceeded() || !self.is_changing()
    }

    /// Sets the state of one cell of the current generation.
    ///
    /// For interactive editing. Call it between steps, not during one.
    pub fn set_cell(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        self.current.set(coord, state)
    }

    /// Flips the state of one cell of the current generation.
    ///
    /// Returns the new state.
    pub fn toggle_cell(&mut self, coord: Coord) -> Result<State, Error> {
        let state = !self.current.get(coord)?;
        self.current.set(coord, state)?;
        Ok(state)
    }

    /// Evolves the world by one generation.
    ///
    /// Does nothing if the world [is halted](Self::is_halted). Otherwise
    /// the next generation is built from the current one, the current
    /// grid is moved into `previous` without copying, and the generation
    /// count grows by 1.
    pub fn step(&mut self) {
        if self.is_halted() {
            return;
        }
        let next = self.next_generation();
        self.previous = mem::replace(&mut self.current, next);
        self.generation += 1;
    }

    /// Applies the rule to every cell of the current generation.
    fn next_generation(&self) -> Grid {
        let (rows, cols) = (self.rows(), self.cols());
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let neighbors = count_live_neighbors(&self.current, (row, col));
                cells.push(next_state(self.current[(row, col)], neighbors));
            }
        }
        Grid::from_rows(rows, cols, cells)
    }
}

/// The rule `B3/S23`.
///
/// A living cell survives with 2 or 3 living neighbors;
/// a dead cell is born with exactly 3.
fn next_state(state: State, neighbors: u8) -> State {
    let alive = match state {
        ALIVE => neighbors == 2 || neighbors == 3,
        _ => neighbors == 3,
    };
    if alive {
        ALIVE
    } else {
        DEAD
    }
}
