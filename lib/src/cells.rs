//! Cells in the cellular automaton.

use std::{
    fmt::{self, Display, Formatter},
    ops::Not,
};

/// Possible states of a cell.
///
/// Only [`DEAD`] and [`ALIVE`] are meaningful to the simulation;
/// a [`Grid`](crate::Grid) never stores anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State(pub u8);

/// The Dead state.
pub const DEAD: State = State(0);
/// The Alive state.
pub const ALIVE: State = State(1);

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            ALIVE => DEAD,
            _ => ALIVE,
        }
    }
}

/// Writes the state as its decimal digit, `0` or `1`.
impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`. Both coordinates are 0-indexed.
pub type Coord = (usize, usize);
