//! All kinds of errors in this crate.

use crate::{
    cells::{Coord, State},
    codec::ParseError,
};
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Rows / columns should be positive.
    InvalidDimensions,
    /// Cell at {0:?} is outside the grid.
    OutOfBounds(Coord),
    /// Invalid cell state: {0:?}.
    InvalidValue(State),
    /// Invalid pattern: {0}.
    ParseError(#[from] ParseError),
}
